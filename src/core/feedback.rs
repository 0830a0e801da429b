//! Guess feedback calculation and representation
//!
//! Each tracked attribute of a guess is classified against the secret player:
//! - Exact (green): identical value
//! - Close (orange): same region, same role category, or within a numeric band
//! - Miss (grey): anything else
//!
//! Close cells carry a short hint note. Numeric attributes also carry the
//! unsigned difference and the direction of the secret value.

use super::Player;
use std::fmt;

/// Birth years at most this far apart are close
pub const BIRTH_YEAR_CLOSE_RANGE: u32 = 2;

/// Match counts at most this far apart are close
pub const MATCHES_CLOSE_RANGE: u32 = 5;

pub const NOTE_SAME_CONTINENT: &str = "Same continent";
pub const NOTE_SIMILAR_ROLE: &str = "Similar role";
pub const NOTE_WITHIN_YEARS: &str = "Within 2 years";
pub const NOTE_WITHIN_MATCHES: &str = "Within 5 matches";

/// Number of tracked attributes
pub const ATTRIBUTE_COUNT: usize = 8;

/// A tracked player attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Name,
    Role,
    Nation,
    BattingHand,
    CurrentTeam,
    Retired,
    Born,
    TotalMatches,
}

impl Attribute {
    /// All attributes in share-grid order
    pub const ALL: [Self; ATTRIBUTE_COUNT] = [
        Self::Name,
        Self::Role,
        Self::Nation,
        Self::BattingHand,
        Self::CurrentTeam,
        Self::Retired,
        Self::Born,
        Self::TotalMatches,
    ];

    /// Column heading
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Player Name",
            Self::Role => "Role",
            Self::Nation => "Nation",
            Self::BattingHand => "Batting Hand",
            Self::CurrentTeam => "WPL",
            Self::Retired => "Retired?",
            Self::Born => "Born",
            Self::TotalMatches => "Intl Matches",
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Classification of a single attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    Exact,
    Close,
    Miss,
}

impl Hint {
    /// Share-grid glyph
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Close => '🟨',
            Self::Miss => '⬛',
        }
    }
}

/// Which way the secret value lies relative to the guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Secret value is higher (born later, more matches)
    Up,
    /// Secret value is lower
    Down,
}

impl Direction {
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Up => '↑',
            Self::Down => '↓',
        }
    }

    fn between<T: Ord>(guess: T, secret: T) -> Option<Self> {
        match guess.cmp(&secret) {
            std::cmp::Ordering::Less => Some(Self::Up),
            std::cmp::Ordering::Greater => Some(Self::Down),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Feedback for one attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub hint: Hint,
    /// Explanation shown for close results
    pub note: Option<&'static str>,
    /// Unsigned difference for numeric attributes
    pub difference: Option<u32>,
    pub direction: Option<Direction>,
}

impl Cell {
    const fn exact() -> Self {
        Self {
            hint: Hint::Exact,
            note: None,
            difference: None,
            direction: None,
        }
    }

    const fn miss() -> Self {
        Self {
            hint: Hint::Miss,
            note: None,
            difference: None,
            direction: None,
        }
    }

    const fn close(note: &'static str) -> Self {
        Self {
            hint: Hint::Close,
            note: Some(note),
            difference: None,
            direction: None,
        }
    }

    const fn matching(equal: bool) -> Self {
        if equal { Self::exact() } else { Self::miss() }
    }

    /// Classify a numeric difference against a closeness band
    fn banded(diff: u32, range: u32, note: &'static str, direction: Option<Direction>) -> Self {
        let mut cell = match diff {
            0 => Self::exact(),
            d if d <= range => Self::close(note),
            _ => Self::miss(),
        };
        if diff > 0 {
            cell.difference = Some(diff);
            cell.direction = direction;
        }
        cell
    }
}

/// Hint pattern of a guess, used to group candidates
pub type HintPattern = [Hint; ATTRIBUTE_COUNT];

/// Full feedback for a guess against the secret player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    cells: [Cell; ATTRIBUTE_COUNT],
}

impl Feedback {
    /// Calculate the feedback when `guess` is guessed and `secret` is the target
    ///
    /// Pure function of the two records. Classification of numeric attributes
    /// uses the unsigned difference; only the direction depends on order.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use cricket_wordle::core::{Attribute, BattingHand, Feedback, Hint, Player, Role};
    ///
    /// let guess = Player::new("A", "India", Role::PaceBowler, BattingHand::Right,
    ///     NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
    /// let secret = Player::new("B", "Pakistan", Role::SpinBowler, BattingHand::Right,
    ///     NaiveDate::from_ymd_opt(1991, 6, 1).unwrap());
    ///
    /// let feedback = Feedback::calculate(&guess, &secret);
    /// assert_eq!(feedback.cell(Attribute::Nation).hint, Hint::Close);
    /// assert_eq!(feedback.cell(Attribute::Role).note, Some("Similar role"));
    /// assert_eq!(feedback.cell(Attribute::Born).note, Some("Within 2 years"));
    /// assert_eq!(feedback.cell(Attribute::Name).hint, Hint::Miss);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Player, secret: &Player) -> Self {
        let mut cells = [Cell::miss(); ATTRIBUTE_COUNT];

        cells[Attribute::Name.index()] = Cell::matching(guess.name() == secret.name());
        cells[Attribute::Role.index()] = role_cell(guess, secret);
        cells[Attribute::Nation.index()] = nation_cell(guess, secret);
        cells[Attribute::BattingHand.index()] =
            Cell::matching(guess.batting_hand() == secret.batting_hand());
        cells[Attribute::CurrentTeam.index()] =
            Cell::matching(guess.current_team() == secret.current_team());
        cells[Attribute::Retired.index()] = Cell::matching(guess.retired() == secret.retired());

        let (guess_year, secret_year) = (guess.birth_year(), secret.birth_year());
        cells[Attribute::Born.index()] = Cell::banded(
            guess_year.abs_diff(secret_year),
            BIRTH_YEAR_CLOSE_RANGE,
            NOTE_WITHIN_YEARS,
            Direction::between(guess_year, secret_year),
        );

        let (guess_matches, secret_matches) = (guess.total_matches(), secret.total_matches());
        cells[Attribute::TotalMatches.index()] = Cell::banded(
            guess_matches.abs_diff(secret_matches),
            MATCHES_CLOSE_RANGE,
            NOTE_WITHIN_MATCHES,
            Direction::between(guess_matches, secret_matches),
        );

        Self { cells }
    }

    /// Feedback for one attribute
    #[inline]
    #[must_use]
    pub const fn cell(&self, attribute: Attribute) -> &Cell {
        &self.cells[attribute.index()]
    }

    /// Iterate attributes with their cells, in share-grid order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &Cell)> {
        Attribute::ALL.into_iter().zip(self.cells.iter())
    }

    /// Hints only, in share-grid order
    #[must_use]
    pub fn pattern(&self) -> HintPattern {
        self.cells.map(|cell| cell.hint)
    }

    /// Check if every attribute is exact
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.cells.iter().all(|cell| cell.hint == Hint::Exact)
    }

    /// Count the number of exact cells
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(Hint::Exact)
    }

    /// Count the number of close cells
    #[must_use]
    pub fn count_close(&self) -> usize {
        self.count(Hint::Close)
    }

    fn count(&self, hint: Hint) -> usize {
        self.cells.iter().filter(|cell| cell.hint == hint).count()
    }

    /// Convert feedback to one share-grid line, e.g. "⬛🟨🟩🟩⬛🟩🟨⬛"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.cells.iter().map(|cell| cell.hint.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

fn nation_cell(guess: &Player, secret: &Player) -> Cell {
    if guess.nation() == secret.nation() {
        return Cell::exact();
    }
    match (guess.region(), secret.region()) {
        (Some(a), Some(b)) if a == b => Cell::close(NOTE_SAME_CONTINENT),
        _ => Cell::miss(),
    }
}

fn role_cell(guess: &Player, secret: &Player) -> Cell {
    if guess.role() == secret.role() {
        Cell::exact()
    } else if guess.role().category() == secret.role().category() {
        Cell::close(NOTE_SIMILAR_ROLE)
    } else {
        Cell::miss()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BattingHand, Role};
    use chrono::NaiveDate;

    fn player(name: &str, nation: &str, role: Role, year: i32, matches: u32) -> Player {
        Player::new(
            name,
            nation,
            role,
            BattingHand::Right,
            NaiveDate::from_ymd_opt(year, 6, 15).unwrap(),
        )
        .with_total_matches(matches)
    }

    #[test]
    fn feedback_reflexive_is_perfect() {
        let p = player("Meg Lanning", "Australia", Role::Batter, 1992, 241)
            .with_team("Delhi Capitals")
            .with_retired(true);
        let feedback = Feedback::calculate(&p, &p);

        assert!(feedback.is_perfect());
        assert_eq!(feedback.count_exact(), ATTRIBUTE_COUNT);
        assert_eq!(feedback.count_close(), 0);
        assert!(feedback.iter().all(|(_, cell)| cell.note.is_none()));
        assert_eq!(feedback.to_emoji(), "🟩".repeat(ATTRIBUTE_COUNT));
    }

    #[test]
    fn birth_year_one_apart_is_close() {
        let guess = player("A", "India", Role::Batter, 1990, 100);
        let secret = player("B", "India", Role::Batter, 1991, 100);
        let cell = *Feedback::calculate(&guess, &secret).cell(Attribute::Born);

        assert_eq!(cell.hint, Hint::Close);
        assert_eq!(cell.note, Some(NOTE_WITHIN_YEARS));
        assert_eq!(cell.difference, Some(1));
        assert_eq!(cell.direction, Some(Direction::Up));
    }

    #[test]
    fn birth_year_band_edges() {
        let secret = player("S", "India", Role::Batter, 1995, 100);

        let two = player("A", "India", Role::Batter, 1993, 100);
        assert_eq!(
            Feedback::calculate(&two, &secret).cell(Attribute::Born).hint,
            Hint::Close
        );

        let three = player("B", "India", Role::Batter, 1998, 100);
        let cell = *Feedback::calculate(&three, &secret).cell(Attribute::Born);
        assert_eq!(cell.hint, Hint::Miss);
        assert_eq!(cell.note, None);
        assert_eq!(cell.difference, Some(3));
        assert_eq!(cell.direction, Some(Direction::Down));

        let five = player("C", "India", Role::Batter, 1990, 100);
        assert_eq!(
            Feedback::calculate(&five, &secret).cell(Attribute::Born).hint,
            Hint::Miss
        );
    }

    #[test]
    fn birth_year_uses_year_only() {
        let guess = Player::new(
            "A",
            "India",
            Role::Batter,
            BattingHand::Right,
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        );
        let secret = Player::new(
            "B",
            "India",
            Role::Batter,
            BattingHand::Right,
            NaiveDate::from_ymd_opt(1990, 12, 31).unwrap(),
        );
        let cell = *Feedback::calculate(&guess, &secret).cell(Attribute::Born);

        assert_eq!(cell.hint, Hint::Exact);
        assert_eq!(cell.difference, None);
        assert_eq!(cell.direction, None);
    }

    #[test]
    fn total_matches_bands() {
        let guess = player("A", "India", Role::Batter, 1990, 100);

        let near = player("B", "India", Role::Batter, 1990, 104);
        let cell = *Feedback::calculate(&guess, &near).cell(Attribute::TotalMatches);
        assert_eq!(cell.hint, Hint::Close);
        assert_eq!(cell.note, Some(NOTE_WITHIN_MATCHES));
        assert_eq!(cell.difference, Some(4));

        let edge = player("C", "India", Role::Batter, 1990, 95);
        assert_eq!(
            Feedback::calculate(&guess, &edge)
                .cell(Attribute::TotalMatches)
                .hint,
            Hint::Close
        );

        let far = player("D", "India", Role::Batter, 1990, 110);
        assert_eq!(
            Feedback::calculate(&guess, &far)
                .cell(Attribute::TotalMatches)
                .hint,
            Hint::Miss
        );
    }

    #[test]
    fn nation_same_region_is_close() {
        let india = player("A", "India", Role::Batter, 1990, 100);
        let pakistan = player("B", "Pakistan", Role::Batter, 1990, 100);
        let england = player("C", "England", Role::Batter, 1990, 100);

        let cell = *Feedback::calculate(&india, &pakistan).cell(Attribute::Nation);
        assert_eq!(cell.hint, Hint::Close);
        assert_eq!(cell.note, Some(NOTE_SAME_CONTINENT));

        let cell = *Feedback::calculate(&india, &england).cell(Attribute::Nation);
        assert_eq!(cell.hint, Hint::Miss);
        assert_eq!(cell.note, None);
    }

    #[test]
    fn nation_unmapped_never_close() {
        let thailand = player("A", "Thailand", Role::Batter, 1990, 100);
        let uae = player("B", "UAE", Role::Batter, 1990, 100);

        assert_eq!(
            Feedback::calculate(&thailand, &uae)
                .cell(Attribute::Nation)
                .hint,
            Hint::Miss
        );
        // Same unmapped nation is still an exact match
        assert_eq!(
            Feedback::calculate(&thailand, &thailand)
                .cell(Attribute::Nation)
                .hint,
            Hint::Exact
        );
    }

    #[test]
    fn role_category_match_is_close() {
        let pace = player("A", "India", Role::PaceBowler, 1990, 100);
        let spin = player("B", "India", Role::SpinBowler, 1990, 100);
        let bowling_ar = player("C", "India", Role::BowlingAllrounder, 1990, 100);
        let ar = player("D", "India", Role::Allrounder, 1990, 100);

        let cell = *Feedback::calculate(&pace, &spin).cell(Attribute::Role);
        assert_eq!(cell.hint, Hint::Close);
        assert_eq!(cell.note, Some(NOTE_SIMILAR_ROLE));

        // A bowling all-rounder is an all-rounder, not a bowler
        assert_eq!(
            Feedback::calculate(&pace, &bowling_ar)
                .cell(Attribute::Role)
                .hint,
            Hint::Miss
        );
        assert_eq!(
            Feedback::calculate(&bowling_ar, &ar).cell(Attribute::Role).hint,
            Hint::Close
        );
    }

    #[test]
    fn equality_attributes_symmetric() {
        let a = player("A", "India", Role::Batter, 1990, 100)
            .with_team("Mumbai Indians")
            .with_retired(true);
        let b = player("B", "Sri Lanka", Role::OpeningBatter, 1991, 103).with_team("UP Warriorz");

        let ab = Feedback::calculate(&a, &b);
        let ba = Feedback::calculate(&b, &a);

        assert_eq!(ab.pattern(), ba.pattern());
        for attribute in [Attribute::Born, Attribute::TotalMatches] {
            assert_eq!(ab.cell(attribute).difference, ba.cell(attribute).difference);
            assert_ne!(ab.cell(attribute).direction, ba.cell(attribute).direction);
        }
    }

    #[test]
    fn emoji_line_matches_hints() {
        let guess = player("A", "India", Role::PaceBowler, 1990, 100);
        let secret = player("B", "Pakistan", Role::SpinBowler, 1990, 150).with_retired(true);
        let feedback = Feedback::calculate(&guess, &secret);

        // name, role, nation, hand, team, retired, born, matches
        assert_eq!(feedback.to_emoji(), "⬛🟨🟨🟩🟩⬛🟩⬛");
        assert_eq!(format!("{feedback}"), feedback.to_emoji());
        assert_eq!(feedback.count_close(), 2);
        assert_eq!(feedback.count_exact(), 3);
    }
}
