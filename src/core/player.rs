//! Player records and their attribute types
//!
//! A `Player` is validated once when the roster is loaded. Every attribute the
//! scorer compares is stored as a typed value so comparison never re-parses text.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Coarse playing role used for "close" role hints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleCategory {
    Allrounder,
    Bowler,
    Batter,
}

impl RoleCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Allrounder => "All-rounder",
            Self::Bowler => "Bowler",
            Self::Batter => "Batter",
        }
    }
}

/// Playing role as listed in the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Batter,
    OpeningBatter,
    WicketkeeperBatter,
    Bowler,
    PaceBowler,
    SpinBowler,
    Allrounder,
    BattingAllrounder,
    BowlingAllrounder,
}

impl Role {
    /// Every role, in roster display order
    pub const ALL: [Self; 9] = [
        Self::Batter,
        Self::OpeningBatter,
        Self::WicketkeeperBatter,
        Self::Bowler,
        Self::PaceBowler,
        Self::SpinBowler,
        Self::Allrounder,
        Self::BattingAllrounder,
        Self::BowlingAllrounder,
    ];

    /// The coarse category of this role
    ///
    /// Any all-rounder variant is an all-rounder first, so "Bowling Allrounder"
    /// never counts as a bowler.
    #[must_use]
    pub const fn category(self) -> RoleCategory {
        match self {
            Self::Allrounder | Self::BattingAllrounder | Self::BowlingAllrounder => {
                RoleCategory::Allrounder
            }
            Self::Bowler | Self::PaceBowler | Self::SpinBowler => RoleCategory::Bowler,
            Self::Batter | Self::OpeningBatter | Self::WicketkeeperBatter => RoleCategory::Batter,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Batter => "Batter",
            Self::OpeningBatter => "Opening Batter",
            Self::WicketkeeperBatter => "Wicketkeeper Batter",
            Self::Bowler => "Bowler",
            Self::PaceBowler => "Pace Bowler",
            Self::SpinBowler => "Spin Bowler",
            Self::Allrounder => "Allrounder",
            Self::BattingAllrounder => "Batting Allrounder",
            Self::BowlingAllrounder => "Bowling Allrounder",
        }
    }

    /// Parse a role label, ignoring case, whitespace and hyphens
    ///
    /// # Examples
    /// ```
    /// use cricket_wordle::core::Role;
    ///
    /// assert_eq!(Role::parse("Bowling All-rounder"), Some(Role::BowlingAllrounder));
    /// assert_eq!(Role::parse("  wicketkeeper batter "), Some(Role::WicketkeeperBatter));
    /// assert_eq!(Role::parse("umpire"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let key = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|role| normalize_label(role.label()) == key)
    }
}

impl FromStr for Role {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PlayerError::UnknownRole(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Batting hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BattingHand {
    Left,
    Right,
}

impl BattingHand {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl FromStr for BattingHand {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "left" | "l" | "lefthanded" | "lhb" => Ok(Self::Left),
            "right" | "r" | "righthanded" | "rhb" => Ok(Self::Right),
            _ => Err(PlayerError::UnknownBattingHand(s.to_string())),
        }
    }
}

impl fmt::Display for BattingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Geographic grouping used for "close" nation hints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Asia,
    Europe,
    Oceania,
    Africa,
    Americas,
}

impl Region {
    /// Look up the region of a cricket nation
    ///
    /// Returns `None` for nations outside the fixed table; those never produce a
    /// region hint.
    ///
    /// # Examples
    /// ```
    /// use cricket_wordle::core::Region;
    ///
    /// assert_eq!(Region::of("Pakistan"), Some(Region::Asia));
    /// assert_eq!(Region::of("West Indies"), Some(Region::Americas));
    /// assert_eq!(Region::of("Thailand"), None);
    /// ```
    #[must_use]
    pub fn of(nation: &str) -> Option<Self> {
        match nation {
            "India" | "Pakistan" | "Sri Lanka" | "Bangladesh" | "Afghanistan" | "Nepal" => {
                Some(Self::Asia)
            }
            "England" | "Ireland" | "Scotland" | "Netherlands" => Some(Self::Europe),
            "Australia" | "New Zealand" => Some(Self::Oceania),
            "South Africa" | "Zimbabwe" => Some(Self::Africa),
            "West Indies" | "USA" => Some(Self::Americas),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::Oceania => "Oceania",
            Self::Africa => "Africa",
            Self::Americas => "Americas",
        }
    }
}

/// Error type for invalid player records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    EmptyName,
    EmptyNation,
    UnknownRole(String),
    UnknownBattingHand(String),
    InvalidRetired(String),
    InvalidBirthDate(String),
    InvalidMatchCount(String),
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Player name must not be empty"),
            Self::EmptyNation => write!(f, "Player nation must not be empty"),
            Self::UnknownRole(role) => write!(f, "Unknown role '{role}'"),
            Self::UnknownBattingHand(hand) => {
                write!(f, "Batting hand must be Left or Right, got '{hand}'")
            }
            Self::InvalidRetired(value) => {
                write!(f, "Retired flag must be yes or no, got '{value}'")
            }
            Self::InvalidBirthDate(value) => {
                write!(f, "Birth date must be YYYY-MM-DD, got '{value}'")
            }
            Self::InvalidMatchCount(value) => {
                write!(f, "Total matches must be a non-negative integer, got '{value}'")
            }
        }
    }
}

impl std::error::Error for PlayerError {}

/// Unvalidated player row, as read from a roster CSV
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub nation: String,
    pub role: String,
    pub batting_hand: String,
    pub current_team: String,
    pub retired: String,
    pub born: String,
    pub total_matches: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A women's cricket player
///
/// Immutable after construction; the builder methods consume `self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    nation: String,
    role: Role,
    batting_hand: BattingHand,
    current_team: String,
    retired: bool,
    born: NaiveDate,
    total_matches: u32,
    image: Option<String>,
}

/// Team value used for players without a franchise contract
pub const NO_TEAM: &str = "None";

impl Player {
    /// Create a player with no team, not retired and zero matches
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use cricket_wordle::core::{BattingHand, Player, Role};
    ///
    /// let born = NaiveDate::from_ymd_opt(1996, 7, 18).unwrap();
    /// let player = Player::new("Smriti Mandhana", "India", Role::OpeningBatter, BattingHand::Left, born)
    ///     .with_team("Royal Challengers Bengaluru")
    ///     .with_total_matches(250);
    ///
    /// assert_eq!(player.birth_year(), 1996);
    /// assert!(!player.retired());
    /// ```
    pub fn new(
        name: impl Into<String>,
        nation: impl Into<String>,
        role: Role,
        batting_hand: BattingHand,
        born: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            nation: nation.into(),
            role,
            batting_hand,
            current_team: NO_TEAM.to_string(),
            retired: false,
            born,
            total_matches: 0,
            image: None,
        }
    }

    #[must_use]
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.current_team = team.into();
        self
    }

    #[must_use]
    pub const fn with_retired(mut self, retired: bool) -> Self {
        self.retired = retired;
        self
    }

    #[must_use]
    pub const fn with_total_matches(mut self, total_matches: u32) -> Self {
        self.total_matches = total_matches;
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn nation(&self) -> &str {
        &self.nation
    }

    #[inline]
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[inline]
    #[must_use]
    pub const fn batting_hand(&self) -> BattingHand {
        self.batting_hand
    }

    #[inline]
    #[must_use]
    pub fn current_team(&self) -> &str {
        &self.current_team
    }

    #[inline]
    #[must_use]
    pub const fn retired(&self) -> bool {
        self.retired
    }

    #[inline]
    #[must_use]
    pub const fn born(&self) -> NaiveDate {
        self.born
    }

    #[inline]
    #[must_use]
    pub fn birth_year(&self) -> i32 {
        self.born.year()
    }

    #[inline]
    #[must_use]
    pub const fn total_matches(&self) -> u32 {
        self.total_matches
    }

    #[inline]
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Region of the player's nation, if the nation is in the region table
    #[must_use]
    pub fn region(&self) -> Option<Region> {
        Region::of(&self.nation)
    }
}

impl TryFrom<PlayerRecord> for Player {
    type Error = PlayerError;

    fn try_from(record: PlayerRecord) -> Result<Self, Self::Error> {
        let name = record.name.trim();
        if name.is_empty() {
            return Err(PlayerError::EmptyName);
        }

        let nation = record.nation.trim();
        if nation.is_empty() {
            return Err(PlayerError::EmptyNation);
        }

        let role: Role = record.role.parse()?;
        let batting_hand: BattingHand = record.batting_hand.parse()?;
        let retired = parse_flag(&record.retired)?;

        let born = NaiveDate::parse_from_str(record.born.trim(), "%Y-%m-%d")
            .map_err(|_| PlayerError::InvalidBirthDate(record.born.clone()))?;

        let total_matches = record
            .total_matches
            .trim()
            .parse::<u32>()
            .map_err(|_| PlayerError::InvalidMatchCount(record.total_matches.clone()))?;

        let team = match record.current_team.trim() {
            "" => NO_TEAM,
            team => team,
        };

        let mut player = Self::new(name, nation, role, batting_hand, born)
            .with_team(team)
            .with_retired(retired)
            .with_total_matches(total_matches);

        if let Some(image) = record.image.as_deref().map(str::trim)
            && !image.is_empty()
        {
            player = player.with_image(image);
        }

        Ok(player)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn parse_flag(value: &str) -> Result<bool, PlayerError> {
    match value.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        _ => Err(PlayerError::InvalidRetired(value.to_string())),
    }
}

/// Lowercase and drop whitespace and hyphens ("All-rounder" == "allrounder")
fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PlayerRecord {
        PlayerRecord {
            name: "Ellyse Perry".to_string(),
            nation: "Australia".to_string(),
            role: "Allrounder".to_string(),
            batting_hand: "Right".to_string(),
            current_team: "Royal Challengers Bengaluru".to_string(),
            retired: "no".to_string(),
            born: "1990-11-03".to_string(),
            total_matches: "320".to_string(),
            image: None,
        }
    }

    #[test]
    fn role_categories_follow_precedence() {
        assert_eq!(Role::BowlingAllrounder.category(), RoleCategory::Allrounder);
        assert_eq!(Role::BattingAllrounder.category(), RoleCategory::Allrounder);
        assert_eq!(Role::SpinBowler.category(), RoleCategory::Bowler);
        assert_eq!(Role::WicketkeeperBatter.category(), RoleCategory::Batter);
        assert_eq!(Role::Batter.category(), RoleCategory::Batter);
    }

    #[test]
    fn role_parse_is_normalized() {
        assert_eq!(Role::parse("ALLROUNDER"), Some(Role::Allrounder));
        assert_eq!(Role::parse("all-rounder"), Some(Role::Allrounder));
        assert_eq!(Role::parse("Pace  Bowler"), Some(Role::PaceBowler));
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_labels_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.label()), Some(role));
        }
    }

    #[test]
    fn batting_hand_parse() {
        assert_eq!("Left".parse::<BattingHand>(), Ok(BattingHand::Left));
        assert_eq!("right".parse::<BattingHand>(), Ok(BattingHand::Right));
        assert!(matches!(
            "both".parse::<BattingHand>(),
            Err(PlayerError::UnknownBattingHand(_))
        ));
    }

    #[test]
    fn region_table() {
        assert_eq!(Region::of("India"), Region::of("Nepal"));
        assert_eq!(Region::of("Scotland"), Some(Region::Europe));
        assert_eq!(Region::of("Zimbabwe"), Some(Region::Africa));
        assert_eq!(Region::of("USA"), Some(Region::Americas));
        assert_ne!(Region::of("India"), Region::of("England"));
        assert_eq!(Region::of("india"), None); // Table is exact
    }

    #[test]
    fn player_from_record_valid() {
        let player = Player::try_from(record()).unwrap();

        assert_eq!(player.name(), "Ellyse Perry");
        assert_eq!(player.role(), Role::Allrounder);
        assert_eq!(player.batting_hand(), BattingHand::Right);
        assert_eq!(player.birth_year(), 1990);
        assert_eq!(player.total_matches(), 320);
        assert_eq!(player.region(), Some(Region::Oceania));
        assert!(!player.retired());
        assert_eq!(player.image(), None);
    }

    #[test]
    fn player_from_record_blank_team_and_image() {
        let rec = PlayerRecord {
            current_team: "  ".to_string(),
            image: Some(String::new()),
            ..record()
        };
        let player = Player::try_from(rec).unwrap();

        assert_eq!(player.current_team(), NO_TEAM);
        assert_eq!(player.image(), None);
    }

    #[test]
    fn player_from_record_rejects_bad_fields() {
        let bad_date = PlayerRecord {
            born: "03/11/1990".to_string(),
            ..record()
        };
        assert!(matches!(
            Player::try_from(bad_date),
            Err(PlayerError::InvalidBirthDate(_))
        ));

        let bad_matches = PlayerRecord {
            total_matches: "-4".to_string(),
            ..record()
        };
        assert!(matches!(
            Player::try_from(bad_matches),
            Err(PlayerError::InvalidMatchCount(_))
        ));

        let bad_retired = PlayerRecord {
            retired: "maybe".to_string(),
            ..record()
        };
        assert!(matches!(
            Player::try_from(bad_retired),
            Err(PlayerError::InvalidRetired(_))
        ));

        let no_name = PlayerRecord {
            name: " ".to_string(),
            ..record()
        };
        assert_eq!(Player::try_from(no_name), Err(PlayerError::EmptyName));

        let bad_role = PlayerRecord {
            role: "Umpire".to_string(),
            ..record()
        };
        assert!(matches!(
            Player::try_from(bad_role),
            Err(PlayerError::UnknownRole(_))
        ));
    }

    #[test]
    fn player_display() {
        let player = Player::try_from(record()).unwrap();
        assert_eq!(format!("{player}"), "Ellyse Perry");
    }
}
