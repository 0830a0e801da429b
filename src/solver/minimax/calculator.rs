//! Minimax worst-case calculation for hint patterns
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible pattern.

use crate::core::{Feedback, HintPattern, Player};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Examples
/// ```
/// use cricket_wordle::roster::Roster;
/// use cricket_wordle::solver::minimax::calculate_max_remaining;
///
/// let roster = Roster::embedded().unwrap();
/// let guess = roster.find("Smriti Mandhana").unwrap();
/// let candidates: Vec<_> = roster.players().iter().collect();
///
/// let max_remaining = calculate_max_remaining(guess, &candidates);
/// assert!(max_remaining < candidates.len());
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Player, candidates: &[&Player]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    let pattern_counts = group_by_pattern(guess, candidates);
    pattern_counts.values().max().copied().unwrap_or(0)
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern(guess: &Player, candidates: &[&Player]) -> FxHashMap<HintPattern, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = Feedback::calculate(guess, candidate).pattern();
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BattingHand, Role};
    use chrono::NaiveDate;

    fn player(name: &str, nation: &str, hand: BattingHand, year: i32) -> Player {
        Player::new(
            name,
            nation,
            Role::Batter,
            hand,
            NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
        )
    }

    #[test]
    fn max_remaining_perfect_split() {
        let a = player("A", "India", BattingHand::Right, 1990);
        let b = player("B", "England", BattingHand::Left, 2000);

        // Guessing A separates A (all exact) from B
        assert_eq!(calculate_max_remaining(&a, &[&a, &b]), 1);
    }

    #[test]
    fn max_remaining_all_same_pattern() {
        // Guess differs from every candidate in the same way
        let guess = player("G", "England", BattingHand::Left, 2000);
        let a = player("A", "India", BattingHand::Right, 1980);
        let b = player("B", "India", BattingHand::Right, 1981);
        let c = player("C", "India", BattingHand::Right, 1982);

        assert_eq!(calculate_max_remaining(&guess, &[&a, &b, &c]), 3);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let guess = player("G", "India", BattingHand::Right, 1990);
        assert_eq!(calculate_max_remaining(&guess, &[]), 0);
    }

    #[test]
    fn group_by_pattern_counts_every_candidate() {
        let guess = player("G", "India", BattingHand::Right, 1990);
        let a = player("A", "India", BattingHand::Left, 1990);
        let b = player("B", "India", BattingHand::Left, 1990);
        let c = player("C", "England", BattingHand::Right, 1970);

        let groups = group_by_pattern(&guess, &[&a, &b, &c]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.values().sum::<usize>(), 3);
    }
}
