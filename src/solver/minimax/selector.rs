//! Minimax-based guess selection
//!
//! Always selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Player;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Ties go to a guess that is itself still a candidate, then to the earliest
/// player in `guess_pool`. Returns the guess and its worst case, or `None` if
/// the guess pool is empty.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Player],
    candidates: &[&Player],
) -> Option<(&'a Player, usize)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            let max_remaining = calculate_max_remaining(guess, candidates);
            let is_candidate = candidates.iter().any(|c| c.name() == guess.name());
            (index, guess, max_remaining, is_candidate)
        })
        .min_by_key(|&(index, _, max, is_candidate)| (max, !is_candidate, index))
        .map(|(_, guess, max, _)| (guess, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BattingHand, Role};
    use chrono::NaiveDate;

    fn player(name: &str, nation: &str, role: Role, year: i32) -> Player {
        Player::new(
            name,
            nation,
            role,
            BattingHand::Right,
            NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
        )
    }

    #[test]
    fn selects_lowest_max_remaining() {
        let pool = [
            // Far from everyone: every candidate looks the same
            player("Outlier", "England", Role::PaceBowler, 1960),
            player("A", "India", Role::Batter, 1990),
            player("B", "India", Role::Batter, 2000),
        ];
        let candidates = [&pool[1], &pool[2]];

        let (best, max_remaining) = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best.name(), "A");
        assert_eq!(max_remaining, 1);
    }

    #[test]
    fn ties_prefer_candidates() {
        let pool = [
            player("Probe", "England", Role::PaceBowler, 1995),
            player("A", "India", Role::Batter, 1990),
        ];
        let candidates = [&pool[1]];

        // Both guesses leave one candidate; only A can win outright
        let (best, max_remaining) = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best.name(), "A");
        assert_eq!(max_remaining, 1);
    }

    #[test]
    fn ties_resolved_by_pool_order() {
        let pool = [
            player("First", "England", Role::PaceBowler, 1950),
            player("Second", "England", Role::PaceBowler, 1951),
        ];
        let target = player("Target", "India", Role::Batter, 1990);
        let candidates = [&target];

        for _ in 0..5 {
            let (best, _) = select_best_guess(&pool, &candidates).unwrap();
            assert_eq!(best.name(), "First");
        }
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let target = player("Target", "India", Role::Batter, 1990);
        assert!(select_best_guess(&[], &[&target]).is_none());
    }
}
