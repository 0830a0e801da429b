//! Main solver interface

use super::minimax::select_best_guess;
use crate::core::{Feedback, HintPattern, Player};
use crate::roster::Roster;

/// Roster solver
///
/// Every roster player is both a possible secret and a valid guess.
pub struct Solver<'a> {
    roster: &'a Roster,
    opening: Option<&'a Player>,
}

impl<'a> Solver<'a> {
    /// Create a solver for `roster`, precomputing the opening guess
    #[must_use]
    pub fn new(roster: &'a Roster) -> Self {
        let candidates: Vec<&Player> = roster.players().iter().collect();
        let opening = select_best_guess(roster.players(), &candidates).map(|(guess, _)| guess);
        Self { roster, opening }
    }

    /// Best guess before any feedback
    #[must_use]
    pub const fn first_guess(&self) -> Option<&'a Player> {
        self.opening
    }

    /// Get the next best guess given previous guesses and patterns
    ///
    /// # Parameters
    /// - `history`: Slice of (guess, pattern) pairs from previous turns
    ///
    /// Returns `None` if no roster player is consistent with the history.
    #[must_use]
    pub fn next_guess(&self, history: &[(&Player, HintPattern)]) -> Option<&'a Player> {
        if history.is_empty() {
            return self.first_guess();
        }

        let candidates = self.filter_candidates(history);
        match candidates.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => select_best_guess(self.roster.players(), &candidates).map(|(guess, _)| guess),
        }
    }

    /// Roster players that would produce the observed pattern for every guess
    fn filter_candidates(&self, history: &[(&Player, HintPattern)]) -> Vec<&'a Player> {
        self.roster
            .players()
            .iter()
            .filter(|&candidate| {
                history.iter().all(|&(guess, observed)| {
                    Feedback::calculate(guess, candidate).pattern() == observed
                })
            })
            .collect()
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[(&Player, HintPattern)]) -> usize {
        self.filter_candidates(history).len()
    }

    /// Get the current candidates (public accessor)
    #[must_use]
    pub fn get_candidates(&self, history: &[(&Player, HintPattern)]) -> Vec<&'a Player> {
        self.filter_candidates(history)
    }
}
