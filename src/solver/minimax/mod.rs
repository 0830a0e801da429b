//! Minimax guess selection
//!
//! Implements worst-case minimization over hint patterns.

mod calculator;
mod selector;

pub use calculator::calculate_max_remaining;
pub use selector::select_best_guess;
