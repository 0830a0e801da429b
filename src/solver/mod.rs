//! Guessing solver
//!
//! Narrows the roster to players consistent with the feedback so far and picks
//! the guess that leaves the fewest candidates in the worst case.

mod engine;
pub mod minimax;

pub use engine::Solver;
