//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_attribute_legend, print_comparison, print_feedback, print_game_over, print_guess,
    print_how_to_play, print_roster, print_schedule, print_today,
};
