//! Women's Cricket Wordle
//!
//! A daily player guessing game: one secret women's cricketer per day, eight
//! guesses, per-attribute feedback and a shareable emoji grid.
//!
//! # Quick Start
//!
//! ```rust
//! use cricket_wordle::core::Feedback;
//! use cricket_wordle::roster::Roster;
//!
//! let roster = Roster::embedded().unwrap();
//! let guess = roster.find("Meg Lanning").unwrap();
//! let secret = roster.find("Ellyse Perry").unwrap();
//!
//! let feedback = Feedback::calculate(guess, secret);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Player roster loading
pub mod roster;

// Reference-timezone calendar and daily selection
pub mod daily;

// Game session, sharing and play log
pub mod game;

// Guessing solver
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
