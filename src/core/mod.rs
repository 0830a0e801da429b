//! Core domain types for Cricket Wordle
//!
//! Player records and the guess scorer. Everything here is a pure function of
//! its inputs and has no I/O.

mod feedback;
mod player;

pub use feedback::{
    ATTRIBUTE_COUNT, Attribute, BIRTH_YEAR_CLOSE_RANGE, Cell, Direction, Feedback, Hint,
    HintPattern, MATCHES_CLOSE_RANGE, NOTE_SAME_CONTINENT, NOTE_SIMILAR_ROLE,
    NOTE_WITHIN_MATCHES, NOTE_WITHIN_YEARS,
};
pub use player::{BattingHand, NO_TEAM, Player, PlayerError, PlayerRecord, Region, Role, RoleCategory};
