//! Daily puzzle calendar and secret player selection
//!
//! Everything here is keyed to the reference timezone (IST, UTC+05:30).

mod clock;
mod selector;

pub use clock::{
    LAUNCH_DATE, REFERENCE_OFFSET_SECS, REFERENCE_TZ, day_of_year, format_countdown,
    puzzle_date, puzzle_number, reference_midnight, time_until_reset,
};
pub use selector::{DEFAULT_SALT, DailySelector, SelectorError};
