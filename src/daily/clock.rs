//! Reference-timezone calendar
//!
//! The daily puzzle resets at midnight IST (UTC+05:30) for everyone, whatever
//! the caller's local timezone.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Timelike, Utc};

/// Offset of the reference timezone from UTC, in seconds
pub const REFERENCE_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Reference timezone (IST)
pub const REFERENCE_TZ: FixedOffset = match FixedOffset::east_opt(REFERENCE_OFFSET_SECS) {
    Some(offset) => offset,
    None => panic!("reference offset out of range"),
};

/// First puzzle day; puzzle numbers count from here
pub const LAUNCH_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 1) {
    Some(date) => date,
    None => panic!("invalid launch date"),
};

const SECONDS_PER_DAY: u32 = 86_400;

/// Calendar date of `now` in the reference timezone
///
/// # Examples
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use cricket_wordle::daily::puzzle_date;
///
/// // 18:29 UTC is still the same day in IST, 18:30 UTC is the next one
/// let before = Utc.with_ymd_and_hms(2025, 3, 9, 18, 29, 59).unwrap();
/// let after = Utc.with_ymd_and_hms(2025, 3, 9, 18, 30, 0).unwrap();
/// assert_eq!(puzzle_date(before), NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
/// assert_eq!(puzzle_date(after), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
/// ```
#[must_use]
pub fn puzzle_date(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&REFERENCE_TZ).date_naive()
}

/// Zero-based ordinal day of the year (1 January = 0)
#[must_use]
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal0()
}

/// The UTC instant at which `date` begins in the reference timezone
#[must_use]
pub fn reference_midnight(date: NaiveDate) -> DateTime<Utc> {
    (date.and_time(NaiveTime::MIN) - Duration::seconds(i64::from(REFERENCE_OFFSET_SECS))).and_utc()
}

/// Time left until the next reference-timezone midnight
#[must_use]
pub fn time_until_reset(now: DateTime<Utc>) -> std::time::Duration {
    let elapsed = now.with_timezone(&REFERENCE_TZ).num_seconds_from_midnight();
    std::time::Duration::from_secs(u64::from(SECONDS_PER_DAY.saturating_sub(elapsed)))
}

/// Format a countdown as `HH:MM:SS`
///
/// # Examples
/// ```
/// use cricket_wordle::daily::format_countdown;
/// use std::time::Duration;
///
/// assert_eq!(format_countdown(Duration::from_secs(3 * 3600 + 5 * 60 + 9)), "03:05:09");
/// ```
#[must_use]
pub fn format_countdown(remaining: std::time::Duration) -> String {
    let secs = remaining.as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// 1-based puzzle number of `date` (dates before launch give zero or less)
#[must_use]
pub fn puzzle_number(date: NaiveDate) -> i64 {
    (date - LAUNCH_DATE).num_days() + 1
}
