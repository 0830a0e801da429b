//! Today's puzzle and the upcoming schedule

use crate::core::Player;
use crate::daily::{DailySelector, puzzle_date, puzzle_number, time_until_reset};
use crate::roster::Roster;
use chrono::{DateTime, NaiveDate, Utc};
use std::time::Duration;

/// Summary of the puzzle running at a given instant
#[derive(Debug, Clone)]
pub struct TodayInfo<'a> {
    pub date: NaiveDate,
    pub puzzle_number: i64,
    pub until_reset: Duration,
    pub secret: &'a Player,
}

/// One upcoming puzzle
#[derive(Debug, Clone)]
pub struct ScheduleEntry<'a> {
    pub date: NaiveDate,
    pub puzzle_number: i64,
    pub secret: &'a Player,
}

/// Describe the puzzle running at `now`
///
/// # Errors
///
/// Returns an error if the roster is empty.
pub fn today_info<'a>(
    roster: &'a Roster,
    selector: &DailySelector,
    now: DateTime<Utc>,
) -> Result<TodayInfo<'a>, String> {
    let date = puzzle_date(now);
    let secret = selector
        .player_for_date(roster, date)
        .map_err(|e| e.to_string())?;

    Ok(TodayInfo {
        date,
        puzzle_number: puzzle_number(date),
        until_reset: time_until_reset(now),
        secret,
    })
}

/// List the secrets of `days` puzzles starting with the one running at `now`
///
/// # Errors
///
/// Returns an error if the roster is empty.
pub fn upcoming_schedule<'a>(
    roster: &'a Roster,
    selector: &DailySelector,
    now: DateTime<Utc>,
    days: usize,
) -> Result<Vec<ScheduleEntry<'a>>, String> {
    let picks = selector
        .schedule(roster, puzzle_date(now), days)
        .map_err(|e| e.to_string())?;

    Ok(picks
        .into_iter()
        .map(|(date, secret)| ScheduleEntry {
            date,
            puzzle_number: puzzle_number(date),
            secret,
        })
        .collect())
}
