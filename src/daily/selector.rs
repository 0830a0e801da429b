//! Daily secret player selection
//!
//! The secret for a date is `schedule[day_of_year % len]`, where `schedule` is a
//! permutation of the roster indices shuffled with a ChaCha20 generator seeded
//! from a fixed salt and the calendar year. Within one year and one roster
//! snapshot nobody repeats until everyone has been picked once.
//!
//! Years are shuffled independently, so 1 January could draw the player of the
//! previous 31 December. When that happens slot 0 is swapped with a later slot
//! that the year's own 31 December does not use. A two-player roster simply
//! alternates by absolute day number.

use super::clock::{day_of_year, puzzle_date};
use crate::core::Player;
use crate::roster::Roster;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use log::debug;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use std::fmt;

/// Salt mixed into every yearly seed
pub const DEFAULT_SALT: u64 = 0x5743_5743_2025_0001;

/// Error type for daily selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    EmptyRoster,
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRoster => write!(f, "Cannot pick a daily player from an empty roster"),
        }
    }
}

impl std::error::Error for SelectorError {}

/// Slot used by the last day of `year` in a schedule of `len` players
fn last_slot(year: i32, len: usize) -> usize {
    let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
    let last_day: usize = if leap { 365 } else { 364 };
    last_day % len
}

/// Deterministic date → roster index mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySelector {
    salt: u64,
}

impl Default for DailySelector {
    fn default() -> Self {
        Self::new(DEFAULT_SALT)
    }
}

impl DailySelector {
    #[must_use]
    pub const fn new(salt: u64) -> Self {
        Self { salt }
    }

    /// Seed for a calendar year; defined for every `i32` year
    #[must_use]
    pub const fn seed_for_year(&self, year: i32) -> u64 {
        // Two's-complement image of the year, spread by the golden-ratio constant
        self.salt ^ (year as i64 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }

    /// Permutation of `0..len` used for `year`
    ///
    /// Slot 0 never repeats the index picked on the last day of the previous year.
    #[must_use]
    pub fn schedule_for_year(&self, year: i32, len: usize) -> Vec<usize> {
        if len == 2 {
            return self.alternating(year);
        }

        let mut order = self.shuffled(year, len);
        if len > 2
            && let Some(previous) = year.checked_sub(1)
            && order[0] == self.last_pick(previous, len)
        {
            // `last_pick` reads this year's last-day slot unswapped
            let partner = if last_slot(year, len) == 1 { 2 } else { 1 };
            debug!("{year}: swapping slots 0 and {partner} after a New Year repeat");
            order.swap(0, partner);
        }
        order
    }

    fn shuffled(&self, year: i32, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        let mut rng = ChaCha20Rng::seed_from_u64(self.seed_for_year(year));
        order.shuffle(&mut rng);
        order
    }

    /// Roster index picked on 31 December of `year` (`len > 2`)
    fn last_pick(&self, year: i32, len: usize) -> usize {
        match last_slot(year, len) {
            // Shared with 1 January, which may have been swapped
            0 => self.schedule_for_year(year, len)[0],
            slot => self.shuffled(year, len)[slot],
        }
    }

    /// `[first, second]` so that the pick flips on every day, across years too
    fn alternating(&self, year: i32) -> Vec<usize> {
        let parity = NaiveDate::from_ymd_opt(year, 1, 1)
            .map_or(0, |jan_1| jan_1.num_days_from_ce().rem_euclid(2) as usize);
        let first = (parity + (self.salt & 1) as usize) % 2;
        vec![first, 1 - first]
    }

    /// Roster index of the secret player for `date`
    ///
    /// # Errors
    /// Returns `SelectorError::EmptyRoster` if `len` is zero.
    pub fn index_for_date(&self, date: NaiveDate, len: usize) -> Result<usize, SelectorError> {
        if len == 0 {
            return Err(SelectorError::EmptyRoster);
        }
        let schedule = self.schedule_for_year(date.year(), len);
        let slot = day_of_year(date) as usize % len;
        Ok(schedule[slot])
    }

    /// Secret player for a reference-timezone date
    ///
    /// # Errors
    /// Returns `SelectorError::EmptyRoster` if the roster has no players.
    pub fn player_for_date<'a>(
        &self,
        roster: &'a Roster,
        date: NaiveDate,
    ) -> Result<&'a Player, SelectorError> {
        let index = self.index_for_date(date, roster.len())?;
        let player = roster.get(index).ok_or(SelectorError::EmptyRoster)?;
        debug!("Daily player for {date}: roster index {index}");
        Ok(player)
    }

    /// Secret player for the reference-timezone day containing `now`
    ///
    /// # Errors
    /// Returns `SelectorError::EmptyRoster` if the roster has no players.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use cricket_wordle::daily::DailySelector;
    /// use cricket_wordle::roster::Roster;
    ///
    /// let roster = Roster::embedded().unwrap();
    /// let selector = DailySelector::default();
    ///
    /// let morning = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
    /// let evening = Utc.with_ymd_and_hms(2025, 5, 1, 18, 0, 0).unwrap();
    /// assert_eq!(
    ///     selector.player_at(&roster, morning).unwrap(),
    ///     selector.player_at(&roster, evening).unwrap(),
    /// );
    /// ```
    pub fn player_at<'a>(
        &self,
        roster: &'a Roster,
        now: DateTime<Utc>,
    ) -> Result<&'a Player, SelectorError> {
        self.player_for_date(roster, puzzle_date(now))
    }

    /// Secret players for `days` consecutive dates starting at `from`
    ///
    /// # Errors
    /// Returns `SelectorError::EmptyRoster` if the roster has no players.
    pub fn schedule<'a>(
        &self,
        roster: &'a Roster,
        from: NaiveDate,
        days: usize,
    ) -> Result<Vec<(NaiveDate, &'a Player)>, SelectorError> {
        from.iter_days()
            .take(days)
            .map(|date| Ok((date, self.player_for_date(roster, date)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::clock::reference_midnight;
    use chrono::{Duration, TimeZone};
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn schedule_is_a_permutation() {
        let selector = DailySelector::default();
        for len in [1, 2, 7, 47, 366] {
            let mut order = selector.schedule_for_year(2025, len);
            order.sort_unstable();
            assert_eq!(order, (0..len).collect::<Vec<_>>());
        }
    }

    #[test]
    fn schedule_is_deterministic() {
        let a = DailySelector::default().schedule_for_year(2026, 47);
        let b = DailySelector::default().schedule_for_year(2026, 47);
        assert_eq!(a, b);
    }

    #[test]
    fn seed_defined_for_any_year() {
        let selector = DailySelector::default();
        assert_ne!(selector.seed_for_year(2025), selector.seed_for_year(2026));
        // Negative and extreme years still produce a schedule
        assert_eq!(selector.schedule_for_year(i32::MIN, 5).len(), 5);
        assert_eq!(selector.schedule_for_year(-1, 5).len(), 5);
        assert_eq!(selector.schedule_for_year(i32::MAX, 5).len(), 5);
    }

    #[test]
    fn empty_roster_is_an_error() {
        assert_eq!(
            DailySelector::default().index_for_date(date(2025, 1, 1), 0),
            Err(SelectorError::EmptyRoster)
        );
    }

    #[test]
    fn same_player_all_day() {
        let roster = Roster::embedded().unwrap();
        let selector = DailySelector::default();
        let start = reference_midnight(date(2025, 9, 20));
        let expected = selector.player_at(&roster, start).unwrap();

        for minutes in (0..24 * 60).step_by(37) {
            let now = start + Duration::minutes(minutes);
            assert_eq!(selector.player_at(&roster, now).unwrap(), expected);
        }
        let last = start + Duration::seconds(86_399);
        assert_eq!(selector.player_at(&roster, last).unwrap(), expected);
    }

    #[test]
    fn player_changes_at_reference_midnight() {
        let roster = Roster::embedded().unwrap();
        let selector = DailySelector::default();

        // Every boundary within a year moves to a different slot of the permutation
        for day in [date(2025, 3, 9), date(2025, 7, 1), date(2025, 11, 30)] {
            let before = Utc
                .with_ymd_and_hms(day.year(), day.month(), day.day(), 18, 29, 59)
                .unwrap();
            let after = before + Duration::seconds(1);

            assert_ne!(
                selector.player_at(&roster, before).unwrap(),
                selector.player_at(&roster, after).unwrap()
            );
        }
    }

    #[test]
    fn player_changes_on_new_year() {
        let roster = Roster::embedded().unwrap();
        let selector = DailySelector::default();

        for year in 2025..2226 {
            let midnight = reference_midnight(date(year, 1, 1));
            assert_ne!(
                selector.player_at(&roster, midnight - Duration::seconds(1)).unwrap(),
                selector.player_at(&roster, midnight).unwrap(),
                "31 Dec {} -> 1 Jan {year}",
                year - 1
            );
        }
    }

    #[test]
    fn new_year_changes_for_any_roster_size() {
        // 2, 4, 7, 13 and 364 divide 364; 5 and 365 divide 365
        for len in [2, 3, 4, 5, 7, 13, 47, 364, 365, 400] {
            for salt in [DEFAULT_SALT, 1, 2] {
                let selector = DailySelector::new(salt);
                for year in 1890..2110 {
                    let dec_31 = selector.index_for_date(date(year - 1, 12, 31), len).unwrap();
                    let jan_1 = selector.index_for_date(date(year, 1, 1), len).unwrap();
                    assert_ne!(dec_31, jan_1, "len {len}, salt {salt}, year {year}");
                }
            }
        }
    }

    #[test]
    fn adjusted_schedule_is_still_a_permutation() {
        let selector = DailySelector::default();
        for year in 2025..2125 {
            let mut order = selector.schedule_for_year(year, 47);
            order.sort_unstable();
            assert_eq!(order, (0..47).collect::<Vec<_>>());
        }
    }

    #[test]
    fn two_player_roster_alternates() {
        let selector = DailySelector::default();
        let picks: Vec<usize> = date(2023, 12, 25)
            .iter_days()
            .take(800)
            .map(|d| selector.index_for_date(d, 2).unwrap())
            .collect();
        assert!(picks.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn no_repeats_until_roster_exhausted() {
        let roster = Roster::embedded().unwrap();
        let selector = DailySelector::default();

        let picks = selector.schedule(&roster, date(2025, 1, 1), roster.len()).unwrap();
        let names: HashSet<&str> = picks.iter().map(|(_, p)| p.name()).collect();

        assert_eq!(picks.len(), roster.len());
        assert_eq!(names.len(), roster.len());
    }

    #[test]
    fn schedule_dates_are_consecutive() {
        let roster = Roster::embedded().unwrap();
        let picks = DailySelector::default()
            .schedule(&roster, date(2025, 12, 30), 3)
            .unwrap();

        let dates: Vec<NaiveDate> = picks.iter().map(|(d, _)| *d).collect();
        assert_eq!(dates, [date(2025, 12, 30), date(2025, 12, 31), date(2026, 1, 1)]);
    }

    #[test]
    fn salt_changes_schedule() {
        let a = DailySelector::new(1).schedule_for_year(2025, 47);
        let b = DailySelector::new(2).schedule_for_year(2025, 47);
        assert_ne!(a, b);
    }
}
