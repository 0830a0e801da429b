//! Local play log
//!
//! Remembers how many games were finished per puzzle date and whether the
//! instructions were dismissed. Stored as a small JSON file; read-then-write
//! with no locking, so two simultaneous games may miscount.

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Games allowed per puzzle date
pub const MAX_GAMES_PER_DAY: u32 = 1;

/// Error type for play log persistence
#[derive(Debug)]
pub enum PlayLogError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for PlayLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Play log I/O error: {err}"),
            Self::Parse(err) => write!(f, "Play log is corrupt: {err}"),
        }
    }
}

impl std::error::Error for PlayLogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for PlayLogError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for PlayLogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Per-date game counter and instructions flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayLog {
    /// Finished games keyed by `YYYY-MM-DD`
    #[serde(default)]
    games_played: BTreeMap<String, u32>,
    #[serde(default)]
    how_to_play_seen: bool,
}

impl PlayLog {
    /// Load the log from `path`; a missing file is an empty log
    ///
    /// # Errors
    ///
    /// Returns `PlayLogError::Io` if the file exists but cannot be read and
    /// `PlayLogError::Parse` if it is not a valid log.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PlayLogError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No play log at {}, starting fresh", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Write the log to `path`
    ///
    /// # Errors
    ///
    /// Returns `PlayLogError::Io` if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PlayLogError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        debug!("Saved play log to {}", path.display());
        Ok(())
    }

    /// Games finished on `date`
    #[must_use]
    pub fn games_played_on(&self, date: NaiveDate) -> u32 {
        self.games_played.get(&date_key(date)).copied().unwrap_or(0)
    }

    /// Count one finished game on `date`; returns the new count
    pub fn record_game(&mut self, date: NaiveDate) -> u32 {
        let count = self.games_played.entry(date_key(date)).or_insert(0);
        *count = count.saturating_add(1);
        if *count > MAX_GAMES_PER_DAY {
            warn!("{count} games recorded for {date}");
        }
        *count
    }

    /// Check whether `date` already has `max_games` finished games
    #[must_use]
    pub fn limit_reached(&self, date: NaiveDate, max_games: u32) -> bool {
        self.games_played_on(date) >= max_games
    }

    #[must_use]
    pub const fn how_to_play_seen(&self) -> bool {
        self.how_to_play_seen
    }

    pub fn mark_how_to_play_seen(&mut self) {
        self.how_to_play_seen = true;
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
