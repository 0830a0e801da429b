//! Player roster
//!
//! The roster is the static list the daily secret is drawn from and guesses are
//! checked against. It is validated once at load time: a malformed row fails the
//! whole load instead of surfacing later as a bad comparison.

mod embedded;
pub mod loader;

pub use embedded::{PLAYERS, PLAYERS_COUNT, RawPlayer};

use crate::core::{Player, PlayerError};
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for roster loading
#[derive(Debug)]
pub enum RosterError {
    /// The CSV source could not be read or parsed
    Csv(csv::Error),
    /// A row failed validation (`row` is the 1-based line, header included)
    InvalidRow { row: usize, source: PlayerError },
    /// Two rows share the same name (case-insensitive)
    DuplicateName { row: usize, name: String },
    Empty,
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "Failed to read roster: {err}"),
            Self::InvalidRow { row, source } => write!(f, "Roster row {row}: {source}"),
            Self::DuplicateName { row, name } => {
                write!(f, "Roster row {row}: duplicate player '{name}'")
            }
            Self::Empty => write!(f, "Roster contains no players"),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::InvalidRow { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<csv::Error> for RosterError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Validated, ordered list of players with a case-insensitive name index
#[derive(Debug, Clone)]
pub struct Roster {
    players: Vec<Player>,
    index: FxHashMap<String, usize>,
}

impl Roster {
    /// Build a roster from validated players
    ///
    /// Row numbers in errors assume the players came from a CSV with a header.
    ///
    /// # Errors
    /// Returns `RosterError::Empty` for an empty list and
    /// `RosterError::DuplicateName` if two players share a name.
    pub fn new(players: Vec<Player>) -> Result<Self, RosterError> {
        if players.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut index = FxHashMap::default();
        for (i, player) in players.iter().enumerate() {
            if index.insert(name_key(player.name()), i).is_some() {
                return Err(RosterError::DuplicateName {
                    row: i + 2,
                    name: player.name().to_string(),
                });
            }
        }

        Ok(Self { players, index })
    }

    /// The roster compiled into the binary
    ///
    /// # Errors
    /// Returns an error if `data/players.csv` contains an invalid row.
    pub fn embedded() -> Result<Self, RosterError> {
        loader::from_raw(PLAYERS)
    }

    /// Find a player by name, ignoring case and surrounding whitespace
    ///
    /// # Examples
    /// ```
    /// use cricket_wordle::roster::Roster;
    ///
    /// let roster = Roster::embedded().unwrap();
    /// let player = roster.find("  smriti MANDHANA ").unwrap();
    /// assert_eq!(player.name(), "Smriti Mandhana");
    /// assert!(roster.find("Sachin Tendulkar").is_none());
    /// ```
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.position(name).map(|i| &self.players[i])
    }

    /// Roster index of a player by name
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&name_key(name)).copied()
    }

    /// Players whose name contains `query`, prefix matches first
    #[must_use]
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<&Player> {
        let query = name_key(query);
        if query.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(bool, &Player)> = self
            .players
            .iter()
            .filter_map(|player| {
                let key = name_key(player.name());
                key.contains(&query)
                    .then(|| (!key.starts_with(&query), player))
            })
            .collect();

        // Stable sort keeps roster order within each group
        matches.sort_by_key(|(not_prefix, _)| *not_prefix);
        matches.into_iter().take(limit).map(|(_, p)| p).collect()
    }

    /// Players from a nation (exact, case-insensitive)
    #[must_use]
    pub fn by_nation(&self, nation: &str) -> Vec<&Player> {
        let nation = nation.trim();
        self.players
            .iter()
            .filter(|player| player.nation().eq_ignore_ascii_case(nation))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Lookup key for a player name: lowercase, single-spaced
fn name_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
