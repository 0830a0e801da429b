//! Roster loading utilities
//!
//! Provides functions to load a roster from a CSV file or from the embedded rows.

use super::{RawPlayer, Roster, RosterError};
use crate::core::{Player, PlayerRecord};
use log::{debug, info};
use std::io;
use std::path::Path;

/// Load a roster from a CSV file
///
/// The file must have the header
/// `name,nation,role,batting_hand,current_team,retired,born,total_matches,image`.
/// Every row is validated; the first bad row fails the load.
///
/// # Errors
///
/// Returns `RosterError::Csv` if the file cannot be read or parsed, and a
/// row-level error for invalid or duplicate players.
///
/// # Examples
/// ```no_run
/// use cricket_wordle::roster::loader::load_from_file;
///
/// let roster = load_from_file("data/players.csv").unwrap();
/// println!("Loaded {} players", roster.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Roster, RosterError> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let roster = from_csv_reader(reader)?;
    info!("Loaded {} players from {}", roster.len(), path.display());
    Ok(roster)
}

/// Load a roster from any CSV source with a header row
///
/// # Errors
///
/// Same as [`load_from_file`].
pub fn from_reader<R: io::Read>(source: R) -> Result<Roster, RosterError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);
    from_csv_reader(reader)
}

fn from_csv_reader<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Roster, RosterError> {
    let mut records = Vec::new();
    for record in reader.deserialize::<PlayerRecord>() {
        records.push(record?);
    }
    from_records(records)
}

/// Validate records in order and build a roster
///
/// # Errors
///
/// Returns `RosterError::InvalidRow` naming the first invalid row (1-based,
/// counting the header line).
pub fn from_records(records: Vec<PlayerRecord>) -> Result<Roster, RosterError> {
    let players = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            Player::try_from(record).map_err(|source| RosterError::InvalidRow { row: i + 2, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Roster::new(players)
}

/// Convert embedded rows to a validated roster
///
/// # Errors
///
/// Same as [`from_records`].
pub fn from_raw(rows: &[RawPlayer]) -> Result<Roster, RosterError> {
    let roster = from_records(rows.iter().map(RawPlayer::to_record).collect())?;
    debug!("Embedded roster: {} players", roster.len());
    Ok(roster)
}
