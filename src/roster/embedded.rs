//! Embedded player roster
//!
//! Roster rows compiled into the binary at build time.

use crate::core::PlayerRecord;

/// One roster row exactly as written in `data/players.csv`
#[derive(Debug, Clone, Copy)]
pub struct RawPlayer {
    pub name: &'static str,
    pub nation: &'static str,
    pub role: &'static str,
    pub batting_hand: &'static str,
    pub current_team: &'static str,
    pub retired: &'static str,
    pub born: &'static str,
    pub total_matches: &'static str,
    pub image: &'static str,
}

impl RawPlayer {
    /// Convert to an owned record for validation
    #[must_use]
    pub fn to_record(&self) -> PlayerRecord {
        PlayerRecord {
            name: self.name.to_string(),
            nation: self.nation.to_string(),
            role: self.role.to_string(),
            batting_hand: self.batting_hand.to_string(),
            current_team: self.current_team.to_string(),
            retired: self.retired.to_string(),
            born: self.born.to_string(),
            total_matches: self.total_matches.to_string(),
            image: (!self.image.is_empty()).then(|| self.image.to_string()),
        }
    }
}

// Include generated roster from build script
include!(concat!(env!("OUT_DIR"), "/players.rs"));
