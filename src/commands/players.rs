//! Roster listing

use crate::core::Player;
use crate::roster::Roster;

/// Players in roster order, optionally limited to one nation (case-insensitive)
#[must_use]
pub fn list_players<'a>(roster: &'a Roster, nation: Option<&str>) -> Vec<&'a Player> {
    match nation {
        Some(nation) => roster.by_nation(nation),
        None => roster.players().iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_everyone_without_filter() {
        let roster = Roster::embedded().unwrap();
        assert_eq!(list_players(&roster, None).len(), roster.len());
    }

    #[test]
    fn filters_by_nation() {
        let roster = Roster::embedded().unwrap();
        let players = list_players(&roster, Some("australia"));

        assert!(!players.is_empty());
        assert!(players.iter().all(|p| p.nation() == "Australia"));
        assert!(players.iter().any(|p| p.name() == "Meg Lanning"));
    }

    #[test]
    fn unknown_nation_is_empty() {
        let roster = Roster::embedded().unwrap();
        assert!(list_players(&roster, Some("Atlantis")).is_empty());
    }
}
