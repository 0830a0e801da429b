//! Head-to-head feedback for two named players

use crate::core::{Feedback, Player};
use crate::roster::Roster;

/// Feedback for one guess against a chosen secret
#[derive(Debug, Clone)]
pub struct ComparisonResult<'a> {
    pub guess: &'a Player,
    pub secret: &'a Player,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`, both looked up by name
///
/// # Errors
///
/// Returns an error naming the first player that is not in the roster.
pub fn compare_players<'a>(
    roster: &'a Roster,
    guess: &str,
    secret: &str,
) -> Result<ComparisonResult<'a>, String> {
    let lookup = |name: &str| {
        roster
            .find(name)
            .ok_or_else(|| format!("Player not found: '{}'", name.trim()))
    };
    let guess = lookup(guess)?;
    let secret = lookup(secret)?;

    Ok(ComparisonResult {
        guess,
        secret,
        feedback: Feedback::calculate(guess, secret),
    })
}
