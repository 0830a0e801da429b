//! Formatting utilities for terminal output

use crate::core::{Attribute, Cell, Player};

/// Value of one attribute of a player, as shown in a feedback row
#[must_use]
pub fn attribute_value(player: &Player, attribute: Attribute) -> String {
    match attribute {
        Attribute::Name => player.name().to_string(),
        Attribute::Role => player.role().label().to_string(),
        Attribute::Nation => player.nation().to_string(),
        Attribute::BattingHand => player.batting_hand().label().to_string(),
        Attribute::CurrentTeam => player.current_team().to_string(),
        Attribute::Retired => yes_no(player.retired()).to_string(),
        Attribute::Born => player.birth_year().to_string(),
        Attribute::TotalMatches => player.total_matches().to_string(),
    }
}

/// Attribute value followed by the direction arrow, if any
///
/// "1990 ↑" reads as "the secret was born later than 1990".
#[must_use]
pub fn cell_text(player: &Player, attribute: Attribute, cell: &Cell) -> String {
    let value = attribute_value(player, attribute);
    match cell.direction {
        Some(direction) => format!("{value} {}", direction.arrow()),
        None => value,
    }
}

/// Tooltip-style detail for a cell: the close note, else the numeric gap
#[must_use]
pub fn cell_detail(attribute: Attribute, cell: &Cell) -> Option<String> {
    if let Some(note) = cell.note {
        return Some(note.to_string());
    }
    cell.difference.map(|diff| match attribute {
        Attribute::Born => format!("Year difference: {diff}"),
        _ => format!("Difference: {diff}"),
    })
}

#[must_use]
pub const fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
