//! Share text encoding
//!
//! One emoji line per guess, one glyph per attribute:
//! 🟩 exact, 🟨 close, ⬛ miss.

use super::{GameSession, Status};
use crate::core::Feedback;
use chrono::NaiveDate;

pub const SHARE_TITLE: &str = "Women's Cricket Wordle";
pub const SHARE_URL: &str = "https://cricwordle.github.io/";

/// Encode feedback rows as an emoji grid
///
/// Returns an empty string for no rows.
///
/// # Examples
/// ```
/// use cricket_wordle::core::Feedback;
/// use cricket_wordle::game::emoji_grid;
///
/// let no_guesses: &[Feedback] = &[];
/// assert_eq!(emoji_grid(no_guesses), "");
/// ```
#[must_use]
pub fn emoji_grid<'f>(rows: impl IntoIterator<Item = &'f Feedback>) -> String {
    rows.into_iter()
        .map(Feedback::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a date as `DD/MM/YYYY`
#[must_use]
pub fn format_share_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Build the full share text for a session
///
/// ```text
/// Women's Cricket Wordle 3/8
///
/// 18/10/2026
///
/// ⬛🟨⬛🟩🟩⬛🟨⬛
/// ...
///
/// https://cricwordle.github.io/
/// ```
///
/// The score is `X` unless the secret was found. Returns `None` before the
/// first guess.
#[must_use]
pub fn share_text(session: &GameSession<'_>, date: NaiveDate) -> Option<String> {
    let grid = emoji_grid(session.guesses().iter().map(|g| &g.feedback));
    if grid.is_empty() {
        return None;
    }

    let tries = match session.status() {
        Status::Won { attempts } => attempts.to_string(),
        Status::InProgress | Status::Lost => "X".to_string(),
    };

    Some(format!(
        "{SHARE_TITLE} {tries}/{max}\n\n{date}\n\n{grid}\n\n{SHARE_URL}",
        max = session.max_attempts(),
        date = format_share_date(date),
    ))
}
