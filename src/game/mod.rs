//! Game session, share encoding and local play log

mod play_log;
mod session;
mod share;

pub use play_log::{MAX_GAMES_PER_DAY, PlayLog, PlayLogError};
pub use session::{Command, GameSession, GuessResult, MAX_ATTEMPTS, SessionError, Status};
pub use share::{SHARE_TITLE, SHARE_URL, emoji_grid, format_share_date, share_text};
