//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, AppMode, Message, MessageStyle, TuiOutcome, run_tui};
