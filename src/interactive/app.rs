//! TUI application state and logic

use crate::daily::{format_countdown, puzzle_number, time_until_reset};
use crate::game::{GameSession, SessionError, Status};
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

const SUGGESTION_LIMIT: usize = 6;
const MESSAGE_LIMIT: usize = 5;

/// Redraw interval; keeps the countdown ticking without input
const TICK: Duration = Duration::from_millis(500);

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub date: NaiveDate,
    pub mode: AppMode,
    pub input_buffer: String,
    pub suggestions: Vec<String>,
    pub selected: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub how_to_play_seen: bool,
    clock_start: DateTime<Utc>,
    started: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Playing,
    HowToPlay,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What the caller needs to persist after the TUI closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuiOutcome {
    pub completed: bool,
    pub how_to_play_seen: bool,
}

impl<'a> App<'a> {
    /// Create the app for `session`, with `now` as the clock reading at start
    ///
    /// The instructions open first unless they were dismissed before.
    #[must_use]
    pub fn new(
        session: GameSession<'a>,
        date: NaiveDate,
        now: DateTime<Utc>,
        how_to_play_seen: bool,
    ) -> Self {
        let mode = if how_to_play_seen {
            AppMode::Playing
        } else {
            AppMode::HowToPlay
        };

        let mut app = Self {
            session,
            date,
            mode,
            input_buffer: String::new(),
            suggestions: Vec::new(),
            selected: 0,
            messages: Vec::new(),
            should_quit: false,
            how_to_play_seen,
            clock_start: now,
            started: Instant::now(),
        };
        app.add_message(
            &format!("Puzzle #{}: who is today's player?", puzzle_number(date)),
            MessageStyle::Info,
        );
        app
    }

    /// Current instant, advancing from the start reading
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        let elapsed = chrono::Duration::from_std(self.started.elapsed()).unwrap_or_default();
        self.clock_start + elapsed
    }

    /// Countdown to the next player as `HH:MM:SS`
    #[must_use]
    pub fn countdown(&self) -> String {
        format_countdown(time_until_reset(self.now()))
    }

    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        self.session.share_text(self.date)
    }

    #[must_use]
    pub fn outcome(&self) -> TuiOutcome {
        TuiOutcome {
            completed: self.session.is_complete(),
            how_to_play_seen: self.how_to_play_seen,
        }
    }

    /// Refresh name suggestions for the input buffer
    pub fn update_suggestions(&mut self) {
        self.suggestions = self
            .session
            .roster()
            .suggestions(&self.input_buffer, SUGGESTION_LIMIT)
            .into_iter()
            .map(|p| p.name().to_string())
            .collect();
        self.selected = 0;
    }

    /// Replace the input with the highlighted suggestion
    pub fn accept_suggestion(&mut self) {
        if let Some(name) = self.suggestions.get(self.selected) {
            self.input_buffer.clone_from(name);
            self.update_suggestions();
        }
    }

    pub fn select_next(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected = (self.selected + 1) % self.suggestions.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.suggestions.len() - 1);
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = self.input_buffer.trim().to_string();
        if input.is_empty() {
            return;
        }

        match self.session.guess(&input) {
            Ok(next) => {
                self.session = next;
                self.input_buffer.clear();
                self.suggestions.clear();
                self.selected = 0;
                self.after_guess();
            }
            Err(SessionError::UnknownPlayer(name)) => {
                let hint = self
                    .suggestions
                    .first()
                    .map(|s| format!(" Did you mean {s}?"))
                    .unwrap_or_default();
                self.add_message(
                    &format!("'{name}' is not in the player list.{hint}"),
                    MessageStyle::Error,
                );
            }
            Err(SessionError::GameOver) => {
                self.mode = AppMode::Finished;
            }
        }
    }

    fn after_guess(&mut self) {
        if let Some(last) = self.session.guesses().last() {
            debug!("TUI guess {}: {}", self.session.attempts(), last.player.name());
        }

        match self.session.status() {
            Status::Won { attempts } => {
                let celebration = match attempts {
                    1 => "🏆 First ball! Extraordinary!",
                    2 => "🔥 Two guesses! Magnificent!",
                    3 => "✨ Three guesses! Splendid!",
                    4 | 5 => "👏 Well played!",
                    _ => "😅 Phew! Got there!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.mode = AppMode::Finished;
            }
            Status::Lost => {
                let secret = self.session.secret().name().to_string();
                self.add_message(
                    &format!("Out of guesses. It was {secret}."),
                    MessageStyle::Error,
                );
                self.mode = AppMode::Finished;
            }
            Status::InProgress => {
                let left = self.session.attempts_remaining();
                self.add_message(
                    &format!("{left} {} left", if left == 1 { "guess" } else { "guesses" }),
                    MessageStyle::Info,
                );
            }
        }
    }

    pub fn show_how_to_play(&mut self) {
        self.mode = AppMode::HowToPlay;
    }

    pub fn dismiss_how_to_play(&mut self) {
        self.how_to_play_seen = true;
        self.mode = if self.session.is_complete() {
            AppMode::Finished
        } else {
            AppMode::Playing
        };
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.mode {
            AppMode::HowToPlay => self.dismiss_how_to_play(),
            AppMode::Finished => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('?') => self.show_how_to_play(),
                _ => {}
            },
            AppMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('?') if self.input_buffer.is_empty() => self.show_how_to_play(),
                KeyCode::Char(c) => {
                    self.input_buffer.push(c);
                    self.update_suggestions();
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                    self.update_suggestions();
                }
                KeyCode::Tab => self.accept_suggestion(),
                KeyCode::Down => self.select_next(),
                KeyCode::Up => self.select_previous(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App<'_>) -> Result<TuiOutcome> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App<'_>,
) -> Result<TuiOutcome> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.outcome())
}
