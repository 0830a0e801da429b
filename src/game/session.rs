//! Game session state
//!
//! A session is a value: applying a command returns the next session and leaves
//! the current one untouched. Rejected commands return an error and no state.

use super::share;
use crate::core::{Feedback, Player};
use crate::roster::Roster;
use chrono::NaiveDate;
use log::debug;
use std::fmt;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 8;

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult<'a> {
    pub player: &'a Player,
    pub feedback: Feedback,
}

/// Progress of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won { attempts: usize },
    Lost,
}

/// Commands accepted by a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Guess a player by name (case-insensitive)
    Guess(String),
}

/// Error type for rejected commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The name is not in the roster; no attempt is consumed
    UnknownPlayer(String),
    /// The game is already won or lost
    GameOver,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlayer(name) => write!(f, "Player not found: '{name}'"),
            Self::GameOver => write!(f, "This game is already over"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One day's game against a secret player
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    roster: &'a Roster,
    secret: &'a Player,
    guesses: Vec<GuessResult<'a>>,
    max_attempts: usize,
    status: Status,
}

impl<'a> GameSession<'a> {
    /// Start a game against `secret`, guessing from `roster`
    #[must_use]
    pub const fn new(roster: &'a Roster, secret: &'a Player) -> Self {
        Self {
            roster,
            secret,
            guesses: Vec::new(),
            max_attempts: MAX_ATTEMPTS,
            status: Status::InProgress,
        }
    }

    /// Override the attempt limit (at least one attempt is always allowed)
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Apply a command and return the next session
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownPlayer` if a guessed name is not in the
    /// roster and `SessionError::GameOver` if the game has finished.
    ///
    /// # Examples
    /// ```
    /// use cricket_wordle::game::{Command, GameSession, SessionError, Status};
    /// use cricket_wordle::roster::Roster;
    ///
    /// let roster = Roster::embedded().unwrap();
    /// let secret = roster.find("Ellyse Perry").unwrap();
    /// let session = GameSession::new(&roster, secret);
    ///
    /// let err = session.apply(Command::Guess("Nobody".into())).unwrap_err();
    /// assert_eq!(err, SessionError::UnknownPlayer("Nobody".into()));
    ///
    /// let next = session.apply(Command::Guess("ellyse perry".into())).unwrap();
    /// assert_eq!(next.status(), Status::Won { attempts: 1 });
    /// assert_eq!(session.attempts(), 0);
    /// ```
    pub fn apply(&self, command: Command) -> Result<Self, SessionError> {
        match command {
            Command::Guess(name) => self.guess(&name),
        }
    }

    /// Shorthand for `apply(Command::Guess(name))`
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::apply`].
    pub fn guess(&self, name: &str) -> Result<Self, SessionError> {
        if self.is_complete() {
            return Err(SessionError::GameOver);
        }

        let player = self
            .roster
            .find(name)
            .ok_or_else(|| SessionError::UnknownPlayer(name.trim().to_string()))?;

        let feedback = Feedback::calculate(player, self.secret);
        let mut next = self.clone();
        next.guesses.push(GuessResult { player, feedback });

        let attempts = next.guesses.len();
        next.status = if player.name() == self.secret.name() {
            Status::Won { attempts }
        } else if attempts >= self.max_attempts {
            Status::Lost
        } else {
            Status::InProgress
        };

        debug!(
            "Guess {attempts}/{}: {} -> {}",
            self.max_attempts,
            player.name(),
            feedback.to_emoji()
        );
        Ok(next)
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &'a Player {
        self.secret
    }

    #[inline]
    #[must_use]
    pub const fn roster(&self) -> &'a Roster {
        self.roster
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[GuessResult<'a>] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status != Status::InProgress
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        matches!(self.status, Status::Won { .. })
    }

    /// Share text for this session on `date`, or `None` before the first guess
    #[must_use]
    pub fn share_text(&self, date: NaiveDate) -> Option<String> {
        share::share_text(self, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BattingHand, Role};

    fn roster() -> Roster {
        let born = |y| NaiveDate::from_ymd_opt(y, 1, 1).unwrap();
        Roster::new(vec![
            Player::new("Alpha", "India", Role::Batter, BattingHand::Right, born(1990)),
            Player::new("Bravo", "England", Role::PaceBowler, BattingHand::Left, born(1995)),
            Player::new("Charlie", "Australia", Role::Allrounder, BattingHand::Right, born(2000)),
        ])
        .unwrap()
    }

    #[test]
    fn new_session_is_empty() {
        let roster = roster();
        let session = GameSession::new(&roster, roster.find("Alpha").unwrap());

        assert_eq!(session.attempts(), 0);
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(session.status(), Status::InProgress);
        assert!(!session.is_complete());
        assert_eq!(session.secret().name(), "Alpha");
    }

    #[test]
    fn unknown_player_consumes_no_attempt() {
        let roster = roster();
        let session = GameSession::new(&roster, roster.find("Alpha").unwrap());

        let err = session.guess("Delta").unwrap_err();
        assert_eq!(err, SessionError::UnknownPlayer("Delta".to_string()));
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn wrong_guess_records_feedback() {
        let roster = roster();
        let session = GameSession::new(&roster, roster.find("Alpha").unwrap())
            .guess("bravo")
            .unwrap();

        assert_eq!(session.attempts(), 1);
        assert_eq!(session.status(), Status::InProgress);
        let last = &session.guesses()[0];
        assert_eq!(last.player.name(), "Bravo");
        assert!(!last.feedback.is_perfect());
    }

    #[test]
    fn correct_guess_wins() {
        let roster = roster();
        let session = GameSession::new(&roster, roster.find("Charlie").unwrap())
            .guess("Alpha")
            .and_then(|s| s.guess("Charlie"))
            .unwrap();

        assert_eq!(session.status(), Status::Won { attempts: 2 });
        assert!(session.is_won());
        assert!(session.guesses()[1].feedback.is_perfect());
        assert_eq!(session.guess("Alpha").unwrap_err(), SessionError::GameOver);
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let roster = roster();
        let mut session = GameSession::new(&roster, roster.find("Alpha").unwrap());

        for _ in 0..MAX_ATTEMPTS {
            session = session.apply(Command::Guess("Bravo".to_string())).unwrap();
        }

        assert_eq!(session.status(), Status::Lost);
        assert_eq!(session.attempts_remaining(), 0);
        assert!(!session.is_won());
        assert_eq!(
            session
                .apply(Command::Guess("Alpha".to_string()))
                .unwrap_err(),
            SessionError::GameOver
        );
    }

    #[test]
    fn custom_attempt_limit() {
        let roster = roster();
        let session = GameSession::new(&roster, roster.find("Alpha").unwrap())
            .with_max_attempts(2)
            .guess("Bravo")
            .and_then(|s| s.guess("Charlie"))
            .unwrap();

        assert_eq!(session.status(), Status::Lost);
        assert_eq!(
            GameSession::new(&roster, roster.find("Alpha").unwrap())
                .with_max_attempts(0)
                .max_attempts(),
            1
        );
    }

    #[test]
    fn apply_leaves_original_untouched() {
        let roster = roster();
        let start = GameSession::new(&roster, roster.find("Alpha").unwrap());
        let next = start.guess("Bravo").unwrap();

        assert_eq!(start.attempts(), 0);
        assert_eq!(next.attempts(), 1);
    }
}
