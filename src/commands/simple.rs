//! Simple interactive CLI mode
//!
//! Line-based game on stdin/stdout without TUI

use crate::daily::puzzle_number;
use crate::game::{GameSession, SessionError};
use crate::output::{print_attribute_legend, print_game_over, print_guess, print_how_to_play};
use colored::Colorize;
use log::debug;
use std::io::{self, BufRead, Write};

const SUGGESTION_LIMIT: usize = 5;

/// Play one game reading guesses from `input`
///
/// Returns the session as it stood when input ended or the player quit, so
/// the caller can tell whether the game was completed.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple<'a, R: BufRead>(
    session: GameSession<'a>,
    date: chrono::NaiveDate,
    input: &mut R,
) -> Result<GameSession<'a>, String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Women's Cricket Wordle                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!(
        "\n  Puzzle #{} · {}",
        puzzle_number(date),
        date.format("%d/%m/%Y")
    );
    print_how_to_play(session.max_attempts());
    print_attribute_legend();
    println!("\nCommands: 'quit' to exit, '?<text>' to search names\n");

    let mut session = session;

    while !session.is_complete() {
        let prompt = format!(
            "Guess {}/{}",
            session.attempts() + 1,
            session.max_attempts()
        );
        let Some(line) = read_line(&prompt, input)? else {
            debug!("Input closed after {} guesses", session.attempts());
            return Ok(session);
        };

        match line.as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Come back later to finish today's game.\n");
                return Ok(session);
            }
            query if query.starts_with('?') => {
                print_suggestions(&session, query.trim_start_matches('?'));
            }
            name => match session.guess(name) {
                Ok(next) => {
                    session = next;
                    if let Some(result) = session.guesses().last() {
                        print_guess(session.attempts(), session.max_attempts(), result);
                    }
                }
                Err(SessionError::UnknownPlayer(name)) => {
                    println!("{}", format!("❌ '{name}' is not in the player list").red());
                    print_suggestions(&session, &name);
                }
                Err(err @ SessionError::GameOver) => return Err(err.to_string()),
            },
        }
    }

    print_game_over(&session, date);
    Ok(session)
}

fn print_suggestions(session: &GameSession<'_>, query: &str) {
    let matches = session.roster().suggestions(query, SUGGESTION_LIMIT);
    if matches.is_empty() {
        println!("{}", "   No matching players".bright_black());
        return;
    }
    println!("   Did you mean:");
    for player in matches {
        println!("     • {}", player.name().bright_white());
    }
}

/// Read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(prompt: &str, input: &mut R) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
