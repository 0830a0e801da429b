//! Display functions for command results

use super::formatters::{cell_detail, cell_text, yes_no};
use crate::commands::{ComparisonResult, ScheduleEntry, TodayInfo};
use crate::core::{
    Attribute, BIRTH_YEAR_CLOSE_RANGE, Feedback, Hint, MATCHES_CLOSE_RANGE, Player, Region,
};
use crate::daily::format_countdown;
use crate::game::{GameSession, GuessResult, Status};
use chrono::NaiveDate;
use colored::{ColoredString, Colorize};

/// Color a cell by its hint
fn paint(text: &str, hint: Hint) -> ColoredString {
    match hint {
        Hint::Exact => text.green().bold(),
        Hint::Close => text.yellow(),
        Hint::Miss => text.bright_black(),
    }
}

/// Print every attribute of one scored guess
pub fn print_feedback(guess: &Player, feedback: &Feedback) {
    for (attribute, cell) in feedback.iter() {
        let text = cell_text(guess, attribute, cell);
        let detail = cell_detail(attribute, cell)
            .map(|d| format!("  ({d})").bright_black().to_string())
            .unwrap_or_default();
        println!(
            "   {} {:<14} {}{detail}",
            cell.hint.emoji(),
            attribute.label(),
            paint(&text, cell.hint)
        );
    }
}

/// Print one guess of a running game
pub fn print_guess(turn: usize, max_attempts: usize, result: &GuessResult<'_>) {
    println!(
        "\n{} {}  {}",
        format!("Guess {turn}/{max_attempts}:").bright_cyan(),
        result.player.name().bright_white().bold(),
        result.feedback.to_emoji()
    );
    print_feedback(result.player, &result.feedback);
}

/// Print the result of comparing two players
pub fn print_comparison(result: &ComparisonResult<'_>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {} {}",
        result.guess.name().bright_white().bold(),
        "vs".bright_black(),
        result.secret.name().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    print_feedback(result.guess, &result.feedback);
    println!(
        "\n   {} exact, {} close",
        result.feedback.count_exact().to_string().green(),
        result.feedback.count_close().to_string().yellow()
    );
}

/// Print the current puzzle summary
pub fn print_today(info: &TodayInfo<'_>, reveal: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "PUZZLE".bright_cyan().bold(),
        format!("#{}", info.puzzle_number).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Date (IST):     {}", info.date.format("%d %b %Y"));
    println!(
        "   Next player in: {}",
        format_countdown(info.until_reset).bright_white()
    );

    if reveal {
        println!(
            "   Secret player:  {}",
            info.secret.name().bright_yellow().bold()
        );
        print_player_card(info.secret);
    } else {
        println!(
            "   Secret player:  {}",
            "hidden (use --reveal)".bright_black()
        );
    }
}

fn print_player_card(player: &Player) {
    let region = player.region().map_or("Other", Region::label);
    println!("\n   {:<14} {} ({region})", "Nation", player.nation());
    println!("   {:<14} {}", "Role", player.role());
    println!("   {:<14} {}", "Batting Hand", player.batting_hand());
    println!("   {:<14} {}", "WPL", player.current_team());
    println!("   {:<14} {}", "Retired?", yes_no(player.retired()));
    println!("   {:<14} {}", "Born", player.born().format("%d %b %Y"));
    println!("   {:<14} {}", "Intl Matches", player.total_matches());
    if let Some(image) = player.image() {
        println!("   {:<14} {}", "Image", image.bright_black());
    }
}

/// Print upcoming secrets
pub fn print_schedule(entries: &[ScheduleEntry<'_>]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCHEDULE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for entry in entries {
        println!(
            "   {:>5}  {}  {}",
            format!("#{}", entry.puzzle_number).bright_black(),
            entry.date.format("%Y-%m-%d"),
            entry.secret.name().bright_white()
        );
    }
}

/// Print roster names with nation and role
pub fn print_roster(players: &[&Player]) {
    for player in players {
        println!(
            "   {:<28} {:<14} {}",
            player.name().bright_white(),
            player.nation(),
            player.role().label().bright_black()
        );
    }
    println!("\n   {} players", players.len().to_string().bright_cyan());
}

/// Print the rules
pub fn print_how_to_play(max_attempts: usize) {
    println!("\n{}", "How to play".bright_cyan().bold());
    println!("  Guess the women's cricketer of the day in {max_attempts} tries.");
    println!("  Each guess is scored on eight attributes:");
    println!("    {} exact match", Hint::Exact.emoji());
    println!(
        "    {} close: same continent, similar role, born within {BIRTH_YEAR_CLOSE_RANGE} years or within {MATCHES_CLOSE_RANGE} matches",
        Hint::Close.emoji()
    );
    println!("    {} no match", Hint::Miss.emoji());
    println!(
        "  Arrows point toward the secret: {} later or more, {} earlier or fewer.",
        '↑', '↓'
    );
    println!("  A new player arrives every day at midnight IST.\n");
}

/// Print the end-of-game summary and share text
pub fn print_game_over(session: &GameSession<'_>, date: NaiveDate) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match session.status() {
        Status::Won { attempts } => println!(
            "  {} Found in {} {}",
            "🎉 Well bowled!".bright_green().bold(),
            attempts.to_string().bright_cyan().bold(),
            if attempts == 1 { "guess" } else { "guesses" }
        ),
        Status::Lost => println!(
            "  {} The player was {}",
            "Out of guesses.".red().bold(),
            session.secret().name().bright_yellow().bold()
        ),
        Status::InProgress => println!("  {}", "Game not finished".bright_black()),
    }
    println!("{}", "═".repeat(60).bright_cyan());

    if let Some(text) = session.share_text(date) {
        println!("\n{text}\n");
    }
}

/// Print a single attribute header row, used by the line-based game
pub fn print_attribute_legend() {
    let labels: Vec<&str> = Attribute::ALL.into_iter().map(Attribute::label).collect();
    println!("  {}", labels.join(" · ").bright_black());
}
