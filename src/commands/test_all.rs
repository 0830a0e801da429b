//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every roster player as the secret and generates
//! statistics.

use crate::core::{Feedback, HintPattern, Player};
use crate::game::MAX_ATTEMPTS;
use crate::output::formatters::create_progress_bar;
use crate::roster::Roster;
use crate::solver::Solver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from solving a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: String,
    pub guesses: Vec<String>,
    pub success: bool,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_players: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub opening_guess: Option<String>,
    pub hardest: Vec<(String, usize)>,
    pub unsolved: Vec<String>,
}

/// Play one game with the solver choosing every guess
#[must_use]
pub fn solve_secret(solver: &Solver<'_>, secret: &Player, max_attempts: usize) -> SecretTestResult {
    let mut history: Vec<(&Player, HintPattern)> = Vec::new();
    let mut guesses = Vec::new();
    let mut success = false;

    for _ in 0..max_attempts {
        let Some(guess) = solver.next_guess(&history) else {
            break;
        };
        guesses.push(guess.name().to_string());

        let feedback = Feedback::calculate(guess, secret);
        if feedback.is_perfect() {
            success = true;
            break;
        }
        history.push((guess, feedback.pattern()));
    }

    SecretTestResult {
        secret: secret.name().to_string(),
        guesses,
        success,
    }
}

/// Run the solver on every roster player (or the first `limit`)
#[must_use]
pub fn run_test_all(roster: &Roster, limit: Option<usize>, show_progress: bool) -> TestAllStatistics {
    let secrets: Vec<&Player> = roster
        .players()
        .iter()
        .take(limit.unwrap_or(roster.len()))
        .collect();

    info!("Testing solver against {} secrets", secrets.len());

    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let total_start = Instant::now();
    let solver = Solver::new(roster);

    let results: Vec<SecretTestResult> = secrets
        .par_iter()
        .map(|&secret| {
            let result = solve_secret(&solver, secret, MAX_ATTEMPTS);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut stats = summarize(&results, total_start.elapsed());
    stats.opening_guess = solver.first_guess().map(|p| p.name().to_string());
    stats
}

fn summarize(results: &[SecretTestResult], total_time: Duration) -> TestAllStatistics {
    let solved: Vec<&SecretTestResult> = results.iter().filter(|r| r.success).collect();

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for result in &solved {
        *guess_distribution.entry(result.guesses.len()).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|r| r.guesses.len()).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let mut hardest: Vec<(String, usize)> = solved
        .iter()
        .map(|r| (r.secret.clone(), r.guesses.len()))
        .collect();
    hardest.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest.truncate(5);

    TestAllStatistics {
        total_players: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.guesses.len()).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.guesses.len()).min().unwrap_or(0),
        opening_guess: None,
        hardest,
        unsolved: results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.secret.clone())
            .collect(),
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    if stats.total_players == 0 {
        println!("\n  No players tested.");
        return;
    }

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Players tested:      {}", stats.total_players);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_players as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_players as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Best / worst:        {} / {}",
        stats.min_guesses, stats.max_guesses
    );
    if let Some(opening) = &stats.opening_guess {
        println!("  Opening guess:       {}", opening.bright_white());
    }
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().max().copied().unwrap_or(1);
    for guesses in 1..=MAX_ATTEMPTS {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = if stats.solved > 0 {
            count as f64 / stats.solved as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {guesses} guesses: {} {count:4} ({percentage:5.1}%)",
            bar.green()
        );
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Players".yellow().bold());
        for (name, guesses) in &stats.hardest {
            println!("  {} ({} guesses)", name.yellow(), guesses);
        }
    }

    if !stats.unsolved.is_empty() {
        println!("\n❌ {}", "Not Solved".red().bold());
        for name in &stats.unsolved {
            println!("  {}", name.red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solver_finds_a_known_secret() {
        let roster = Roster::embedded().unwrap();
        let solver = Solver::new(&roster);
        let secret = roster.find("Meg Lanning").unwrap();

        let result = solve_secret(&solver, secret, MAX_ATTEMPTS);
        assert!(result.success);
        assert_eq!(result.guesses.last().map(String::as_str), Some("Meg Lanning"));
        assert!(result.guesses.len() <= MAX_ATTEMPTS);
    }

    #[test]
    fn statistics_add_up() {
        let roster = Roster::embedded().unwrap();
        let stats = run_test_all(&roster, Some(10), false);

        assert_eq!(stats.total_players, 10);
        assert_eq!(stats.solved + stats.failed, 10);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), stats.solved);
        assert_eq!(stats.unsolved.len(), stats.failed);
        assert!(stats.opening_guess.is_some());
        assert!(stats.min_guesses <= stats.max_guesses);
    }

    #[test]
    fn summarize_empty() {
        let stats = summarize(&[], Duration::ZERO);
        assert_eq!(stats.total_players, 0);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
    }
}
