//! Women's Cricket Wordle - CLI
//!
//! Daily player guessing game with TUI and line-based modes.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use cricket_wordle::{
    commands::{
        compare_players, list_players, print_test_all_statistics, run_simple, run_test_all,
        today_info, upcoming_schedule,
    },
    daily::{DailySelector, format_countdown, puzzle_date, reference_midnight, time_until_reset},
    game::{GameSession, MAX_GAMES_PER_DAY, PlayLog},
    output::{print_comparison, print_roster, print_schedule, print_today},
    roster::{Roster, loader::load_from_file},
};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "cricwordle",
    about = "Guess the women's cricketer of the day in eight tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Custom roster CSV (same columns as the built-in roster)
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Pretend it is this date in IST (YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Play log location
    #[arg(
        long,
        global = true,
        env = "CRICWORDLE_STATE",
        default_value = ".cricwordle.json"
    )]
    state: PathBuf,

    /// Allow more than one game per day
    #[arg(long, global = true)]
    no_limit: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without TUI
    Simple,

    /// Show the feedback a guess would get against a chosen secret
    Compare {
        /// Guessed player
        guess: String,
        /// Secret player
        secret: String,
    },

    /// Show today's puzzle number and countdown
    Today {
        /// Also show the secret player
        #[arg(long)]
        reveal: bool,
    },

    /// List upcoming secret players
    Schedule {
        /// Number of days to list
        #[arg(short = 'n', long, default_value = "7")]
        days: usize,
    },

    /// List roster players
    Players {
        /// Only players from this nation
        #[arg(long)]
        nation: Option<String>,
    },

    /// Run the solver against every roster player
    TestAll {
        /// Limit number of players to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Settings shared by the two game modes
struct GameContext<'a> {
    roster: &'a Roster,
    now: DateTime<Utc>,
    state: &'a Path,
    no_limit: bool,
}

fn load_roster(path: Option<&Path>) -> Result<Roster> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load roster from {}", path.display())),
        None => Roster::embedded().context("Built-in roster is invalid"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let roster = load_roster(cli.roster.as_deref())?;
    let now = cli.date.map_or_else(Utc::now, reference_midnight);

    let ctx = GameContext {
        roster: &roster,
        now,
        state: &cli.state,
        no_limit: cli.no_limit,
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&ctx),
        Commands::Simple => run_simple_command(&ctx),
        Commands::Compare { guess, secret } => {
            let result = compare_players(&roster, &guess, &secret).map_err(|e| anyhow!(e))?;
            print_comparison(&result);
            Ok(())
        }
        Commands::Today { reveal } => {
            let info =
                today_info(&roster, &DailySelector::default(), now).map_err(|e| anyhow!(e))?;
            print_today(&info, reveal);
            Ok(())
        }
        Commands::Schedule { days } => {
            let entries = upcoming_schedule(&roster, &DailySelector::default(), now, days)
                .map_err(|e| anyhow!(e))?;
            print_schedule(&entries);
            Ok(())
        }
        Commands::Players { nation } => {
            print_roster(&list_players(&roster, nation.as_deref()));
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(&roster, limit);
            Ok(())
        }
    }
}

/// Load the play log and build today's session, or `None` if today is used up
fn prepare_game<'a>(ctx: &GameContext<'a>) -> Result<Option<(GameSession<'a>, PlayLog)>> {
    let date = puzzle_date(ctx.now);
    let log = PlayLog::load(ctx.state)
        .with_context(|| format!("Failed to read play log {}", ctx.state.display()))?;

    if !ctx.no_limit && log.limit_reached(date, MAX_GAMES_PER_DAY) {
        println!(
            "You have already played today's puzzle. Next player in {}.",
            format_countdown(time_until_reset(ctx.now))
        );
        return Ok(None);
    }

    let secret = DailySelector::default().player_for_date(ctx.roster, date)?;
    info!("Starting game for {date}");
    Ok(Some((GameSession::new(ctx.roster, secret), log)))
}

fn save_log(ctx: &GameContext<'_>, log: &PlayLog) -> Result<()> {
    log.save(ctx.state)
        .with_context(|| format!("Failed to write play log {}", ctx.state.display()))
}

fn run_play_command(ctx: &GameContext<'_>) -> Result<()> {
    use cricket_wordle::interactive::{App, run_tui};

    let Some((session, mut log)) = prepare_game(ctx)? else {
        return Ok(());
    };
    let date = puzzle_date(ctx.now);

    let app = App::new(session, date, ctx.now, log.how_to_play_seen());
    let outcome = run_tui(app)?;

    if outcome.how_to_play_seen {
        log.mark_how_to_play_seen();
    }
    if outcome.completed {
        log.record_game(date);
    }
    save_log(ctx, &log)
}

fn run_simple_command(ctx: &GameContext<'_>) -> Result<()> {
    let Some((session, mut log)) = prepare_game(ctx)? else {
        return Ok(());
    };
    let date = puzzle_date(ctx.now);

    let finished =
        run_simple(session, date, &mut std::io::stdin().lock()).map_err(|e| anyhow!(e))?;

    log.mark_how_to_play_seen();
    if finished.is_complete() {
        log.record_game(date);
    }
    save_log(ctx, &log)
}

fn run_test_all_command(roster: &Roster, limit: Option<usize>) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} possible secrets\n", roster.len());

    let stats = run_test_all(roster, limit, true);
    print_test_all_statistics(&stats);
}
