//! CFM Daily - CLI
//!
//! Daily word-guess, cryptogram, and reflection prompt puzzles in the
//! terminal, with progress saved per date.

use anyhow::Result;
use cfm_daily::{
    catalog::{PuzzleCatalog, loader::load_or_empty},
    commands::{ResetTarget, list_dates, reset_progress, show_date},
    interactive::{App, run_tui},
    output::{print_dates, print_reset, print_show_result},
    progress::ProgressStore,
    wordlists::{WordSet, loader::load_or_fallback},
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cfm_daily",
    about = "Daily scripture puzzles: word guessing, cryptograms, and reflection prompts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the puzzle catalog JSON document
    #[arg(short = 'p', long, global = true, default_value = "data/puzzles.json")]
    puzzles: PathBuf,

    /// Path to an accepted-word list (one word per line); embedded fallback when omitted
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Path to the progress record
    #[arg(long, global = true, default_value = "data/progress.json")]
    progress: PathBuf,

    /// Puzzle date (YYYY-MM-DD), defaulting to today
    #[arg(short = 'd', long, global = true)]
    date: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Print one date's puzzle availability and saved progress
    Show,

    /// List every catalog date with progress markers
    Dates,

    /// Clear saved progress for one date
    Reset {
        /// Which game to clear: wordle, cryptogram, or both
        #[arg(short, long, default_value = "both")]
        game: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = load_or_empty(&cli.puzzles);
    let words = load_or_fallback(cli.words.as_deref());
    let store = ProgressStore::new(&cli.progress);
    let today = chrono::Local::now().date_naive();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(catalog, words, store, today, cli.date),
        Commands::Show => {
            let date = cli.date.unwrap_or(today);
            print_show_result(&show_date(&catalog, &store, date));
            Ok(())
        }
        Commands::Dates => {
            print_dates(&list_dates(&catalog, &store));
            Ok(())
        }
        Commands::Reset { game } => run_reset_command(&store, cli.date.unwrap_or(today), &game),
    }
}

fn run_play_command(
    catalog: PuzzleCatalog,
    words: WordSet,
    store: ProgressStore,
    today: NaiveDate,
    date: Option<NaiveDate>,
) -> Result<()> {
    let app = App::new(catalog, words, store, today, date);
    run_tui(app)
}

fn run_reset_command(store: &ProgressStore, date: NaiveDate, game: &str) -> Result<()> {
    let target = ResetTarget::from_name(game)
        .ok_or_else(|| anyhow::anyhow!("unknown game '{game}' (expected wordle, cryptogram, or both)"))?;

    reset_progress(store, date, target)?;
    print_reset(date, target);
    Ok(())
}
