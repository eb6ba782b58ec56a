//! Word Game - CLI
//!
//! Guess the five-letter word in six tries, in a TUI or a plain terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use wordgame::{
    commands::{run_simple, score_guess, summarize},
    dictionary::{Dictionary, loader},
    game::{Game, snapshot},
    logging,
    output::print_scored_guess,
};

#[derive(Parser)]
#[command(
    name = "wordgame",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: bundled list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for reproducible secret words
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Save the game here on exit and resume from it on start
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Write logs to this file instead of stderr (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Score a guess against a secret word
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },

    /// Show dictionary size and a few random words
    Words {
        /// Number of words to sample
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;

    let dictionary = loader::load(cli.wordlist.as_deref()).context("loading word list")?;
    let rng = make_rng(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, rng, cli.state),
        Commands::Simple => {
            let mut game = start_game(&dictionary, rng, cli.state.as_deref());
            run_simple(&mut game, cli.state.as_deref())
        }
        Commands::Score { guess, secret } => run_score_command(&guess, &secret),
        Commands::Words { count } => {
            run_words_command(&dictionary, count, rng);
            Ok(())
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!(seed, "Using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

/// Resume from `state_path` when it holds a usable snapshot, else start fresh
fn start_game<'d>(
    dictionary: &'d Dictionary,
    rng: StdRng,
    state_path: Option<&Path>,
) -> Game<'d, StdRng> {
    if let Some(path) = state_path
        && path.exists()
    {
        let restored = snapshot::load_from_file(path)
            .and_then(|state| state.check_words(dictionary).map(|()| state));
        match restored {
            Ok(state) => {
                info!(path = %path.display(), "Resuming saved game");
                return Game::with_state(dictionary, rng, state);
            }
            Err(err) => warn!(error = %err, "Could not restore saved game, starting fresh"),
        }
    }
    Game::new(dictionary, rng)
}

fn run_play_command(dictionary: &Dictionary, rng: StdRng, state_path: Option<PathBuf>) -> Result<()> {
    use wordgame::interactive::{App, run_tui};

    let game = start_game(dictionary, rng, state_path.as_deref());
    run_tui(App::new(game, state_path))
}

fn run_score_command(guess: &str, secret: &str) -> Result<()> {
    let result = score_guess(guess, secret).context("scoring guess")?;
    print_scored_guess(&result.guess, &result.secret, &result.feedback);
    Ok(())
}

fn run_words_command(dictionary: &Dictionary, count: usize, mut rng: StdRng) {
    let summary = summarize(dictionary, count, &mut rng);
    println!("\n{} words in dictionary", summary.total);
    for word in &summary.sample {
        println!("  • {word}");
    }
}
