//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI

use crate::game::{Game, snapshot};
use crate::output::{print_board, print_effects, print_share_grid, print_statistics};
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, instrument};

/// Run the simple interactive CLI mode
///
/// If `state_path` is given, the game is saved there on exit.
///
/// # Errors
///
/// Returns an error if reading stdin or writing the snapshot fails.
#[instrument(skip(game))]
pub fn run_simple<R: Rng>(game: &mut Game<'_, R>, state_path: Option<&Path>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Game - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in six tries.");
    println!("  - Green: right letter, right spot");
    println!("  - Yellow: letter is in the word, wrong spot");
    println!("  - Gray: letter is not in the word\n");
    println!("Commands: ':new' to start over, ':stats' for statistics, ':quit' to exit\n");

    loop {
        print_board(game.state());

        if game.state().is_over() {
            print_share_grid(game.state());
            print_statistics(game.stats());

            let answer = get_user_input("\nPlay again? (yes/no)")?;
            match answer.as_deref().map(str::to_lowercase).as_deref() {
                Some("yes" | "y") => {
                    print_effects(&game.replay());
                    continue;
                }
                _ => break,
            }
        }

        let Some(input) = get_user_input("Guess")? else {
            break;
        };

        match input.to_lowercase().as_str() {
            ":quit" | ":q" | "quit" | "exit" => break,
            ":new" | ":n" => print_effects(&game.replay()),
            ":stats" => print_statistics(game.stats()),
            "" => {}
            _ => print_effects(&game.submit(&input)),
        }
    }

    if let Some(path) = state_path {
        snapshot::save_to_file(path, game.state())
            .with_context(|| format!("saving game to {}", path.display()))?;
        info!(path = %path.display(), "Game saved");
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
