//! Display functions for the line-based front end

use super::formatters::{draft_row, history_plain, history_strip, scored_row};
use crate::core::{Feedback, Word};
use crate::game::{Effect, GameState, GuessSlot, Statistics};
use colored::Colorize;

/// Print the six-row board and the alphabet strip
pub fn print_board(state: &GameState) {
    println!("\n{}", "─".repeat(40).cyan());
    for (i, slot) in state.slots().iter().enumerate() {
        let row = match slot {
            GuessSlot::Finalized { word, feedback } => scored_row(word, feedback),
            GuessSlot::Active { draft } => draft_row(draft),
            GuessSlot::Inactive => draft_row("").dimmed().to_string(),
        };
        let marker = if state.active_slot() == Some(i) {
            "▶".bright_yellow().to_string()
        } else {
            " ".to_string()
        };
        println!("  {marker} {row}");
    }
    println!("{}", "─".repeat(40).cyan());
    let strip = if colored::control::SHOULD_COLORIZE.should_colorize() {
        history_strip(state.history())
    } else {
        history_plain(state.history())
    };
    println!("  {strip}");
    println!();
}

/// Print notices for the effects of one action
pub fn print_effects(effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::Rejected(rejection) => {
                println!("{}", format!("❌ {rejection}").red().bold());
            }
            Effect::GameOver { won: true, guesses, .. } => {
                println!(
                    "\n{}  Solved in {} {}",
                    "🎉 YOU WON!".bright_green().bold(),
                    guesses.to_string().bright_cyan().bold(),
                    if *guesses == 1 { "guess" } else { "guesses" }
                );
            }
            Effect::GameOver {
                won: false, secret, ..
            } => {
                println!(
                    "\n{} The word was: {}",
                    "💀 YOU LOST!".bright_red().bold(),
                    secret.text().bright_yellow().bold()
                );
            }
            Effect::BoardReset => println!("\n🔄 New game started!"),
            Effect::DraftChanged { .. }
            | Effect::RevealGuess { .. }
            | Effect::HistoryChanged(_)
            | Effect::ActivateSlot(_) => {}
        }
    }
}

/// Print the share grid of a finished game
pub fn print_share_grid(state: &GameState) {
    println!("\n  Guess history:");
    for (i, (word, feedback)) in state.guesses().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().bright_white().bold(),
            feedback.to_emoji()
        );
    }
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.total_games);
    println!("   Win rate:        {:.0}%", stats.win_rate());
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar_width = count * 30 / max;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(30 - bar_width).bright_black()
        );
        println!("   {guesses}: {bar} {count}");
    }
}

/// Print a single guess scored against a secret
pub fn print_scored_guess(guess: &Word, secret: &Word, feedback: &Feedback) {
    println!(
        "\n  {}  {}",
        scored_row(guess, feedback),
        feedback.to_emoji()
    );
    println!(
        "  {} exact, {} present (secret: {})",
        feedback.count_exact().to_string().green().bold(),
        feedback.count_present().to_string().yellow().bold(),
        secret.text().bright_black()
    );
}
