//! Word Game
//!
//! Guess a five-letter secret word in six tries. Each guess is scored letter
//! by letter and an alphabet strip tracks the best score seen for every letter.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use wordgame::dictionary::Dictionary;
//! use wordgame::game::Game;
//!
//! let dictionary = Dictionary::embedded().unwrap();
//! let mut game = Game::new(&dictionary, StdRng::seed_from_u64(7));
//!
//! let effects = game.submit("crane");
//! println!("{effects:?}");
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Game state machine and controller
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
