//! Core domain types for the word game
//!
//! Words, per-letter scoring, and the alphabet history table. Everything here
//! is pure and deterministic.

mod feedback;
mod history;
mod word;

pub use feedback::{Feedback, LetterScore};
pub use history::{ALPHABET_SIZE, LetterHistory};
pub use word::{WORD_LENGTH, Word, WordError};
