//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterHistory, LetterScore, WORD_LENGTH, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile, e.g. " C " on green
#[must_use]
pub fn letter_tile(letter: char, score: Option<LetterScore>) -> ColoredString {
    let tile = format!(" {letter} ");
    match score {
        Some(LetterScore::Exact) => tile.white().bold().on_green(),
        Some(LetterScore::Present) => tile.black().bold().on_yellow(),
        Some(LetterScore::Absent) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn scored_row(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.scores())
        .map(|(letter, &score)| letter_tile(letter, Some(score)).to_string())
        .collect()
}

/// Render an unsubmitted row: typed letters, padded with placeholders
#[must_use]
pub fn draft_row(draft: &str) -> String {
    draft
        .chars()
        .map(Some)
        .chain(std::iter::repeat(None))
        .take(WORD_LENGTH)
        .map(|letter| match letter {
            Some(letter) => letter_tile(letter, None).to_string(),
            None => " _ ".bright_black().to_string(),
        })
        .collect()
}

/// Render the alphabet strip with each letter colored by its best score
#[must_use]
pub fn history_strip(history: &LetterHistory) -> String {
    history
        .iter()
        .map(|(letter, score)| match score {
            Some(score) => letter_tile(letter, Some(score)).to_string(),
            None => format!(" {letter} "),
        })
        .collect()
}

/// Plain-text alphabet strip for terminals without color
///
/// Absent letters become '·', so the remaining candidates stand out.
#[must_use]
pub fn history_plain(history: &LetterHistory) -> String {
    history
        .iter()
        .map(|(letter, score)| match score {
            Some(LetterScore::Absent) => "·".to_string(),
            _ => letter.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn draft_row_pads_missing_letters() {
        plain();
        assert_eq!(draft_row("CR"), " C  R  _  _  _ ");
        assert_eq!(draft_row(""), " _  _  _  _  _ ");
    }

    #[test]
    fn scored_row_shows_letters() {
        plain();
        let guess = Word::new("trace").unwrap();
        let feedback = Feedback::calculate(&guess, &Word::new("crane").unwrap());
        assert_eq!(scored_row(&guess, &feedback), " T  R  A  C  E ");
    }

    #[test]
    fn history_plain_masks_absent_letters() {
        let mut history = LetterHistory::new();
        let guess = Word::new("lumpy").unwrap();
        history.record(&guess, &Feedback::calculate(&guess, &Word::new("crane").unwrap()));

        let strip = history_plain(&history);
        assert!(strip.starts_with("A B C D E F G H I J K ·"));
        assert!(!strip.contains('L'));
        assert!(!strip.contains('Y'));
        assert!(strip.ends_with("X · Z"));
    }
}
