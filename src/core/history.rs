//! Best-seen score for every letter of the alphabet
//!
//! The table starts with every letter unseen. Each scored guess folds its
//! letters in, keeping the highest-ranked score observed for each letter.

use super::feedback::{Feedback, LetterScore};
use super::word::Word;
use serde::{Deserialize, Serialize};

/// Number of letters tracked (A-Z)
pub const ALPHABET_SIZE: usize = 26;

/// Best score observed per letter across all submitted guesses
///
/// `None` means the letter has not been guessed yet. Ranks only ever go up:
/// unseen < Absent < Present < Exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LetterHistory([Option<LetterScore>; ALPHABET_SIZE]);

impl LetterHistory {
    /// Create an empty history with every letter unseen
    #[must_use]
    pub const fn new() -> Self {
        Self([None; ALPHABET_SIZE])
    }

    /// Fold a scored guess into the table
    ///
    /// A letter's entry is replaced only by a higher-ranked score, so an
    /// Exact entry is never overwritten.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &score) in guess.chars().iter().zip(feedback.scores()) {
            let slot = &mut self.0[Self::index(letter)];
            if slot.is_none_or(|best| score > best) {
                *slot = Some(score);
            }
        }
    }

    /// Best score recorded for an uppercase letter, or `None` if unseen
    ///
    /// Returns `None` for anything outside A-Z.
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterScore> {
        if letter.is_ascii_uppercase() {
            self.0[Self::index(letter)]
        } else {
            None
        }
    }

    /// Iterate over (letter, best score) pairs from A to Z
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<LetterScore>)> + '_ {
        (b'A'..=b'Z').zip(self.0.iter()).map(|(letter, &score)| (char::from(letter), score))
    }

    /// Check if no letter has been seen yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Reset every letter to unseen
    pub fn clear(&mut self) {
        self.0 = [None; ALPHABET_SIZE];
    }

    #[inline]
    fn index(letter: u8) -> usize {
        usize::from(letter - b'A')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterScore::{Absent, Exact, Present};

    fn record(history: &mut LetterHistory, guess: &str, secret: &str) {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        history.record(&guess, &Feedback::calculate(&guess, &secret));
    }

    #[test]
    fn history_starts_unseen() {
        let history = LetterHistory::new();
        assert!(history.is_empty());
        assert!(history.iter().all(|(_, score)| score.is_none()));
        assert_eq!(history.iter().count(), 26);
    }

    #[test]
    fn history_records_guess_letters() {
        let mut history = LetterHistory::new();
        record(&mut history, "trace", "crane");

        assert_eq!(history.get(b'T'), Some(Absent));
        assert_eq!(history.get(b'R'), Some(Exact));
        assert_eq!(history.get(b'A'), Some(Present));
        assert_eq!(history.get(b'C'), Some(Present));
        assert_eq!(history.get(b'E'), Some(Exact));
        assert_eq!(history.get(b'Z'), None);
    }

    #[test]
    fn history_upgrades_present_to_exact() {
        let mut history = LetterHistory::new();
        record(&mut history, "trace", "crane");
        assert_eq!(history.get(b'C'), Some(Present));

        record(&mut history, "clock", "crane");
        assert_eq!(history.get(b'C'), Some(Exact));
    }

    #[test]
    fn history_exact_is_sticky() {
        let mut history = LetterHistory::new();
        record(&mut history, "crane", "crane");
        assert_eq!(history.get(b'C'), Some(Exact));

        // C appears at the wrong position here but must stay exact
        record(&mut history, "occur", "crane");
        assert_eq!(history.get(b'C'), Some(Exact));
        assert_eq!(history.get(b'O'), Some(Absent));
    }

    #[test]
    fn history_never_decreases() {
        let secret = "crane";
        let guesses = ["trace", "clock", "occur", "nymph", "arena", "crane"];
        let mut history = LetterHistory::new();
        let mut previous = history;

        for guess in guesses {
            record(&mut history, guess, secret);
            for ((_, before), (_, after)) in previous.iter().zip(history.iter()) {
                assert!(after >= before, "rank went down after {guess}");
            }
            previous = history;
        }
    }

    #[test]
    fn history_clear_resets_all() {
        let mut history = LetterHistory::new();
        record(&mut history, "trace", "crane");
        assert!(!history.is_empty());

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history, LetterHistory::default());
    }

    #[test]
    fn history_get_ignores_non_letters() {
        let history = LetterHistory::new();
        assert_eq!(history.get(b'a'), None);
        assert_eq!(history.get(b'1'), None);
    }
}
