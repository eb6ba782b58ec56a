//! Per-letter scoring of a guess against the secret word
//!
//! Each position of a guess receives one of three scores:
//! - Exact: same letter at the same position in the secret
//! - Present: letter occurs somewhere else in the secret
//! - Absent: letter does not occur in the secret
//!
//! Repeated guess letters are each checked against the whole secret, so a
//! letter can be marked Present more than once even when the secret holds a
//! single copy of it. This matches the game's established rules and is not
//! Wordle's multiset accounting.

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score of a single letter position
///
/// Variants are ordered by rank, so `Ord` gives Absent < Present < Exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterScore {
    Absent,
    Present,
    Exact,
}

impl LetterScore {
    /// Emoji tile for this score
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Scores for all five positions of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback([LetterScore; WORD_LENGTH]);

impl Feedback {
    /// All positions exact
    pub const PERFECT: Self = Self([LetterScore::Exact; WORD_LENGTH]);

    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordgame::core::{Feedback, LetterScore::{Absent, Exact, Present}, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.scores(), &[Absent, Exact, Present, Present, Exact]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut scores = [LetterScore::Absent; WORD_LENGTH];

        for (i, (&letter, &target)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            scores[i] = if letter == target {
                LetterScore::Exact
            } else if secret.has_letter(letter) {
                LetterScore::Present
            } else {
                LetterScore::Absent
            };
        }

        Self(scores)
    }

    /// Create feedback from raw scores
    #[inline]
    #[must_use]
    pub const fn from_scores(scores: [LetterScore; WORD_LENGTH]) -> Self {
        Self(scores)
    }

    /// Scores in position order
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is exact
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of exact positions
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterScore::Exact).count()
    }

    /// Count the number of present-elsewhere positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterScore::Present).count()
    }

    /// Convert to an emoji string such as "⬜🟩🟨🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterScore::{Absent, Exact, Present};
    use super::*;

    fn score(guess: &str, secret: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn feedback_self_is_perfect() {
        for word in ["crane", "slate", "audio", "jazzy", "aaaaa"] {
            let feedback = score(word, word);
            assert_eq!(feedback, Feedback::PERFECT);
            assert!(feedback.is_perfect());
            assert_eq!(feedback.count_exact(), 5);
        }
    }

    #[test]
    fn feedback_disjoint_letters_all_absent() {
        let feedback = score("lumpy", "crane");
        assert_eq!(feedback.scores(), &[Absent; 5]);
        assert_eq!(feedback.count_exact(), 0);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn feedback_trace_against_crane() {
        let feedback = score("trace", "crane");
        assert_eq!(feedback.scores(), &[Absent, Exact, Present, Present, Exact]);
    }

    #[test]
    fn feedback_exact_wins_over_present() {
        // CREPE has E at positions 2 and 4; the E at position 1 is only present.
        let feedback = score("geese", "crepe");
        assert_eq!(feedback.scores(), &[Absent, Present, Exact, Absent, Exact]);
    }

    #[test]
    fn feedback_repeated_letters_not_multiset_aware() {
        // SPEED has two Es; SHINE holds a single E, yet both are marked present.
        let feedback = score("speed", "shine");
        assert_eq!(feedback.scores(), &[Exact, Absent, Present, Present, Absent]);
        assert_eq!(feedback.count_present(), 2);
    }

    #[test]
    fn feedback_emoji_rendering() {
        assert_eq!(score("trace", "crane").to_emoji(), "⬜🟩🟨🟨🟩");
        assert_eq!(Feedback::PERFECT.to_string(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn letter_score_rank_order() {
        assert!(Absent < Present);
        assert!(Present < Exact);
        assert_eq!(Present.max(Exact), Exact);
    }
}
