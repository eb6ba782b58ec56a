//! Dictionary of playable words
//!
//! The dictionary is the pool secrets are drawn from and the list guesses are
//! checked against. It is loaded once at startup and read-only afterwards.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use derive_more::{Display, Error};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Errors raised while building a dictionary
#[derive(Debug, Display, Error)]
pub enum DictionaryError {
    #[display("Failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("Word list contains no valid five-letter words")]
    Empty,
}

/// Ordered word list with fast case-insensitive membership checks
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries that are not five ASCII letters are skipped, as are repeats.
    /// Order of first appearance is preserved.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no entry is a valid word.
    #[instrument(skip(entries))]
    pub fn from_entries<I, S>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut lookup = FxHashSet::default();
        let mut skipped = 0usize;

        for entry in entries {
            let entry = entry.as_ref();
            if entry.trim().is_empty() {
                continue;
            }
            match Word::new(entry) {
                Ok(word) => {
                    if lookup.insert(word.clone()) {
                        words.push(word);
                    }
                }
                Err(_) => skipped += 1,
            }
        }

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        debug!(words = words.len(), skipped, "Dictionary built");
        Ok(Self { words, lookup })
    }

    /// Dictionary compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if the bundled list is empty.
    ///
    /// # Examples
    /// ```
    /// use wordgame::dictionary::{Dictionary, WORDS_COUNT};
    ///
    /// let dictionary = Dictionary::embedded().unwrap();
    /// assert_eq!(dictionary.len(), WORDS_COUNT);
    /// assert!(dictionary.contains(&"crane".parse().unwrap()));
    /// ```
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_entries(WORDS)
    }

    /// Check whether a word is playable
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// Draw a word uniformly at random
    pub fn random<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty lists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_dictionary_loads() {
        let dictionary = Dictionary::embedded().unwrap();
        assert_eq!(dictionary.len(), WORDS_COUNT);
        assert!(!dictionary.is_empty());
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn membership_is_case_insensitive() {
        let dictionary = Dictionary::from_entries(["Crane", "slate"]).unwrap();
        assert!(dictionary.contains(&word("crane")));
        assert!(dictionary.contains(&word("CRANE")));
        assert!(dictionary.contains(&word("SlAtE")));
        assert!(!dictionary.contains(&word("trace")));
    }

    #[test]
    fn from_entries_skips_invalid_and_duplicates() {
        let dictionary =
            Dictionary::from_entries(["crane", "toolong", "", "abc", "CRANE", "slate"]).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.words()[0].text(), "CRANE");
        assert_eq!(dictionary.words()[1].text(), "SLATE");
    }

    #[test]
    fn from_entries_rejects_empty() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            Dictionary::from_entries(empty),
            Err(DictionaryError::Empty)
        ));
        assert!(matches!(
            Dictionary::from_entries(["abc", "123456"]),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn random_draws_from_dictionary() {
        let dictionary = Dictionary::from_entries(["crane", "slate", "trace"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let word = dictionary.random(&mut rng);
            assert!(dictionary.contains(word));
        }
    }

    #[test]
    fn random_is_reproducible_with_seed() {
        let dictionary = Dictionary::embedded().unwrap();
        let first = dictionary.random(&mut StdRng::seed_from_u64(42)).clone();
        let second = dictionary.random(&mut StdRng::seed_from_u64(42)).clone();
        assert_eq!(first, second);
    }
}
