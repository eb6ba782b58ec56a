//! Dictionary summary

use crate::core::Word;
use crate::dictionary::Dictionary;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Size of a dictionary plus a random sample of its words
#[derive(Debug, Clone)]
pub struct WordsSummary {
    pub total: usize,
    pub sample: Vec<Word>,
}

/// Summarize a dictionary, sampling up to `count` distinct words
pub fn summarize<R: Rng>(dictionary: &Dictionary, count: usize, rng: &mut R) -> WordsSummary {
    let sample = dictionary
        .words()
        .choose_multiple(rng, count)
        .cloned()
        .collect();

    WordsSummary {
        total: dictionary.len(),
        sample,
    }
}
