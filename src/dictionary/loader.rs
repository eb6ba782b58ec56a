//! Word list loading utilities
//!
//! Loads a newline-delimited word list from disk, one word per line.

use super::{Dictionary, DictionaryError};
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

/// Load a dictionary from a file
///
/// Blank lines and entries that are not five letters are skipped.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read, or
/// `DictionaryError::Empty` if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordgame::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = Dictionary::from_entries(content.lines())?;
    info!(words = dictionary.len(), "Loaded word list");
    Ok(dictionary)
}

/// Load from `path` if given, otherwise use the embedded list
///
/// # Errors
///
/// Propagates any error from [`load_from_file`] or [`Dictionary::embedded`].
pub fn load(path: Option<&Path>) -> Result<Dictionary, DictionaryError> {
    match path {
        Some(path) => load_from_file(path),
        None => Dictionary::embedded(),
    }
}
