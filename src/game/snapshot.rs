//! Save and restore game state
//!
//! A snapshot is versioned JSON holding the full `GameState`. Restoring
//! re-scores every submitted guess against the secret and checks that the
//! slots, phase and letter history agree with each other.

use super::state::{GameState, GuessSlot, MAX_GUESSES, Phase, normalize_draft};
use crate::core::{Feedback, LetterHistory};
use crate::dictionary::Dictionary;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors raised while saving or restoring a snapshot
#[derive(Debug, Display, Error)]
pub enum SnapshotError {
    #[display("Malformed snapshot: {source}")]
    Json { source: serde_json::Error },
    #[display("Snapshot file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("Unsupported snapshot version {version}")]
    UnsupportedVersion { version: u32 },
    #[display("Inconsistent snapshot: {reason}")]
    Inconsistent { reason: &'static str },
    #[display("Snapshot word {word} is not in the word list")]
    UnknownWord { word: String },
}

impl From<serde_json::Error> for SnapshotError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    state: &'a GameState,
}

#[derive(Deserialize)]
struct SnapshotIn {
    version: u32,
    state: GameState,
}

impl GameState {
    /// Serialize to an opaque JSON snapshot
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Json` if serialization fails.
    pub fn to_snapshot(&self) -> Result<String, SnapshotError> {
        let json = serde_json::to_string(&SnapshotOut {
            version: SNAPSHOT_VERSION,
            state: self,
        })?;
        Ok(json)
    }

    /// Restore from a JSON snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, the version is unknown, or
    /// the state is internally inconsistent.
    pub fn from_snapshot(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: SnapshotIn = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                version: snapshot.version,
            });
        }
        snapshot.state.verified()
    }

    /// Check that the secret and every submitted guess are playable words
    ///
    /// A snapshot saved under one word list may be resumed under another.
    /// A secret missing from the current list could never be guessed.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::UnknownWord` naming the first word not found.
    pub fn check_words(&self, dictionary: &Dictionary) -> Result<(), SnapshotError> {
        let unknown = std::iter::once(&self.secret)
            .chain(self.guesses().map(|(word, _)| word))
            .find(|word| !dictionary.contains(word));
        match unknown {
            Some(word) => Err(SnapshotError::UnknownWord {
                word: word.text().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Check invariants and rebuild derived data
    fn verified(mut self) -> Result<Self, SnapshotError> {
        let inconsistent = |reason| Err(SnapshotError::Inconsistent { reason });

        let submitted = self
            .slots
            .iter()
            .take_while(|slot| slot.is_finalized())
            .count();
        if self.slots[submitted..].iter().any(GuessSlot::is_finalized) {
            return inconsistent("submitted guesses must be contiguous");
        }

        let hits = self
            .guesses()
            .filter(|(word, _)| *word == &self.secret)
            .count();

        match self.phase {
            Phase::AwaitingInput { slot } => {
                if slot >= MAX_GUESSES {
                    return inconsistent("active slot out of range");
                }
                if slot != submitted {
                    return inconsistent("active slot does not follow submitted guesses");
                }
                let GuessSlot::Active { draft } = &self.slots[slot] else {
                    return inconsistent("active slot is not editable");
                };
                let draft = normalize_draft(draft);
                if self.slots[slot + 1..]
                    .iter()
                    .any(|s| *s != GuessSlot::Inactive)
                {
                    return inconsistent("slots after the active one must be inactive");
                }
                if hits > 0 {
                    return inconsistent("secret was guessed but game is not over");
                }
                self.slots[slot] = GuessSlot::Active { draft };
            }
            Phase::GameOver { won } => {
                if submitted == 0 {
                    return inconsistent("finished game has no guesses");
                }
                if self.slots[submitted..]
                    .iter()
                    .any(|s| *s != GuessSlot::Inactive)
                {
                    return inconsistent("slots after the last guess must be inactive");
                }
                let last_is_secret = self.slots[submitted - 1].text() == self.secret.text();
                if won != last_is_secret || hits > usize::from(last_is_secret) {
                    return inconsistent("outcome does not match submitted guesses");
                }
                if !won && submitted != MAX_GUESSES {
                    return inconsistent("lost game must use every guess");
                }
            }
        }

        let mut history = LetterHistory::new();
        for slot in &mut self.slots {
            if let GuessSlot::Finalized { word, feedback } = slot {
                *feedback = Feedback::calculate(word, &self.secret);
                history.record(word, feedback);
            }
        }
        if history != self.history {
            return inconsistent("letter history does not match submitted guesses");
        }

        debug!(phase = ?self.phase, submitted, "Snapshot verified");
        Ok(self)
    }
}

/// Write a snapshot to disk
///
/// # Errors
///
/// Returns `SnapshotError::Io` if the file cannot be written.
#[instrument(skip(path, state), fields(path = %path.display()))]
pub fn save_to_file(path: &Path, state: &GameState) -> Result<(), SnapshotError> {
    let json = state.to_snapshot()?;
    fs::write(path, json).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a snapshot from disk
///
/// # Errors
///
/// Returns `SnapshotError::Io` if the file cannot be read, or any error from
/// [`GameState::from_snapshot`].
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_from_file(path: &Path) -> Result<GameState, SnapshotError> {
    let json = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    GameState::from_snapshot(&json)
}
