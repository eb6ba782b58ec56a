//! Game state value
//!
//! `GameState` holds everything needed to render or resume a game. It is
//! only changed through [`super::reduce`].

use crate::core::{Feedback, LetterHistory, WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};

/// Number of guesses a player gets per game
pub const MAX_GUESSES: usize = 6;

/// One attempt row on the board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GuessSlot {
    /// Not reached yet
    #[default]
    Inactive,
    /// Currently editable; holds the letters typed so far
    Active { draft: String },
    /// Submitted and scored
    Finalized { word: Word, feedback: Feedback },
}

impl GuessSlot {
    /// Text shown in this slot
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Inactive => "",
            Self::Active { draft } => draft,
            Self::Finalized { word, .. } => word.text(),
        }
    }

    /// Scores, if the slot has been submitted
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        match self {
            Self::Finalized { feedback, .. } => Some(feedback),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_finalized(&self) -> bool {
        matches!(self, Self::Finalized { .. })
    }
}

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the guess in `slot` (0-5)
    AwaitingInput { slot: usize },
    /// Finished; only a replay leaves this phase
    GameOver { won: bool },
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) secret: Word,
    pub(super) slots: [GuessSlot; MAX_GUESSES],
    pub(super) phase: Phase,
    pub(super) history: LetterHistory,
}

impl GameState {
    /// Fresh game waiting for the first guess
    #[must_use]
    pub fn new(secret: Word) -> Self {
        let mut slots: [GuessSlot; MAX_GUESSES] = Default::default();
        slots[0] = GuessSlot::Active {
            draft: String::new(),
        };

        Self {
            secret,
            slots,
            phase: Phase::AwaitingInput { slot: 0 },
            history: LetterHistory::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[GuessSlot; MAX_GUESSES] {
        &self.slots
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn history(&self) -> &LetterHistory {
        &self.history
    }

    /// Index of the editable slot, or `None` once the game is over
    #[must_use]
    pub const fn active_slot(&self) -> Option<usize> {
        match self.phase {
            Phase::AwaitingInput { slot } => Some(slot),
            Phase::GameOver { .. } => None,
        }
    }

    /// Letters typed into the active slot
    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        self.active_slot().map(|slot| self.slots[slot].text())
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    /// `Some(true)` if won, `Some(false)` if lost, `None` while playing
    #[must_use]
    pub const fn outcome(&self) -> Option<bool> {
        match self.phase {
            Phase::GameOver { won } => Some(won),
            Phase::AwaitingInput { .. } => None,
        }
    }

    /// Number of submitted guesses
    #[must_use]
    pub fn turns_used(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_finalized()).count()
    }

    /// Submitted guesses with their scores, in order
    pub fn guesses(&self) -> impl Iterator<Item = (&Word, &Feedback)> {
        self.slots.iter().filter_map(|slot| match slot {
            GuessSlot::Finalized { word, feedback } => Some((word, feedback)),
            _ => None,
        })
    }

    /// Emoji grid of all submitted rows, one row per line
    #[must_use]
    pub fn share_grid(&self) -> String {
        self.guesses()
            .map(|(_, feedback)| feedback.to_emoji())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Keep only ASCII letters, uppercased, at most five of them
pub(super) fn normalize_draft(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .take(WORD_LENGTH)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
