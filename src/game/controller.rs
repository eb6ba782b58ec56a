//! Stateful game controller
//!
//! `Game` owns the current state, the random source and session statistics,
//! and feeds player actions through [`reduce`]. Front ends drive it and
//! render the returned effects.

use super::snapshot::SnapshotError;
use super::state::GameState;
use super::stats::Statistics;
use super::transition::{Action, Effect, reduce};
use crate::dictionary::Dictionary;
use rand::Rng;
use tracing::{info, instrument};

/// A running game bound to a dictionary
pub struct Game<'d, R: Rng> {
    dictionary: &'d Dictionary,
    rng: R,
    state: GameState,
    stats: Statistics,
}

impl<'d, R: Rng> Game<'d, R> {
    /// Start a game with a freshly drawn secret
    pub fn new(dictionary: &'d Dictionary, mut rng: R) -> Self {
        let secret = dictionary.random(&mut rng).clone();
        info!(words = dictionary.len(), "Game created");
        Self::with_state(dictionary, rng, GameState::new(secret))
    }

    /// Resume from an existing state
    #[must_use]
    pub fn with_state(dictionary: &'d Dictionary, rng: R, state: GameState) -> Self {
        Self {
            dictionary,
            rng,
            state,
            stats: Statistics::default(),
        }
    }

    /// Apply an action and return the effects to render
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let transition = reduce(self.state.clone(), action, self.dictionary, &mut self.rng);
        self.state = transition.state;

        for effect in &transition.effects {
            if let Effect::GameOver { won, guesses, .. } = effect {
                self.stats.record_game(*won, *guesses);
            }
        }

        transition.effects
    }

    /// Submit a guess for the active slot
    pub fn submit(&mut self, word: &str) -> Vec<Effect> {
        self.dispatch(Action::Submit(word.to_string()))
    }

    /// Replace the active slot's draft
    pub fn edit(&mut self, text: &str) -> Vec<Effect> {
        self.dispatch(Action::Edit(text.to_string()))
    }

    /// Start over with a new secret
    pub fn replay(&mut self) -> Vec<Effect> {
        self.dispatch(Action::Replay)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Serialize the current state
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Json` if serialization fails.
    pub fn snapshot(&self) -> Result<String, SnapshotError> {
        self.state.to_snapshot()
    }

    /// Replace the current state with a snapshot
    ///
    /// On error the current state is kept.
    ///
    /// # Errors
    ///
    /// Returns any error from [`GameState::from_snapshot`], or
    /// `SnapshotError::UnknownWord` if the snapshot uses words missing from
    /// this game's dictionary.
    pub fn restore(&mut self, json: &str) -> Result<(), SnapshotError> {
        let state = GameState::from_snapshot(json)?;
        state.check_words(self.dictionary)?;
        self.state = state;
        info!(phase = ?self.state.phase(), "Game restored");
        Ok(())
    }
}
