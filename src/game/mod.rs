//! Game controller and state machine
//!
//! A game is `AwaitingInput { slot }` until the secret is guessed or the
//! sixth guess misses, then `GameOver { won }` until replayed. Transitions
//! are pure (see [`reduce`]); [`Game`] wraps them with a random source and
//! session statistics.

mod controller;
pub mod snapshot;
mod state;
mod stats;
mod transition;

pub use controller::Game;
pub use snapshot::SnapshotError;
pub use state::{GameState, GuessSlot, MAX_GUESSES, Phase};
pub use stats::Statistics;
pub use transition::{Action, Effect, Rejection, Transition, reduce};
