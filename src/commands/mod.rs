//! Command implementations

pub mod score;
pub mod simple;
pub mod words;

pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
pub use words::{WordsSummary, summarize};
