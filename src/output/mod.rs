//! Terminal output formatting
//!
//! Colored tiles, boards and statistics for the line-based front end.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_effects, print_scored_guess, print_share_grid, print_statistics};
