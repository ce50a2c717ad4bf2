//! Terminal output formatting
//!
//! Display utilities for the line-based game and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_alphabet, print_board, print_game_result, print_score_result, print_statistics,
};
pub use formatters::Palette;
