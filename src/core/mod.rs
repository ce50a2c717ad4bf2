//! Core domain types for the game
//!
//! This module contains the scoring rules and value types with no I/O.
//! All types here are pure and testable on their own.

mod alphabet;
mod buffer;
mod guess;
mod score;

pub use alphabet::{ALPHABET, AlphabetScore, LetterGroups};
pub use buffer::{BLANK, GuessBuffer};
pub use guess::{Guess, GuessId};
pub use score::{LetterScore, WordScore, score, score_to_emoji};

/// Number of letters in every answer and guess
pub const WORD_LENGTH: usize = 5;
