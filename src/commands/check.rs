//! Guess validity command

use crate::engine::GameEngine;

/// Outcome of checking a word against the game's rules and lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub word: String,
    pub valid: bool,
    /// Rejection message, empty when valid
    pub message: String,
    /// Whether the word can be drawn as an answer
    pub is_answer: bool,
}

/// Check whether `word` would be accepted as a guess
pub fn check_word(engine: &mut GameEngine, word: &str) -> CheckResult {
    let valid = engine.is_valid_guess(word);
    let upper = word.to_ascii_uppercase();
    let is_answer = valid && engine.words().words().contains(&upper);

    CheckResult {
        word: upper,
        valid,
        message: engine.state().invalid_message().to_string(),
        is_answer,
    }
}
