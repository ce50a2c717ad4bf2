//! Word scoring command
//!
//! Scores a guess against an arbitrary answer without starting a game.

use crate::core::{WordScore, score};
use crate::wordlists::loader::normalize;

/// Result of scoring one word against another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: String,
    pub answer: String,
    pub score: WordScore,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is not exactly five letters A-Z.
pub fn score_words(guess: &str, answer: &str) -> Result<ScoreResult, String> {
    let guess = normalize(guess).ok_or_else(|| format!("Invalid guess: {guess}"))?;
    let answer = normalize(answer).ok_or_else(|| format!("Invalid answer: {answer}"))?;
    let score = score(&guess, &answer);

    Ok(ScoreResult {
        guess,
        answer,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterScore::{NotInWord, WrongPosition};

    #[test]
    fn scores_normalized_words() {
        let result = score_words("speed", "Erase").unwrap();
        assert_eq!(result.guess, "SPEED");
        assert_eq!(result.answer, "ERASE");
        assert_eq!(
            result.score,
            [WrongPosition, NotInWord, WrongPosition, WrongPosition, NotInWord]
        );
    }

    #[test]
    fn rejects_malformed_words() {
        assert_eq!(score_words("abc", "crane").unwrap_err(), "Invalid guess: abc");
        assert_eq!(
            score_words("crane", "cr4ne").unwrap_err(),
            "Invalid answer: cr4ne"
        );
    }
}
