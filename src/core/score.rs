//! Per-letter feedback and guess scoring
//!
//! A guess is scored against the answer one position at a time. Each position
//! receives a [`LetterScore`]; the variants are ordered by how much they tell
//! the player, so the best-known score for a letter can be kept with `max`.

use super::WORD_LENGTH;
use std::fmt;

/// Feedback for a single letter
///
/// Ordered by informativeness: `NotEvaluated < NotInWord < WrongPosition < Correct`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterScore {
    /// Not yet seen in any guess
    #[default]
    NotEvaluated,
    /// Letter does not occur in the answer (gray)
    NotInWord,
    /// Letter occurs in the answer at another position (yellow)
    WrongPosition,
    /// Letter is at this exact position in the answer (green)
    Correct,
}

impl LetterScore {
    /// Emoji tile for this score, as used in shared results
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongPosition => '🟨',
            Self::NotInWord => '⬜',
            Self::NotEvaluated => '⬛',
        }
    }
}

impl fmt::Display for LetterScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotEvaluated => "not evaluated",
            Self::NotInWord => "not in word",
            Self::WrongPosition => "wrong position",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

/// Scores for every position of a guess
pub type WordScore = [LetterScore; WORD_LENGTH];

/// Score `guess` against `answer`
///
/// Both words are expected to be uppercase ASCII of length [`WORD_LENGTH`].
/// Positions missing from a shorter guess score as [`LetterScore::NotInWord`].
///
/// # Algorithm
/// 1. First pass: exact position matches become `Correct` and consume that
///    answer position
/// 2. Second pass: every remaining guess letter consumes one unconsumed
///    occurrence of the same letter in the answer, if any, and becomes
///    `WrongPosition`
/// 3. Everything else is `NotInWord`
///
/// A repeated guess letter is therefore never credited more often than the
/// letter occurs in the answer.
///
/// # Examples
/// ```
/// use wrdle::core::{LetterScore::*, score};
///
/// assert_eq!(
///     score("TRACE", "CRANE"),
///     [NotInWord, Correct, Correct, WrongPosition, Correct]
/// );
/// ```
#[must_use]
pub fn score(guess: &str, answer: &str) -> WordScore {
    let guess = guess.as_bytes();
    let answer = answer.as_bytes();

    let mut result = [LetterScore::NotEvaluated; WORD_LENGTH];
    let mut consumed = [false; WORD_LENGTH];

    // First pass: exact matches
    for (i, slot) in result.iter_mut().enumerate() {
        if let (Some(g), Some(a)) = (guess.get(i), answer.get(i))
            && g == a
        {
            *slot = LetterScore::Correct;
            consumed[i] = true;
        }
    }

    // Second pass: displaced matches, one answer occurrence each
    for (i, slot) in result.iter_mut().enumerate() {
        if *slot != LetterScore::NotEvaluated {
            continue;
        }
        let Some(&letter) = guess.get(i) else {
            continue;
        };
        let available = answer
            .iter()
            .take(WORD_LENGTH)
            .enumerate()
            .position(|(j, &a)| a == letter && !consumed[j]);
        if let Some(j) = available {
            *slot = LetterScore::WrongPosition;
            consumed[j] = true;
        }
    }

    for slot in &mut result {
        if *slot == LetterScore::NotEvaluated {
            *slot = LetterScore::NotInWord;
        }
    }

    result
}

/// Render a word score as a row of emoji tiles
#[must_use]
pub fn score_to_emoji(score: &WordScore) -> String {
    score.iter().map(|s| s.to_emoji()).collect()
}

#[cfg(test)]
mod tests {
    use super::LetterScore::{Correct, NotEvaluated, NotInWord, WrongPosition};
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ordering_follows_informativeness() {
        assert!(NotEvaluated < NotInWord);
        assert!(NotInWord < WrongPosition);
        assert!(WrongPosition < Correct);
        assert_eq!(LetterScore::default(), NotEvaluated);
    }

    #[test]
    fn trace_vs_crane() {
        // T absent, R and A in place, C displaced, E in place
        assert_eq!(
            score("TRACE", "CRANE"),
            [NotInWord, Correct, Correct, WrongPosition, Correct]
        );
    }

    #[test]
    fn self_match_is_all_correct() {
        for word in ["CRANE", "SLATE", "SPEED", "AAAAA"] {
            assert_eq!(score(word, word), [Correct; WORD_LENGTH]);
        }
    }

    #[test]
    fn all_absent() {
        assert_eq!(score("ABCDE", "FGHIJ"), [NotInWord; WORD_LENGTH]);
    }

    #[test]
    fn repeated_guess_letter_consumes_one_occurrence_each() {
        // ERASE has two E's and one S; SPEED has two E's
        let result = score("SPEED", "ERASE");
        assert_eq!(
            result,
            [WrongPosition, NotInWord, WrongPosition, WrongPosition, NotInWord]
        );
    }

    #[test]
    fn repeated_guess_letter_beyond_answer_count_is_absent() {
        // SPEED has two E's; EERIE would credit at most two
        let result = score("EERIE", "SPEED");
        assert_eq!(
            result,
            [WrongPosition, WrongPosition, NotInWord, NotInWord, NotInWord]
        );
    }

    #[test]
    fn exact_match_takes_priority_over_displaced() {
        // The O at index 3 is exact; the O at index 1 takes FLOOR's other O
        let result = score("ROBOT", "FLOOR");
        assert_eq!(
            result,
            [WrongPosition, WrongPosition, NotInWord, Correct, NotInWord]
        );

        // Only one L in the answer and it is matched exactly
        let result = score("LLAMA", "ALOFT");
        assert_eq!(
            result,
            [NotInWord, Correct, WrongPosition, NotInWord, NotInWord]
        );
    }

    #[test]
    fn short_guess_scores_missing_positions_absent() {
        assert_eq!(
            score("CRA", "CRANE"),
            [Correct, Correct, Correct, NotInWord, NotInWord]
        );
    }

    #[test]
    fn emoji_row() {
        assert_eq!(score_to_emoji(&score("TRACE", "CRANE")), "⬜🟩🟩🟨🟩");
    }

    fn word() -> impl Strategy<Value = String> {
        "[A-E]{5}"
    }

    fn count(word: &str, letter: u8) -> usize {
        word.bytes().filter(|&b| b == letter).count()
    }

    proptest! {
        #[test]
        fn correct_count_matches_exact_positions(guess in word(), answer in word()) {
            let result = score(&guess, &answer);
            let exact = guess.bytes().zip(answer.bytes()).filter(|(g, a)| g == a).count();
            let correct = result.iter().filter(|&&s| s == Correct).count();
            prop_assert_eq!(correct, exact);
        }

        #[test]
        fn credited_letters_never_exceed_answer_count(guess in word(), answer in word()) {
            let result = score(&guess, &answer);
            for letter in b'A'..=b'E' {
                let credited = guess
                    .bytes()
                    .zip(result.iter())
                    .filter(|&(g, s)| g == letter && *s != NotInWord)
                    .count();
                prop_assert!(credited <= count(&answer, letter));
            }
        }

        #[test]
        fn every_position_is_evaluated(guess in word(), answer in word()) {
            prop_assert!(score(&guess, &answer).iter().all(|&s| s != NotEvaluated));
        }
    }
}
