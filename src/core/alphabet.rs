//! Cumulative per-letter knowledge across a game

use super::LetterScore;

/// Letters of the alphabet in table order
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Best-known [`LetterScore`] for each letter A-Z
///
/// Entries only ever move up the informativeness order; [`AlphabetScore::upgrade`]
/// ignores anything that would lower a letter's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlphabetScore([LetterScore; 26]);

/// Letters grouped by their current score, each group in alphabetical order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterGroups {
    pub correct: String,
    pub wrong_position: String,
    pub not_in_word: String,
}

impl AlphabetScore {
    /// A table with every letter `NotEvaluated`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn index(letter: char) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(usize::from(upper as u8 - b'A'))
        } else {
            None
        }
    }

    /// Score for a letter, or `None` if it is not A-Z (case-insensitive)
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterScore> {
        Self::index(letter).map(|i| self.0[i])
    }

    /// Raise a letter's score to `score` if that is more informative
    ///
    /// Returns `true` if the stored score changed. Non A-Z letters are ignored.
    pub fn upgrade(&mut self, letter: char, score: LetterScore) -> bool {
        let Some(i) = Self::index(letter) else {
            return false;
        };
        if score > self.0[i] {
            self.0[i] = score;
            true
        } else {
            false
        }
    }

    /// Fold one guess into the table
    ///
    /// For each position: a letter at its answer position is `Correct`; a
    /// letter found elsewhere in the answer is `WrongPosition`; any other
    /// letter is `NotInWord`. Existing scores are never lowered.
    pub fn record(&mut self, guess: &str, answer: &str) {
        for (i, letter) in guess.chars().enumerate() {
            let score = if answer.chars().nth(i) == Some(letter) {
                LetterScore::Correct
            } else if answer.contains(letter) {
                LetterScore::WrongPosition
            } else {
                LetterScore::NotInWord
            };
            self.upgrade(letter, score);
        }
    }

    /// Iterate over `(letter, score)` pairs from A to Z
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterScore)> + '_ {
        ALPHABET.iter().copied().zip(self.0.iter().copied())
    }

    /// Whether no letter has been scored yet
    #[must_use]
    pub fn is_unevaluated(&self) -> bool {
        self.0.iter().all(|&s| s == LetterScore::NotEvaluated)
    }

    /// Group the scored letters into correct, wrong-position and absent sets
    ///
    /// # Examples
    /// ```
    /// use wrdle::core::AlphabetScore;
    ///
    /// let mut alphabet = AlphabetScore::new();
    /// alphabet.record("TRACE", "CRANE");
    /// let groups = alphabet.groups();
    /// assert_eq!(groups.correct, "AER");
    /// assert_eq!(groups.wrong_position, "C");
    /// assert_eq!(groups.not_in_word, "T");
    /// ```
    #[must_use]
    pub fn groups(&self) -> LetterGroups {
        let mut groups = LetterGroups::default();
        for (letter, score) in self.iter() {
            match score {
                LetterScore::Correct => groups.correct.push(letter),
                LetterScore::WrongPosition => groups.wrong_position.push(letter),
                LetterScore::NotInWord => groups.not_in_word.push(letter),
                LetterScore::NotEvaluated => {}
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterScore::{Correct, NotEvaluated, NotInWord, WrongPosition};
    use proptest::prelude::*;

    #[test]
    fn new_table_is_unevaluated() {
        let alphabet = AlphabetScore::new();
        assert!(alphabet.is_unevaluated());
        assert_eq!(alphabet.iter().count(), 26);
        assert_eq!(alphabet.get('Q'), Some(NotEvaluated));
    }

    #[test]
    fn get_is_case_insensitive_and_rejects_non_letters() {
        let mut alphabet = AlphabetScore::new();
        alphabet.upgrade('c', Correct);
        assert_eq!(alphabet.get('C'), Some(Correct));
        assert_eq!(alphabet.get('c'), Some(Correct));
        assert_eq!(alphabet.get(' '), None);
        assert_eq!(alphabet.get('é'), None);
        assert!(!alphabet.upgrade('1', Correct));
    }

    #[test]
    fn upgrade_never_downgrades() {
        let mut alphabet = AlphabetScore::new();
        assert!(alphabet.upgrade('E', WrongPosition));
        assert!(!alphabet.upgrade('E', NotInWord));
        assert_eq!(alphabet.get('E'), Some(WrongPosition));
        assert!(alphabet.upgrade('E', Correct));
        assert!(!alphabet.upgrade('E', WrongPosition));
        assert_eq!(alphabet.get('E'), Some(Correct));
    }

    #[test]
    fn record_scores_each_letter() {
        let mut alphabet = AlphabetScore::new();
        alphabet.record("TRACE", "CRANE");
        assert_eq!(alphabet.get('T'), Some(NotInWord));
        assert_eq!(alphabet.get('R'), Some(Correct));
        assert_eq!(alphabet.get('A'), Some(Correct));
        assert_eq!(alphabet.get('C'), Some(WrongPosition));
        assert_eq!(alphabet.get('E'), Some(Correct));
        assert_eq!(alphabet.get('N'), Some(NotEvaluated));
    }

    #[test]
    fn record_keeps_correct_when_letter_later_misplaced() {
        let mut alphabet = AlphabetScore::new();
        alphabet.record("CRANE", "CRANE");
        alphabet.record("TRACE", "CRANE");
        assert_eq!(alphabet.get('C'), Some(Correct));
    }

    #[test]
    fn record_marks_repeated_letter_present_even_when_counted_out() {
        // The last E of EERIE is gray in the per-guess score, but E is in SPEED
        let mut alphabet = AlphabetScore::new();
        alphabet.record("EERIE", "SPEED");
        assert_eq!(alphabet.get('E'), Some(WrongPosition));
    }

    proptest! {
        #[test]
        fn scores_are_monotonic(
            answer in "[A-H]{5}",
            guesses in proptest::collection::vec("[A-H]{5}", 1..8),
        ) {
            let mut alphabet = AlphabetScore::new();
            for guess in &guesses {
                let before = alphabet;
                alphabet.record(guess, &answer);
                for ((_, old), (_, new)) in before.iter().zip(alphabet.iter()) {
                    prop_assert!(new >= old);
                }
            }
        }
    }
}
