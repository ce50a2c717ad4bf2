//! Committed guesses

use super::WordScore;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GUESS_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a committed guess
///
/// Assigned from a process-wide counter when the guess is created, so two
/// guesses of the same word are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GuessId(u64);

impl GuessId {
    fn next() -> Self {
        Self(NEXT_GUESS_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GuessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A submitted word together with its per-letter score
///
/// Immutable once created. Equality and hashing use only the identifier.
#[derive(Debug, Clone)]
pub struct Guess {
    id: GuessId,
    word: String,
    score: WordScore,
}

impl Guess {
    pub(crate) fn new(word: impl Into<String>, score: WordScore) -> Self {
        Self {
            id: GuessId::next(),
            word: word.into(),
            score,
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> GuessId {
        self.id
    }

    /// The guessed word, uppercase
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> &WordScore {
        &self.score
    }

    /// Letters paired with their scores, in position order
    pub fn letters(&self) -> impl Iterator<Item = (char, super::LetterScore)> + '_ {
        self.word.chars().zip(self.score.iter().copied())
    }

    /// Whether every position scored `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.score
            .iter()
            .all(|&s| s == super::LetterScore::Correct)
    }
}

impl PartialEq for Guess {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Guess {}

impl Hash for Guess {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, super::score_to_emoji(&self.score))
    }
}
