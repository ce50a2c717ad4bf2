//! Word lists for the game
//!
//! Provides the embedded answer list and dictionary compiled into the binary,
//! and [`WordSource`], the read-only pair of lists the engine plays from.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, WORDS, WORDS_COUNT};

use rustc_hash::FxHashSet;

/// The answer list and the extra guessable dictionary
///
/// Words are stored uppercase. Membership checks are case-sensitive against
/// those uppercase forms; callers normalise first.
#[derive(Debug, Clone, Default)]
pub struct WordSource {
    words: Vec<String>,
    dictionary: Vec<String>,
    guessable: FxHashSet<String>,
}

impl WordSource {
    /// Build a source from already-loaded lists
    ///
    /// Playable entries are trimmed and uppercased, so the same form is
    /// drawn as an answer and matched as a guess. Anything else is only
    /// uppercased; answer selection still has to cope with those.
    #[must_use]
    pub fn new(words: Vec<String>, dictionary: Vec<String>) -> Self {
        let words: Vec<String> = words.into_iter().map(canonical).collect();
        let dictionary: Vec<String> = dictionary.into_iter().map(canonical).collect();
        let guessable = words.iter().chain(&dictionary).cloned().collect();
        Self {
            words,
            dictionary,
            guessable,
        }
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(WORDS),
            loader::words_from_slice(DICTIONARY),
        )
    }

    /// Words that may be chosen as the answer
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Additional words accepted as guesses
    #[must_use]
    pub fn dictionary(&self) -> &[String] {
        &self.dictionary
    }

    /// Whether `word` (uppercase) is in either list
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.guessable.contains(word)
    }
}

fn canonical(entry: String) -> String {
    loader::normalize(&entry).unwrap_or_else(|| entry.to_uppercase())
}
