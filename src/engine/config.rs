//! Engine configuration

/// Answer used by [`AnswerFallback::Sentinel`] unless overridden
pub const SENTINEL_ANSWER: &str = "NOTAV";

/// Opening guess committed automatically in debug mode
pub const DEBUG_OPENING: &str = "ADIEU";

/// What `new_game` does when no usable answer can be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerFallback {
    /// Play this word instead and log a warning
    Sentinel(String),
    /// Report a configuration error
    FailFast,
}

impl Default for AnswerFallback {
    fn default() -> Self {
        Self::Sentinel(SENTINEL_ANSWER.to_string())
    }
}

/// Tunables for a [`GameEngine`](super::GameEngine)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Guesses allowed before the game is lost
    pub max_guesses: usize,
    /// Random draws from the word list before giving up on an answer
    pub answer_attempts: usize,
    pub fallback: AnswerFallback,
    /// Preferred opening word pre-filled into the current guess
    pub initial_guess: Option<String>,
    /// Commit [`DEBUG_OPENING`] and pre-fill the answer at game start
    pub debug: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_guesses: 6,
            answer_attempts: 4,
            fallback: AnswerFallback::default(),
            initial_guess: None,
            debug: false,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_initial_guess(mut self, word: impl Into<String>) -> Self {
        self.initial_guess = Some(word.into());
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: AnswerFallback) -> Self {
        self.fallback = fallback;
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
