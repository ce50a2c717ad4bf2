//! Engine error types

use std::fmt;

/// Why a candidate guess was rejected
///
/// The `Display` text is the message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGuess {
    /// A slot is blank or the word is too short
    NotEnoughLetters,
    /// Something other than A-Z was entered
    NonAlphabetic,
    /// Neither the answer list nor the dictionary has the word
    NotInWordList,
}

impl fmt::Display for InvalidGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughLetters => write!(f, "Not enough letters"),
            Self::NonAlphabetic => write!(f, "Use only A-Z"),
            Self::NotInWordList => write!(f, "Not in word list"),
        }
    }
}

impl std::error::Error for InvalidGuess {}

/// The word lists cannot support a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyWordList,
    NoPlayableAnswer { attempts: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list is empty"),
            Self::NoPlayableAnswer { attempts } => {
                write!(f, "No playable answer found after {attempts} draws")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A guess could not be committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    GameOver,
    Invalid(InvalidGuess),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is over"),
            Self::Invalid(reason) => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GameOver => None,
            Self::Invalid(reason) => Some(reason),
        }
    }
}

impl From<InvalidGuess> for SubmitError {
    fn from(reason: InvalidGuess) -> Self {
        Self::Invalid(reason)
    }
}
