//! The game-state engine
//!
//! Picks answers, validates and commits guesses, and tracks the per-letter
//! knowledge and end of each game. Performs no I/O beyond logging.

mod config;
mod error;
mod game;

pub use config::{AnswerFallback, DEBUG_OPENING, EngineConfig, SENTINEL_ANSWER};
pub use error::{ConfigError, InvalidGuess, SubmitError};
pub use game::{GameEngine, GameState, WINNER_MESSAGES};
