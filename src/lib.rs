//! Wrdle
//!
//! A Wordle-style word guessing game: a pure game-state engine plus
//! line-based and full-screen terminal front-ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wrdle::engine::{EngineConfig, GameEngine};
//! use wrdle::wordlists::WordSource;
//!
//! let mut engine = GameEngine::with_seed(WordSource::embedded(), EngineConfig::default(), 1)?;
//!
//! if engine.is_valid_guess("CRANE") {
//!     let guess = engine.submit_guess("CRANE")?;
//!     println!("{guess}");
//! } else {
//!     println!("{}", engine.state().invalid_message());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Core domain types
pub mod core;

// Game rules and state
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Session statistics
pub mod stats;

// Interactive TUI interface
pub mod interactive;
