//! Daily Challenge
//!
//! A word-guessing game built around a duplicate-aware guess evaluation engine.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_challenge::core::{GuessEvaluator, LetterState};
//!
//! let mut evaluator = GuessEvaluator::new("level").unwrap();
//! let result = evaluator.evaluate("siege").unwrap();
//!
//! // LEVEL has two e's and SIEGE places both elsewhere
//! assert_eq!(result.count(LetterState::Present), 2);
//! assert!(!result.is_correct());
//! assert_eq!(evaluator.attempts(), 1);
//! ```

// Guess evaluation engine
pub mod core;

// Round policy and answer selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
