//! Wordle Scorer
//!
//! Scores a guess against an answer letter by letter, with exact handling of
//! duplicate letters: a letter is only `Misplaced` while the answer still has an
//! occurrence of it that no exact match has claimed.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_scorer::core::{Word, score};
//!
//! let answer = Word::new("hello").unwrap();
//! let guess = Word::new("hoops").unwrap();
//!
//! let result = score(&answer, &guess).unwrap();
//! assert_eq!(result.to_string(), "GY---");
//! ```

// Core domain types and the scorer
pub mod core;

// Round state: attempt budget, win/loss
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
