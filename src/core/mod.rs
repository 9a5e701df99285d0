//! Core domain types for scoring
//!
//! Pure values and functions: no I/O, no shared state, safe to call from any thread.

mod classification;
mod score;
mod word;

pub use classification::Classification;
pub use score::{InvalidInput, ScoreResult, score, score_bytes, score_pairs};
pub use word::{Word, WordError};
