//! Command implementations

pub mod benchmark;
pub mod play;
pub mod score;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{PlayConfig, run_play};
pub use score::{ScoreReport, score_words};
