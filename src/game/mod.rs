//! Game session
//!
//! Tracks one round: the answer, the attempt budget and the scored guesses.
//! Scoring itself stays in [`crate::core`]; this module only decides when to call it.

mod config;
mod session;

pub use config::GameConfig;
pub use session::{Game, GameError, GameStatus, Turn};
