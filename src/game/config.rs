//! Round configuration

/// Attempt budget and word length for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    pub word_length: usize,
}

impl GameConfig {
    pub const DEFAULT_MAX_ATTEMPTS: usize = 6;
    pub const DEFAULT_WORD_LENGTH: usize = 5;

    #[must_use]
    pub const fn new(max_attempts: usize, word_length: usize) -> Self {
        Self {
            max_attempts,
            word_length,
        }
    }

    /// Check that both limits are positive
    ///
    /// # Errors
    /// Returns a message naming the offending field.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        if self.word_length == 0 {
            return Err("word_length must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_WORD_LENGTH)
    }
}
