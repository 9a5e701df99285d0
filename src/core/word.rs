//! Word representation
//!
//! A Word is a validated, lowercased sequence of ASCII letters. Length is not
//! fixed here; the scorer and the game session decide which lengths they accept.

use rustc_hash::FxHashMap;
use std::fmt;

/// A validated puzzle word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased, so `"CRANE"` and `"crane"` are the same word.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The input is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_scorer::core::Word;
    ///
    /// let word = Word::new("Teach").unwrap();
    /// assert_eq!(word.text(), "teach");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        // Checked before lowercasing: some non-ASCII letters lowercase to ASCII
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_lowercase();

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters (always at least one)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter.to_ascii_lowercase())
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
