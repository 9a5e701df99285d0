//! Guess scoring
//!
//! Scores a guess against an answer position by position. Duplicate letters are
//! resolved with a consumption table:
//! 1. First pass: mark exact matches and count the answer letters they leave unclaimed
//! 2. Second pass: walk the remaining guess positions left to right, each one
//!    consuming a single unclaimed occurrence of its letter
//!
//! A letter therefore never earns more `Misplaced` marks than the answer has
//! unclaimed copies of it.

use super::{Classification, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;

/// Rejected scorer input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    Empty,
    LengthMismatch { answer: usize, guess: usize },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Cannot score an empty word"),
            Self::LengthMismatch { answer, guess } => write!(
                f,
                "Guess has {guess} letters but the answer has {answer}"
            ),
        }
    }
}

impl std::error::Error for InvalidInput {}

/// Classification of every guess position, in guess order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreResult(Vec<Classification>);

impl ScoreResult {
    #[inline]
    #[must_use]
    pub fn classifications(&self) -> &[Classification] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is `Correct`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&c| c == Classification::Correct)
    }

    /// Count positions with the given classification
    #[must_use]
    pub fn count(&self, classification: Classification) -> usize {
        self.0.iter().filter(|&&c| c == classification).count()
    }

    /// Render as a string of square emoji, e.g. "🟩🟨⬜⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for ScoreResult {
    type Err = String;

    /// Parse a symbol string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Empty score string".to_string());
        }
        s.chars()
            .map(|ch| {
                Classification::from_symbol(ch)
                    .ok_or_else(|| format!("Invalid score symbol '{ch}' in {s}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl AsRef<[Classification]> for ScoreResult {
    fn as_ref(&self) -> &[Classification] {
        &self.0
    }
}

/// Score `guess` against `answer`
///
/// # Errors
/// Returns `InvalidInput` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_scorer::core::{score, Classification::*, Word};
///
/// let answer = Word::new("teach").unwrap();
/// let guess = Word::new("adieu").unwrap();
/// let result = score(&answer, &guess).unwrap();
///
/// assert_eq!(
///     result.classifications(),
///     &[Misplaced, Absent, Absent, Misplaced, Absent]
/// );
/// ```
pub fn score(answer: &Word, guess: &Word) -> Result<ScoreResult, InvalidInput> {
    score_bytes(answer.letters(), guess.letters())
}

/// Score raw letter bytes, comparing ASCII case-insensitively
///
/// # Errors
/// Returns `InvalidInput::Empty` if either input is empty and
/// `InvalidInput::LengthMismatch` if their lengths differ.
///
/// # Examples
/// ```
/// use wordle_scorer::core::{InvalidInput, score_bytes};
///
/// assert_eq!(score_bytes(b"HELLO", b"hoops").unwrap().to_string(), "GY---");
/// assert_eq!(score_bytes(b"", b"hoops"), Err(InvalidInput::Empty));
/// assert_eq!(
///     score_bytes(b"hello", b"hi"),
///     Err(InvalidInput::LengthMismatch { answer: 5, guess: 2 })
/// );
/// ```
pub fn score_bytes(answer: &[u8], guess: &[u8]) -> Result<ScoreResult, InvalidInput> {
    if answer.is_empty() || guess.is_empty() {
        return Err(InvalidInput::Empty);
    }
    if answer.len() != guess.len() {
        return Err(InvalidInput::LengthMismatch {
            answer: answer.len(),
            guess: guess.len(),
        });
    }

    let mut result = vec![Classification::Absent; guess.len()];
    let mut unclaimed: FxHashMap<u8, usize> = FxHashMap::default();

    // First pass: exact matches, everything else stays available
    for ((slot, &a), &g) in result.iter_mut().zip(answer).zip(guess) {
        let a = a.to_ascii_lowercase();
        if a == g.to_ascii_lowercase() {
            *slot = Classification::Correct;
        } else {
            *unclaimed.entry(a).or_insert(0) += 1;
        }
    }

    // Second pass: misplaced letters consume from the unclaimed pool
    for (slot, &g) in result.iter_mut().zip(guess) {
        if *slot == Classification::Correct {
            continue;
        }
        if let Some(count) = unclaimed.get_mut(&g.to_ascii_lowercase())
            && *count > 0
        {
            *slot = Classification::Misplaced;
            *count -= 1;
        }
    }

    Ok(ScoreResult(result))
}

/// Score independent (answer, guess) pairs in parallel
///
/// Output order matches input order.
///
/// # Examples
/// ```
/// use wordle_scorer::core::{Word, score_pairs};
///
/// let w = |s: &str| Word::new(s).unwrap();
/// let pairs = vec![(w("teach"), w("adieu")), (w("hello"), w("hi")), (w("adieu"), w("adieu"))];
/// let results = score_pairs(&pairs);
///
/// assert_eq!(results[0].as_ref().unwrap().to_string(), "Y--Y-");
/// assert!(results[1].is_err());
/// assert!(results[2].as_ref().unwrap().is_perfect());
/// ```
#[must_use]
pub fn score_pairs(pairs: &[(Word, Word)]) -> Vec<Result<ScoreResult, InvalidInput>> {
    pairs
        .par_iter()
        .map(|(answer, guess)| score(answer, guess))
        .collect()
}
