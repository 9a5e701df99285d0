//! Single-round game state

use super::GameConfig;
use crate::core::{InvalidInput, ScoreResult, Word, WordError, score};
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::{debug, info};

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { attempts: usize },
    Lost,
}

/// One accepted guess and its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub result: ScoreResult,
}

/// Reasons a guess is refused
///
/// None of these consume an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidConfig(String),
    InvalidWord(WordError),
    WrongLength { expected: usize, got: usize },
    NotInDictionary(String),
    /// Guard only: `submit` checks the guess length against the answer before scoring
    Scoring(InvalidInput),
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(reason) => write!(f, "Invalid game config: {reason}"),
            Self::InvalidWord(e) => write!(f, "Invalid word: {e}"),
            Self::WrongLength { expected, got } => {
                write!(f, "Word must be exactly {expected} letters, got {got}")
            }
            Self::NotInDictionary(word) => write!(f, "Not a valid word: {word}"),
            Self::Scoring(e) => write!(f, "Scoring failed: {e}"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            Self::Scoring(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

/// A round in progress
#[derive(Debug, Clone)]
pub struct Game {
    answer: Word,
    config: GameConfig,
    dictionary: Option<FxHashSet<Word>>,
    history: Vec<Turn>,
    status: GameStatus,
}

impl Game {
    /// Start a round with the given answer
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` for a zero budget or length, and
    /// `GameError::WrongLength` if the answer does not match `config.word_length`.
    ///
    /// # Examples
    /// ```
    /// use wordle_scorer::core::Word;
    /// use wordle_scorer::game::{Game, GameConfig, GameStatus};
    ///
    /// let mut game = Game::new(Word::new("teach").unwrap(), GameConfig::default()).unwrap();
    /// let turn = game.submit("adieu").unwrap();
    /// assert_eq!(turn.result.to_string(), "Y--Y-");
    ///
    /// game.submit("teach").unwrap();
    /// assert_eq!(game.status(), GameStatus::Won { attempts: 2 });
    /// ```
    pub fn new(answer: Word, config: GameConfig) -> Result<Self, GameError> {
        config.validate().map_err(GameError::InvalidConfig)?;

        if answer.len() != config.word_length {
            return Err(GameError::WrongLength {
                expected: config.word_length,
                got: answer.len(),
            });
        }

        debug!(
            max_attempts = config.max_attempts,
            word_length = config.word_length,
            "New game"
        );

        Ok(Self {
            answer,
            config,
            dictionary: None,
            history: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Restrict guesses to a set of allowed words
    ///
    /// The answer is always accepted as a guess, even if it is missing from `words`.
    #[must_use]
    pub fn with_dictionary<I>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let mut dictionary: FxHashSet<Word> = words.into_iter().collect();
        dictionary.insert(self.answer.clone());
        self.dictionary = Some(dictionary);
        self
    }

    /// Submit a guess and score it
    ///
    /// # Errors
    /// Returns `GameError` if the round is over or the guess is malformed, has the
    /// wrong length, or is not in the dictionary. Rejected guesses do not use an attempt.
    pub fn submit(&mut self, guess: &str) -> Result<Turn, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let guess = Word::new(guess.trim())?;

        if guess.len() != self.config.word_length {
            return Err(GameError::WrongLength {
                expected: self.config.word_length,
                got: guess.len(),
            });
        }

        if let Some(dictionary) = &self.dictionary
            && !dictionary.contains(&guess)
        {
            debug!(guess = %guess, "Rejected guess outside dictionary");
            return Err(GameError::NotInDictionary(guess.text().to_string()));
        }

        // Unreachable while the length check above holds
        let result = score(&self.answer, &guess).map_err(GameError::Scoring)?;

        let turn = Turn { guess, result };
        self.history.push(turn.clone());

        debug!(
            attempt = self.history.len(),
            guess = %turn.guess,
            result = %turn.result,
            "Scored guess"
        );

        if turn.guess == self.answer {
            self.status = GameStatus::Won {
                attempts: self.history.len(),
            };
            info!(attempts = self.history.len(), "Game won");
        } else if self.attempts_remaining() == 0 {
            self.status = GameStatus::Lost;
            info!(answer = %self.answer, "Game lost");
        }

        Ok(turn)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}
