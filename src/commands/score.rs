//! One-shot scoring command

use crate::core::{ScoreResult, Word, score};
use tracing::debug;

/// Result of scoring one guess
#[derive(Debug)]
pub struct ScoreReport {
    pub answer: Word,
    pub guess: Word,
    pub result: ScoreResult,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is malformed or the lengths differ.
pub fn score_words(answer: &str, guess: &str) -> Result<ScoreReport, String> {
    let answer = Word::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let result = score(&answer, &guess).map_err(|e| e.to_string())?;
    debug!(%answer, %guess, %result, "Scored");

    Ok(ScoreReport {
        answer,
        guess,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_words_reports_classifications() {
        let report = score_words("teach", "adieu").unwrap();
        assert_eq!(report.answer.text(), "teach");
        assert_eq!(report.guess.text(), "adieu");
        assert_eq!(report.result.to_string(), "Y--Y-");
    }

    #[test]
    fn score_words_normalizes_case() {
        let report = score_words("HELLO", "Keeps").unwrap();
        assert_eq!(report.result.to_string(), "-G---");
    }

    #[test]
    fn score_report_debug_names_fields() {
        let report = score_words("teach", "adieu").unwrap();
        let debug = format!("{report:?}");
        assert!(debug.contains("ScoreReport"));
        assert!(debug.contains("Misplaced"));
    }

    #[test]
    fn score_words_rejects_bad_input() {
        assert!(score_words("teach", "tea").unwrap_err().contains("letters"));
        assert!(score_words("", "adieu").unwrap_err().starts_with("Invalid answer"));
        assert!(score_words("teach", "ad1eu").unwrap_err().starts_with("Invalid guess"));
    }
}
