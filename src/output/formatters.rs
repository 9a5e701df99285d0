//! Formatting utilities for terminal output

use crate::core::{Classification, ScoreResult, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a tile coloured by its classification
#[must_use]
pub fn letter_tile(letter: u8, classification: Classification) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()))
        .white()
        .bold();
    match classification {
        Classification::Correct => text.on_truecolor(0x6a, 0xaa, 0x64),
        Classification::Misplaced => text.on_truecolor(0xc9, 0xb4, 0x58),
        Classification::Absent => text.on_truecolor(0x78, 0x7c, 0x7e),
    }
}

/// Render a scored guess as a row of coloured tiles
#[must_use]
pub fn colored_row(guess: &Word, result: &ScoreResult) -> String {
    guess
        .letters()
        .iter()
        .zip(result.classifications())
        .map(|(&letter, &c)| letter_tile(letter, c).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    #[test]
    fn colored_row_contains_uppercase_letters() {
        colored::control::set_override(false);
        let guess = Word::new("adieu").unwrap();
        let result = score(&Word::new("teach").unwrap(), &guess).unwrap();
        assert_eq!(colored_row(&guess, &result), " A  D  I  E  U ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }
}
