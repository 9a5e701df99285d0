//! Text-mode game loop
//!
//! Reads one guess per line, scores it and prints the coloured row. The answer is
//! supplied by the caller.

use crate::core::Word;
use crate::game::{Game, GameConfig, GameStatus};
use crate::output::formatters::colored_row;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

/// Configuration for a played round
pub struct PlayConfig {
    pub answer: String,
    pub game: GameConfig,
}

impl PlayConfig {
    #[must_use]
    pub fn new(answer: String) -> Self {
        Self {
            answer,
            game: GameConfig::default(),
        }
    }
}

/// Play one round, reading guesses from `input` and writing feedback to `output`
///
/// Returns the final status. Ending input early (or typing `quit`) leaves the
/// round `InProgress`.
///
/// # Errors
///
/// Returns an error if the answer or config is invalid, or on an I/O failure.
pub fn run_play<R: BufRead, W: Write>(
    config: PlayConfig,
    mut input: R,
    mut output: W,
) -> Result<GameStatus, String> {
    let answer = Word::new(&config.answer).map_err(|e| format!("Invalid answer: {e}"))?;
    let mut game = Game::new(answer, config.game).map_err(|e| e.to_string())?;

    writeln!(
        output,
        "Guess the {}-letter word in {} attempts. Type 'quit' to give up.",
        config.game.word_length, config.game.max_attempts
    )
    .map_err(|e| e.to_string())?;

    while !game.is_over() {
        let attempt = game.attempts_used() + 1;
        write!(output, "Guess {attempt}/{}: ", config.game.max_attempts)
            .map_err(|e| e.to_string())?;
        output.flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
        if read == 0 {
            debug!("Input closed before the round ended");
            writeln!(output).map_err(|e| e.to_string())?;
            return Ok(game.status());
        }

        let line = line.trim();
        if matches!(line, "quit" | "q" | "exit") {
            writeln!(output, "The word was '{}'.", game.answer()).map_err(|e| e.to_string())?;
            return Ok(game.status());
        }

        match game.submit(line) {
            Ok(turn) => {
                writeln!(
                    output,
                    "{}  {}",
                    colored_row(&turn.guess, &turn.result),
                    turn.result
                )
                .map_err(|e| e.to_string())?;
            }
            Err(e) => {
                debug!(guess = line, error = %e, "Guess rejected");
                writeln!(output, "{}", e.to_string().red()).map_err(|e| e.to_string())?;
            }
        }
    }

    let status = game.status();
    let written = match status {
        GameStatus::Won { attempts } => writeln!(
            output,
            "{} Solved in {attempts} {}.",
            "Congratulations! You have correctly guessed the word!"
                .green()
                .bold(),
            if attempts == 1 { "guess" } else { "guesses" }
        ),
        GameStatus::Lost => writeln!(
            output,
            "{} The correct word was '{}'.",
            "Good try!".yellow().bold(),
            game.answer()
        ),
        GameStatus::InProgress => Ok(()),
    };
    written.map_err(|e| e.to_string())?;

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(answer: &str, attempts: usize, lines: &str) -> (GameStatus, String) {
        let mut config = PlayConfig::new(answer.to_string());
        config.game.max_attempts = attempts;
        let mut out = Vec::new();
        let status = run_play(config, Cursor::new(lines.to_string()), &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn play_win() {
        let (status, out) = play("teach", 6, "adieu\nteach\n");
        assert_eq!(status, GameStatus::Won { attempts: 2 });
        assert!(out.contains("Y--Y-"));
        assert!(out.contains("GGGGG"));
        assert!(out.contains("Congratulations"));
    }

    #[test]
    fn play_loss_reveals_answer() {
        let (status, out) = play("hello", 2, "keeps\nhoops\n");
        assert_eq!(status, GameStatus::Lost);
        assert!(out.contains("-G---"));
        assert!(out.contains("GY---"));
        assert!(out.contains("'hello'"));
    }

    #[test]
    fn play_rejections_keep_the_row() {
        let (status, out) = play("teach", 1, "tea\nte4ch\nteach\n");
        assert_eq!(status, GameStatus::Won { attempts: 1 });
        assert!(out.contains("exactly 5 letters"));
        assert!(out.contains("Invalid word"));
    }

    #[test]
    fn play_quit_and_eof() {
        let (status, out) = play("teach", 6, "adieu\nquit\n");
        assert_eq!(status, GameStatus::InProgress);
        assert!(out.contains("The word was 'teach'"));

        let (status, _) = play("teach", 6, "adieu\n");
        assert_eq!(status, GameStatus::InProgress);
    }

    #[test]
    fn play_invalid_answer() {
        let config = PlayConfig::new("te4ch".to_string());
        let result = run_play(config, Cursor::new(String::new()), Vec::new());
        assert!(result.is_err());
    }
}
