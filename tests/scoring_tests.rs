//! End-to-end tests through the public API.

use std::io::Cursor;
use wordle_scorer::commands::{PlayConfig, run_play, score_words};
use wordle_scorer::core::{Classification, InvalidInput, Word, score, score_bytes, score_pairs};
use wordle_scorer::game::{Game, GameConfig, GameStatus};

fn w(s: &str) -> Word {
    Word::new(s).unwrap()
}

#[test]
fn reference_scenarios() {
    let cases = [
        ("teach", "adieu", "Y--Y-"),
        ("hello", "hoops", "GY---"),
        ("hello", "keeps", "-G---"),
        ("adieu", "adieu", "GGGGG"),
        ("erase", "speed", "Y-YY-"),
        ("floor", "robot", "YY-G-"),
    ];

    for (answer, guess, expected) in cases {
        let result = score(&w(answer), &w(guess)).unwrap();
        assert_eq!(result.to_string(), expected, "{answer} / {guess}");
    }
}

#[test]
fn invalid_input_fails_fast() {
    assert_eq!(
        score(&w("hello"), &w("hi")),
        Err(InvalidInput::LengthMismatch {
            answer: 5,
            guess: 2
        })
    );
    assert_eq!(score_bytes(b"", b"hello"), Err(InvalidInput::Empty));
}

#[test]
fn scorer_is_usable_across_threads() {
    let answer = w("hello");
    let guesses = ["keeps", "hoops", "hello", "lolly"].map(w);

    let handles: Vec<_> = guesses
        .iter()
        .cloned()
        .map(|guess| {
            let answer = answer.clone();
            std::thread::spawn(move || score(&answer, &guess).unwrap())
        })
        .collect();

    let threaded: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let pairs: Vec<_> = guesses.iter().map(|g| (answer.clone(), g.clone())).collect();
    let batched: Vec<_> = score_pairs(&pairs).into_iter().map(Result::unwrap).collect();

    assert_eq!(threaded, batched);
    assert!(batched[2].is_perfect());
}

#[test]
fn repeated_letters_in_guess_after_exact_matches() {
    // Both L's in HELLO are claimed by exact matches, so the leading L gets nothing
    let result = score(&w("hello"), &w("lolly")).unwrap();
    assert_eq!(result.count(Classification::Correct), 2);
    assert_eq!(result.count(Classification::Misplaced), 1);
    assert_eq!(result.to_string(), "-YGG-");
}

#[test]
fn full_round_through_game_and_command() {
    let mut game = Game::new(w("teach"), GameConfig::default()).unwrap();
    for guess in ["adieu", "keeps", "teach"] {
        game.submit(guess).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Won { attempts: 3 });

    let mut out = Vec::new();
    let status = run_play(
        PlayConfig::new("teach".to_string()),
        Cursor::new("adieu\nkeeps\nteach\n"),
        &mut out,
    )
    .unwrap();
    assert_eq!(status, game.status());

    let report = score_words("teach", "keeps").unwrap();
    assert_eq!(report.result, game.history()[1].result);
}
