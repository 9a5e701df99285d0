//! Benchmark command
//!
//! Measures scorer throughput on randomly generated word pairs.

use crate::core::{Classification, Word, score_pairs};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub word_length: usize,
    pub perfect: usize,
    /// Number of pairs per count of `Correct` positions
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

fn random_word(rng: &mut StdRng, len: usize) -> Result<Word, String> {
    let text: String = (0..len)
        .map(|_| char::from(rng.random_range(b'a'..=b'z')))
        .collect();
    Word::new(text).map_err(|e| e.to_string())
}

/// Score `count` random pairs of `word_length` letters
///
/// The same `seed` always produces the same pairs.
///
/// # Errors
///
/// Returns an error if `word_length` is zero.
pub fn run_benchmark(
    count: usize,
    word_length: usize,
    seed: u64,
) -> Result<BenchmarkResult, String> {
    if word_length == 0 {
        return Err("Word length must be at least 1".to_string());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let pairs = (0..count)
        .map(|_| -> Result<(Word, Word), String> {
            let answer = random_word(&mut rng, word_length)?;
            let guess = random_word(&mut rng, word_length)?;
            Ok((answer, guess))
        })
        .collect::<Result<Vec<_>, String>>()?;

    let start = Instant::now();
    let results = score_pairs(&pairs);
    let duration = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut perfect = 0;
    for result in results {
        let result = result.map_err(|e| e.to_string())?;
        if result.is_perfect() {
            perfect += 1;
        }
        *distribution
            .entry(result.count(Classification::Correct))
            .or_insert(0) += 1;
    }

    let pairs_per_second = if duration.is_zero() {
        0.0
    } else {
        count as f64 / duration.as_secs_f64()
    };

    info!(count, word_length, seed, ?duration, "Benchmark finished");

    Ok(BenchmarkResult {
        total_pairs: count,
        word_length,
        perfect,
        distribution,
        duration,
        pairs_per_second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(200, 5, 42).unwrap();

        assert_eq!(result.total_pairs, 200);
        assert_eq!(result.word_length, 5);
        assert!(result.perfect <= 200);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark(300, 5, 7).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_pairs);
        assert!(result.distribution.keys().all(|&k| k <= 5));
    }

    #[test]
    fn benchmark_is_reproducible() {
        let first = run_benchmark(100, 4, 9).unwrap();
        let second = run_benchmark(100, 4, 9).unwrap();
        assert_eq!(first.distribution, second.distribution);
    }

    #[test]
    fn benchmark_empty_and_invalid() {
        let result = run_benchmark(0, 5, 1).unwrap();
        assert_eq!(result.total_pairs, 0);
        assert!(result.distribution.is_empty());

        assert!(run_benchmark(10, 0, 1).is_err());
    }
}
