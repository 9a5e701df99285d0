//! Wordle Scorer - CLI
//!
//! Score single guesses, play a round in the terminal, or benchmark the scorer.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::EnvFilter;
use wordle_scorer::{
    commands::{PlayConfig, run_benchmark, run_play, score_words},
    game::GameConfig,
    output::{print_benchmark_result, print_score_report},
};

#[derive(Parser)]
#[command(
    name = "wordle_scorer",
    about = "Wordle guess scoring with exact duplicate-letter handling",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Number of guesses allowed per round
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Word length for played and benchmarked rounds
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_WORD_LENGTH)]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a guess against an answer
    Score {
        answer: String,
        guess: String,

        /// Also print the emoji squares
        #[arg(short, long)]
        emoji: bool,
    },

    /// Play a round in the terminal against a known answer
    Play {
        /// The secret answer
        answer: String,
    },

    /// Measure scorer throughput on random word pairs
    Benchmark {
        /// Number of pairs to score
        #[arg(short = 'n', long, default_value = "1000000")]
        count: usize,

        /// RNG seed for pair generation
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides the default of warnings only
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wordle_scorer=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Score {
            answer,
            guess,
            emoji,
        } => {
            let report = score_words(&answer, &guess).map_err(|e| anyhow::anyhow!(e))?;
            print_score_report(&report, emoji);
            Ok(())
        }
        Commands::Play { answer } => {
            let config = PlayConfig {
                answer,
                game: GameConfig::new(cli.attempts, cli.length),
            };
            run_play(config, io::stdin().lock(), io::stdout().lock())
                .map_err(|e| anyhow::anyhow!(e))?;
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            println!("Scoring {count} random {}-letter pairs...", cli.length);
            let result = run_benchmark(count, cli.length, seed).map_err(|e| anyhow::anyhow!(e))?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
