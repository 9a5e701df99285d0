//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::{BenchmarkResult, ScoreReport};
use colored::Colorize;

/// Print the result of scoring one guess
pub fn print_score_report(report: &ScoreReport, emoji: bool) {
    println!(
        "\n{}  {}",
        colored_row(&report.guess, &report.result),
        report.result
    );
    if emoji {
        println!("{}", report.result.to_emoji());
    }
    if report.result.is_perfect() {
        println!(
            "{}",
            format!("✅ {} is the answer", report.guess.text().to_uppercase())
                .green()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs scored:     {}", result.total_pairs);
    println!("   Word length:      {}", result.word_length);
    println!(
        "   Perfect matches:  {}",
        format!("{}", result.perfect).green()
    );
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!(
        "   Pairs/second:     {}",
        format!("{:.0}", result.pairs_per_second)
            .bright_yellow()
            .bold()
    );

    if result.total_pairs == 0 {
        return;
    }

    println!("\n📈 {}", "Correct letters per pair:".bright_cyan().bold());
    for correct in 0..=result.word_length {
        if let Some(&count) = result.distribution.get(&correct) {
            let pct = (count as f64 / result.total_pairs as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {correct:2}: {} {count:8} ({pct:5.1}%)", bar.green());
        }
    }
}
