//! Display functions for command results

use super::formatters::{evaluation_tiles, verdict_labels};
use crate::commands::AnalysisResult;
use crate::core::Evaluation;
use crate::game::GameRecord;
use colored::Colorize;

/// Print a single evaluation
pub fn print_check_result(evaluation: &Evaluation) {
    println!("\n  {}", evaluation_tiles(evaluation));
    println!("  {}", evaluation.to_emoji());
    println!("  {}\n", verdict_labels(evaluation).bright_black());

    if evaluation.is_win() {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible targets:", result.total_targets);
    println!("   Distinct patterns:  {}", result.distinct_patterns);
    println!("   Largest bucket:     {}", result.largest_bucket);
    println!(
        "   Expected remaining: {}",
        format!("{:.1}", result.expected_remaining).bright_yellow()
    );
    if let Some((pattern, count)) = &result.most_common {
        println!("   Most common:        {pattern} ({count} targets)");
    }
}

/// Print a score table
pub fn print_scores(title: &str, records: &[&GameRecord]) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(" {}", title.bright_cyan().bold());
    println!("{}", "─".repeat(50).cyan());

    if records.is_empty() {
        println!("  No wins recorded yet.");
        return;
    }

    for (rank, record) in records.iter().enumerate() {
        println!(
            "  {:>2}. {:<16} {} {}",
            (rank + 1).to_string().bright_black(),
            record.player.bright_white().bold(),
            record.target,
            format!(
                "{} {}",
                record.attempts,
                if record.attempts == 1 { "guess" } else { "guesses" }
            )
            .green()
        );
    }
}
