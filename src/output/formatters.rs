//! Formatting utilities for terminal output

use crate::core::{Evaluation, Verdict};
use colored::{ColoredString, Colorize};

/// Render a single letter tile
#[must_use]
pub fn tile(letter: char, verdict: Verdict) -> ColoredString {
    let face = format!(" {letter} ");
    let face = face.as_str();
    match verdict {
        Verdict::Exact => face.black().on_green().bold(),
        Verdict::Present => face.black().on_yellow().bold(),
        Verdict::Absent => face.white().on_bright_black(),
    }
}

/// Render a whole evaluation as a row of colored tiles
#[must_use]
pub fn evaluation_tiles(evaluation: &Evaluation) -> String {
    evaluation
        .guess()
        .chars()
        .zip(evaluation.verdicts())
        .map(|(letter, &verdict)| tile(letter, verdict).to_string())
        .collect()
}

/// Labels joined the way the request boundary lists them
#[must_use]
pub fn verdict_labels(evaluation: &Evaluation) -> String {
    evaluation
        .verdicts()
        .iter()
        .map(|v| v.label())
        .collect::<Vec<_>>()
        .join(" ")
}
