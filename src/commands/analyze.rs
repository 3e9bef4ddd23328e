//! Guess analysis command
//!
//! Evaluates one guess against every target of a tier and reports how well
//! the feedback splits the targets.

use crate::core::{EvalError, Verdict, Word, evaluate};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Result of analyzing a guess
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub guess: String,
    pub total_targets: usize,
    pub distinct_patterns: usize,
    pub largest_bucket: usize,
    pub expected_remaining: f64,
    /// Emoji pattern seen most often, with its count
    pub most_common: Option<(String, usize)>,
}

/// Analyze `guess` against `targets`
///
/// # Errors
///
/// Returns `EvalError::LengthMismatch` if any target differs in length from the guess.
pub fn analyze_guess(guess: &Word, targets: &[Word]) -> Result<AnalysisResult, EvalError> {
    let patterns: Vec<Vec<Verdict>> = targets
        .par_iter()
        .map(|target| evaluate(guess, target).map(|e| e.verdicts().to_vec()))
        .collect::<Result<_, _>>()?;

    let mut buckets: FxHashMap<Vec<Verdict>, usize> = FxHashMap::default();
    for pattern in patterns {
        *buckets.entry(pattern).or_insert(0) += 1;
    }

    let total_targets = targets.len();
    let largest_bucket = buckets.values().copied().max().unwrap_or(0);

    // Expected size of the bucket the real target lands in
    let expected_remaining = if total_targets == 0 {
        0.0
    } else {
        buckets.values().map(|&n| (n * n) as f64).sum::<f64>() / total_targets as f64
    };

    let most_common = buckets
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(pattern, &count)| (pattern.iter().map(|v| v.emoji()).collect(), count));

    log::debug!(
        "Analyzed {} against {total_targets} targets: {} patterns",
        guess,
        buckets.len()
    );

    Ok(AnalysisResult {
        guess: guess.text().to_string(),
        total_targets,
        distinct_patterns: buckets.len(),
        largest_bucket,
        expected_remaining,
        most_common,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS_5;
    use crate::wordlists::loader::words_from_slice;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    #[test]
    fn analyze_splits_targets() {
        let targets = words(&["stare", "erats", "robot", "stare"]);
        let guess = Word::new("stare").unwrap();

        let result = analyze_guess(&guess, &targets).unwrap();
        assert_eq!(result.guess, "STARE");
        assert_eq!(result.total_targets, 4);
        // STARE twice, ERATS, ROBOT
        assert_eq!(result.distinct_patterns, 3);
        assert_eq!(result.largest_bucket, 2);
        assert!((result.expected_remaining - 1.5).abs() < f64::EPSILON);
        assert_eq!(result.most_common, Some(("🟩🟩🟩🟩🟩".to_string(), 2)));
    }

    #[test]
    fn analyze_embedded_list() {
        let targets = words_from_slice(WORDS_5);
        let guess = Word::new("crane").unwrap();

        let result = analyze_guess(&guess, &targets).unwrap();
        assert_eq!(result.total_targets, WORDS_5.len());
        assert!(result.distinct_patterns > 1);
        assert!(result.largest_bucket < WORDS_5.len());
        assert!(result.expected_remaining >= 1.0);
    }

    #[test]
    fn analyze_rejects_mismatched_targets() {
        let targets = words(&["stare", "planet"]);
        let guess = Word::new("stare").unwrap();

        assert_eq!(
            analyze_guess(&guess, &targets).unwrap_err(),
            EvalError::LengthMismatch {
                guess: 5,
                target: 6
            }
        );
    }

    #[test]
    fn analyze_no_targets() {
        let guess = Word::new("stare").unwrap();
        let result = analyze_guess(&guess, &[]).unwrap();
        assert_eq!(result.distinct_patterns, 0);
        assert_eq!(result.largest_bucket, 0);
        assert_eq!(result.most_common, None);
    }
}
