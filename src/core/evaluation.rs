//! Guess evaluation
//!
//! Matches a guess against a target letter by letter under Wordle rules:
//! - `Exact`: same letter at the same position
//! - `Present`: letter occurs at another target position not already claimed
//! - `Absent`: no unclaimed occurrence left
//!
//! Duplicate letters are handled with two passes. Exact matches claim their
//! target letters first; only the leftovers can satisfy `Present`.

use super::{EvalError, Verdict, Word};
use serde::Serialize;

/// Result of evaluating one guess
///
/// Holds the canonical guess text and one verdict per guess position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Evaluation {
    guess: String,
    #[serde(rename = "result")]
    verdicts: Vec<Verdict>,
}

impl Evaluation {
    /// Canonical (uppercase) guess text
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// Verdicts in guess order
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.verdicts.iter().all(|&v| v == Verdict::Exact)
    }

    /// Count the number of exact positions
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(Verdict::Exact)
    }

    /// Count the number of present positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Verdict::Present)
    }

    fn count(&self, verdict: Verdict) -> usize {
        self.verdicts.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert verdicts to an emoji string like "🟨🟨🟩⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts.iter().map(|v| v.emoji()).collect()
    }
}

/// Evaluate `guess` against `target`
///
/// # Algorithm
/// 1. Every position starts `Absent`
/// 2. First pass: mark exact matches and remove those letters from the pool
/// 3. Second pass: for each remaining position, claim one pooled occurrence
///    of the letter if any is left and mark it `Present`
///
/// When several target positions hold the same letter, the leftmost
/// unclaimed one is taken. With a per-letter pool this choice never changes
/// the verdicts.
///
/// # Errors
/// Returns `EvalError::LengthMismatch` when the words differ in length.
///
/// # Examples
/// ```
/// use wordle_round::core::{evaluate, Verdict, Word};
///
/// let guess = Word::new("robot").unwrap();
/// let target = Word::new("libro").unwrap();
/// let eval = evaluate(&guess, &target).unwrap();
///
/// use Verdict::{Absent, Exact, Present};
/// assert_eq!(eval.verdicts(), &[Present, Present, Exact, Absent, Absent]);
/// ```
pub fn evaluate(guess: &Word, target: &Word) -> Result<Evaluation, EvalError> {
    if guess.len() != target.len() {
        return Err(EvalError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let guess_letters = guess.letters();
    let target_letters = target.letters();
    let mut verdicts = vec![Verdict::Absent; guess_letters.len()];
    let mut available = target.letter_counts();

    // First pass: exact matches must all be claimed before any present match
    for (i, (&g, &t)) in guess_letters.iter().zip(target_letters).enumerate() {
        if g == t {
            verdicts[i] = Verdict::Exact;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: leftovers satisfy present matches, left to right
    for (i, &g) in guess_letters.iter().enumerate() {
        if verdicts[i] == Verdict::Exact {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            verdicts[i] = Verdict::Present;
            *count -= 1;
        }
    }

    Ok(Evaluation {
        guess: guess.text().to_string(),
        verdicts,
    })
}

/// Canonicalize raw text and evaluate it
///
/// # Errors
/// Returns `EmptyInput` or `InvalidLetter` if either text is not a word,
/// and `LengthMismatch` as in [`evaluate`].
pub fn evaluate_text(guess: &str, target: &str) -> Result<Evaluation, EvalError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    evaluate(&guess, &target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Exact, Present};
    use proptest::prelude::*;

    fn eval(guess: &str, target: &str) -> Evaluation {
        evaluate_text(guess, target).unwrap()
    }

    #[test]
    fn identical_words_all_exact() {
        let result = eval("STARE", "STARE");
        assert_eq!(result.verdicts(), &[Exact; 5]);
        assert!(result.is_win());
    }

    #[test]
    fn anagram_of_target() {
        // Only A sits in place; every other letter exists elsewhere
        let result = eval("ERATS", "STARE");
        assert_eq!(result.verdicts(), &[Present, Present, Exact, Present, Present]);
        assert!(!result.is_win());
    }

    #[test]
    fn repeated_guess_letter_single_target_occurrence() {
        // LIBRO has one O; the first O in ROBOT claims it, the second stays absent
        let result = eval("ROBOT", "LIBRO");
        assert_eq!(result.verdicts(), &[Present, Present, Exact, Absent, Absent]);
        assert_eq!(result.count_exact(), 1);
        assert_eq!(result.count_present(), 2);
    }

    #[test]
    fn repeated_guess_letter_around_exact_match() {
        // N at position 2 is exact; the one N left goes to position 0, so position 3 is absent
        let result = eval("NONN", "ANNO");
        assert_eq!(result.verdicts(), &[Present, Present, Exact, Absent]);
    }

    #[test]
    fn later_exact_wins_over_earlier_present() {
        // First E would grab the only E in a single pass; the exact E at the end must win
        let result = eval("EERIE", "THOSE");
        assert_eq!(result.verdicts(), &[Absent, Absent, Absent, Absent, Exact]);
    }

    #[test]
    fn no_common_letters() {
        let result = eval("ABCDE", "FGHIJ");
        assert_eq!(result.verdicts(), &[Absent; 5]);
        assert_eq!(result.count_exact(), 0);
        assert_eq!(result.count_present(), 0);
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(eval("stare", "STARE"), eval("STARE", "stare"));
        assert_eq!(eval("erats", "stare").guess(), "ERATS");
    }

    #[test]
    fn length_mismatch_is_rejected() {
        assert_eq!(
            evaluate_text("AB", "ABC"),
            Err(EvalError::LengthMismatch {
                guess: 2,
                target: 3
            })
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(evaluate_text("", "ABC"), Err(EvalError::EmptyInput));
        assert_eq!(evaluate_text("ABC", ""), Err(EvalError::EmptyInput));
    }

    #[test]
    fn non_letters_are_rejected() {
        assert_eq!(evaluate_text("AB1", "ABC"), Err(EvalError::InvalidLetter('1')));
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(eval("ROBOT", "LIBRO").to_emoji(), "🟨🟨🟩⬜⬜");
    }

    #[test]
    fn serializes_as_guess_and_result() {
        let json = serde_json::to_value(eval("NONN", "ANNO")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "guess": "NONN",
                "result": ["present", "present", "exact", "absent"]
            })
        );
    }

    // Small alphabet to force plenty of duplicate letters
    fn word_of(len: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec(prop::sample::select(vec!['A', 'B', 'C', 'N', 'O']), len)
            .prop_map(|chars| chars.into_iter().collect::<String>())
    }

    fn word_pair() -> impl Strategy<Value = (String, String)> {
        (1usize..=8).prop_flat_map(|len| (word_of(len), word_of(len)))
    }

    // Slot-nulling formulation: consumed target letters are blanked in place
    fn slot_nulling(guess: &str, target: &str) -> Vec<Verdict> {
        let guess = guess.as_bytes();
        let mut slots: Vec<Option<u8>> = target.bytes().map(Some).collect();
        let mut verdicts = vec![Absent; guess.len()];

        for (i, &g) in guess.iter().enumerate() {
            if slots[i] == Some(g) {
                verdicts[i] = Exact;
                slots[i] = None;
            }
        }
        for (i, &g) in guess.iter().enumerate() {
            if verdicts[i] == Exact {
                continue;
            }
            if let Some(slot) = slots.iter_mut().find(|s| **s == Some(g)) {
                verdicts[i] = Present;
                *slot = None;
            }
        }
        verdicts
    }

    proptest! {
        #[test]
        fn matches_slot_nulling((guess, target) in word_pair()) {
            let result = eval(&guess, &target);
            let expected = slot_nulling(&guess, &target);
            prop_assert_eq!(result.verdicts(), expected.as_slice());
        }

        #[test]
        fn deterministic((guess, target) in word_pair()) {
            prop_assert_eq!(eval(&guess, &target), eval(&guess, &target));
        }

        #[test]
        fn result_length_matches_guess((guess, target) in word_pair()) {
            prop_assert_eq!(eval(&guess, &target).verdicts().len(), guess.len());
        }

        #[test]
        fn positional_matches_are_exact((guess, target) in word_pair()) {
            let result = eval(&guess, &target);
            for (i, (g, t)) in guess.bytes().zip(target.bytes()).enumerate() {
                if g == t {
                    prop_assert_eq!(result.verdicts()[i], Exact);
                } else {
                    prop_assert_ne!(result.verdicts()[i], Exact);
                }
            }
        }

        #[test]
        fn credited_letters_never_exceed_target_count((guess, target) in word_pair()) {
            let result = eval(&guess, &target);
            for letter in guess.bytes() {
                let credited = guess
                    .bytes()
                    .zip(result.verdicts())
                    .filter(|&(g, &v)| g == letter && v != Absent)
                    .count();
                let in_target = target.bytes().filter(|&t| t == letter).count();
                prop_assert!(credited <= in_target);
            }
        }

        #[test]
        fn absent_means_letter_exhausted((guess, target) in word_pair()) {
            // An absent letter has every target occurrence already credited
            let result = eval(&guess, &target);
            for (i, letter) in guess.bytes().enumerate() {
                if result.verdicts()[i] == Absent {
                    let credited = guess
                        .bytes()
                        .zip(result.verdicts())
                        .filter(|&(g, &v)| g == letter && v != Absent)
                        .count();
                    let in_target = target.bytes().filter(|&t| t == letter).count();
                    prop_assert_eq!(credited, in_target);
                }
            }
        }

        #[test]
        fn word_against_itself_wins((word, _) in word_pair()) {
            prop_assert!(eval(&word, &word).is_win());
        }

        #[test]
        fn mismatched_lengths_never_evaluate((guess, _) in word_pair(), extra in 1usize..4) {
            let target = "A".repeat(guess.len() + extra);
            let is_mismatch = matches!(
                evaluate_text(&guess, &target),
                Err(EvalError::LengthMismatch { .. })
            );
            prop_assert!(is_mismatch);
        }
    }
}
