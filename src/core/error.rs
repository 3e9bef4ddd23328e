//! Errors raised while building words and evaluating guesses

use thiserror::Error;

/// Input rejected by the evaluator
///
/// None of these are retryable: the caller has to fix the input and resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("guess has {guess} letters but the target has {target}")]
    LengthMismatch { guess: usize, target: usize },

    #[error("word must contain at least one letter")]
    EmptyInput,

    #[error("invalid letter '{0}' (only A-Z allowed)")]
    InvalidLetter(char),
}
