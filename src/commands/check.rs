//! One-shot guess check

use crate::api::{ApiResponse, GuessRequest, handle_guess};
use crate::core::{EvalError, Evaluation, evaluate_text};

/// Evaluate a single guess against a target
///
/// # Errors
///
/// Returns `EvalError` if either word is invalid or their lengths differ.
pub fn check_guess(guess: &str, target: &str) -> Result<Evaluation, EvalError> {
    evaluate_text(guess, target)
}

/// Same check, answered the way the request boundary answers it
#[must_use]
pub fn check_guess_response(guess: &str, target: &str) -> ApiResponse {
    handle_guess(&GuessRequest::new(guess, target))
}
