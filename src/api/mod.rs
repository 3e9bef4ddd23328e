//! Request boundary for guess evaluation
//!
//! Transport-agnostic: turns a guess request into a status code and a JSON
//! body. Any HTTP layer can serve these directly.
//!
//! - `200` with `{"guess": "...", "result": ["exact", ...]}` on success
//! - `400` with `{"error": "..."}` for missing fields or invalid words
//! - `500` with `{"error": "..."}` if the result cannot be encoded

use crate::core::{EvalError, evaluate_text};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

const MISSING_FIELDS: &str = "guess and target are required";

/// Incoming guess request; both fields are checked after parsing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRequest {
    #[serde(default)]
    pub guess: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

impl GuessRequest {
    #[must_use]
    pub fn new(guess: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            guess: Some(guess.into()),
            target: Some(target.into()),
        }
    }
}

/// Status code plus JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn bad_request(message: impl Into<String>) -> Self {
        let message = message.into();
        log::warn!("Rejected guess request: {message}");
        Self {
            status: STATUS_BAD_REQUEST,
            body: json!({ "error": message }),
        }
    }

    fn internal_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log::error!("Failed to answer guess request: {message}");
        Self {
            status: STATUS_INTERNAL_ERROR,
            body: json!({ "error": message }),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Evaluate a parsed request
#[must_use]
pub fn handle_guess(request: &GuessRequest) -> ApiResponse {
    let (Some(guess), Some(target)) = (request.guess.as_deref(), request.target.as_deref()) else {
        return ApiResponse::bad_request(MISSING_FIELDS);
    };

    match evaluate_text(guess, target) {
        Ok(evaluation) => match serde_json::to_value(&evaluation) {
            Ok(body) => {
                log::debug!("Evaluated guess {}: {}", evaluation.guess(), evaluation.to_emoji());
                ApiResponse {
                    status: STATUS_OK,
                    body,
                }
            }
            Err(e) => ApiResponse::internal_error(format!("could not encode result: {e}")),
        },
        Err(EvalError::EmptyInput) => ApiResponse::bad_request(MISSING_FIELDS),
        Err(e) => ApiResponse::bad_request(e.to_string()),
    }
}

/// Parse a raw JSON request body and evaluate it
#[must_use]
pub fn handle_guess_json(body: &str) -> ApiResponse {
    match serde_json::from_str::<GuessRequest>(body) {
        Ok(request) => handle_guess(&request),
        Err(e) => ApiResponse::bad_request(format!("malformed request: {e}")),
    }
}
