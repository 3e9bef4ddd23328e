//! Core domain types
//!
//! Words, verdicts and the guess evaluator. Everything here is pure and
//! free of I/O.

mod difficulty;
mod error;
mod evaluation;
mod verdict;
mod word;

pub use difficulty::Difficulty;
pub use error::EvalError;
pub use evaluation::{Evaluation, evaluate, evaluate_text};
pub use verdict::Verdict;
pub use word::Word;
