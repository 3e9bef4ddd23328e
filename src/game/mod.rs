//! Game rounds
//!
//! The state machine wrapped around the evaluator, and the records a
//! finished round leaves behind.

mod record;
mod round;

pub use record::GameRecord;
pub use round::{Round, RoundError, RoundStatus};
