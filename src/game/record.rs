//! Finished-round records

use crate::core::Difficulty;
use serde::{Deserialize, Serialize};

/// Outcome of one finished round, as stored in the record document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub player: String,
    /// `None` when the target length matches no tier
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    pub target: String,
    pub guesses: Vec<String>,
    pub attempts: usize,
    pub won: bool,
}
