//! Game record storage
//!
//! Records are appended after each finished round and read back for the
//! score table. Stores make no durability or locking promises.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::core::Difficulty;
use crate::game::GameRecord;
use std::io;
use thiserror::Error;

/// Errors from reading or writing records
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("record file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only collection of game records
pub trait RecordStore {
    /// Add a record
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be read or written.
    fn append(&mut self, record: GameRecord) -> Result<(), StoreError>;

    /// All records, oldest first
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be read.
    fn load(&self) -> Result<Vec<GameRecord>, StoreError>;
}

/// Best winning records for a tier
///
/// Wins only, fewest attempts first, ties broken by player name.
#[must_use]
pub fn top_scores(records: &[GameRecord], difficulty: Difficulty, limit: usize) -> Vec<&GameRecord> {
    let mut wins: Vec<&GameRecord> = records
        .iter()
        .filter(|r| r.won && r.difficulty == Some(difficulty))
        .collect();

    wins.sort_by(|a, b| a.attempts.cmp(&b.attempts).then_with(|| a.player.cmp(&b.player)));
    wins.truncate(limit);
    wins
}
