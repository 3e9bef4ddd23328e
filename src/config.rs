//! Game configuration
//!
//! Built from command-line flags and handed to commands and rounds.

use crate::core::Difficulty;
use std::path::PathBuf;

/// Default number of guesses per round
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Default location of the game record document
pub const DEFAULT_RECORDS_PATH: &str = "records.json";

/// Settings shared by a round and the commands that drive it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub max_attempts: usize,
    pub records_path: PathBuf,
}

impl GameConfig {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub fn with_records_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.records_path = path.into();
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            records_path: PathBuf::from(DEFAULT_RECORDS_PATH),
        }
    }
}
