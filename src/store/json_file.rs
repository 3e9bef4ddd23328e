//! Record store backed by a single JSON document
//!
//! The whole array is read and rewritten on every append.

use super::{RecordStore, StoreError};
use crate::game::GameRecord;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Stores records as a JSON array in one file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordStore for JsonFileStore {
    fn append(&mut self, record: GameRecord) -> Result<(), StoreError> {
        let mut records = self.load()?;
        records.push(record);

        let document = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, document)?;

        log::debug!(
            "Wrote {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> Result<Vec<GameRecord>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }
}
