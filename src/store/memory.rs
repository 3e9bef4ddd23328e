//! In-memory record store

use super::{RecordStore, StoreError};
use crate::game::GameRecord;

/// Keeps records in a vector; nothing survives the process
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<GameRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn append(&mut self, record: GameRecord) -> Result<(), StoreError> {
        self.records.push(record);
        Ok(())
    }

    fn load(&self) -> Result<Vec<GameRecord>, StoreError> {
        Ok(self.records.clone())
    }
}
