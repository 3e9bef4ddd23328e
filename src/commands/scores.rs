//! Score table command

use crate::core::Difficulty;
use crate::game::GameRecord;
use crate::store::{RecordStore, StoreError, top_scores};

/// Load the best winning records of a tier from `store`
///
/// # Errors
///
/// Returns `StoreError` if the store cannot be read.
pub fn load_scores<S: RecordStore + ?Sized>(
    store: &S,
    difficulty: Difficulty,
    limit: usize,
) -> Result<Vec<GameRecord>, StoreError> {
    let records = store.load()?;
    Ok(top_scores(&records, difficulty, limit)
        .into_iter()
        .cloned()
        .collect())
}
