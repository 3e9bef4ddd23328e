//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::{Difficulty, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and entries that are not words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        log::warn!("Skipped {skipped} invalid entries in {}", path.display());
    }
    log::debug!("Loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_round::wordlists::loader::words_from_slice;
/// use wordle_round::wordlists::WORDS_5;
///
/// let words = words_from_slice(WORDS_5);
/// assert_eq!(words.len(), WORDS_5.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Words of a tier from `words`, or the embedded list when `words` is `None`
#[must_use]
pub fn words_for_tier(difficulty: Difficulty, words: Option<&[Word]>) -> Vec<Word> {
    match words {
        Some(words) => words
            .iter()
            .filter(|w| w.len() == difficulty.word_length())
            .cloned()
            .collect(),
        None => words_from_slice(super::words_for(difficulty)),
    }
}
