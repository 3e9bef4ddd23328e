//! Word representation
//!
//! A Word is a non-empty run of ASCII letters, canonicalized to uppercase.
//! Length is not fixed here; difficulty tiers and rounds decide which lengths
//! are playable.

use super::EvalError;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// A canonical uppercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored and letters are uppercased.
    ///
    /// # Errors
    /// Returns `EvalError` if:
    /// - The text has no letters (`EmptyInput`)
    /// - Any character is outside A-Z after case folding (`InvalidLetter`)
    ///
    /// # Examples
    /// ```
    /// use wordle_round::core::Word;
    ///
    /// let word = Word::new("stare").unwrap();
    /// assert_eq!(word.text(), "STARE");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("st4re").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, EvalError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(EvalError::EmptyInput);
        }

        if let Some(bad) = trimmed.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(EvalError::InvalidLetter(bad));
        }

        Ok(Self {
            text: trimmed.to_ascii_uppercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a Word cannot be built from empty input
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
