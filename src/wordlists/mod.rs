//! Word lists for each difficulty tier
//!
//! Provides embedded word lists compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{WORDS_5, WORDS_6, WORDS_8};

use crate::core::Difficulty;

/// Embedded target words for a tier
#[must_use]
pub const fn words_for(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => WORDS_5,
        Difficulty::Medium => WORDS_6,
        Difficulty::Hard => WORDS_8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_has_words() {
        for tier in Difficulty::ALL {
            assert!(!words_for(tier).is_empty(), "{tier} list is empty");
        }
    }

    #[test]
    fn words_match_tier_length() {
        for tier in Difficulty::ALL {
            for &word in words_for(tier) {
                assert_eq!(
                    word.len(),
                    tier.word_length(),
                    "Word '{word}' does not fit {tier}"
                );
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "Word '{word}' contains non-lowercase chars"
                );
            }
        }
    }

    #[test]
    fn no_duplicates() {
        for tier in Difficulty::ALL {
            let words = words_for(tier);
            let unique: std::collections::HashSet<_> = words.iter().collect();
            assert_eq!(unique.len(), words.len(), "{tier} list has duplicates");
        }
    }
}
