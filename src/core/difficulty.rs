//! Difficulty tiers
//!
//! Each tier fixes the word length of a round.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playable difficulty tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Word length for this tier
    #[must_use]
    pub const fn word_length(self) -> usize {
        match self {
            Self::Easy => 5,
            Self::Medium => 6,
            Self::Hard => 8,
        }
    }

    /// Tier whose words have `len` letters
    #[must_use]
    pub fn for_length(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.word_length() == len)
    }

    /// Parse a tier by name ("easy", "medium", "hard") or word length ("5", "6", "8")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "easy" | "5" => Some(Self::Easy),
            "medium" | "6" => Some(Self::Medium),
            "hard" | "8" => Some(Self::Hard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown difficulty: {s} (expected easy, medium or hard)"))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_lengths() {
        assert_eq!(Difficulty::Easy.word_length(), 5);
        assert_eq!(Difficulty::Medium.word_length(), 6);
        assert_eq!(Difficulty::Hard.word_length(), 8);
    }

    #[test]
    fn for_length_roundtrips_tiers() {
        for tier in Difficulty::ALL {
            assert_eq!(Difficulty::for_length(tier.word_length()), Some(tier));
        }
        assert_eq!(Difficulty::for_length(7), None);
    }

    #[test]
    fn parse_by_name_or_length() {
        assert_eq!("easy".parse(), Ok(Difficulty::Easy));
        assert_eq!("HARD".parse(), Ok(Difficulty::Hard));
        assert_eq!("6".parse(), Ok(Difficulty::Medium));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn default_is_easy() {
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }
}
