//! Per-letter feedback

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Letter matches the target at the same position
    Exact,
    /// Letter appears at another, still unclaimed, target position
    Present,
    /// No unclaimed occurrence of the letter remains in the target
    Absent,
}

impl Verdict {
    /// Wire label used by the request boundary
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    /// Colored square for share strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_serialized_form() {
        for verdict in [Verdict::Exact, Verdict::Present, Verdict::Absent] {
            let json = serde_json::to_string(&verdict).unwrap();
            assert_eq!(json, format!("\"{}\"", verdict.label()));
        }
    }

    #[test]
    fn deserializes_lowercase_labels() {
        let parsed: Vec<Verdict> = serde_json::from_str(r#"["exact","present","absent"]"#).unwrap();
        assert_eq!(parsed, vec![Verdict::Exact, Verdict::Present, Verdict::Absent]);
    }
}
