//! Commit hash value object
//!
//! Short or full git object name as recorded in the revert marker.

use std::fmt;

/// Validated git commit hash (4 to 64 hex digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitHash(String);

impl CommitHash {
    /// Parse a hash, trimming surrounding whitespace.
    ///
    /// Returns `None` for empty input or anything that is not plain hex;
    /// the marker content ends up as a git argument, so nothing else passes.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let valid = (4..=64).contains(&trimmed.len())
            && trimmed.chars().all(|c| c.is_ascii_hexdigit());
        valid.then(|| Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
