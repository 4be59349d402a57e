//! Structural marker prefixes

use serde::{Deserialize, Serialize};

/// A set of literal line prefixes, matched case-insensitively
///
/// Prefixes are stored lowercased. A line matches when its trimmed,
/// lowercased form starts with any stored prefix.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct MarkerSet {
    prefixes: Vec<String>,
}

impl MarkerSet {
    /// Create a marker set from raw prefixes
    ///
    /// Prefixes that are empty after trimming are dropped, since they would
    /// match every line.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for prefix in prefixes {
            let prefix = prefix.as_ref().trim().to_lowercase();
            if !prefix.is_empty() && !normalized.contains(&prefix) {
                normalized.push(prefix);
            }
        }
        Self {
            prefixes: normalized,
        }
    }

    /// Check whether a line starts with one of the markers
    pub fn matches(&self, line: &str) -> bool {
        if self.prefixes.is_empty() {
            return false;
        }
        let normalized = line.trim().to_lowercase();
        self.prefixes
            .iter()
            .any(|prefix| normalized.starts_with(prefix.as_str()))
    }

    /// Position of the first matching line, if any
    pub fn find_first<'a, I>(&self, lines: I) -> Option<usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines.into_iter().position(|line| self.matches(line))
    }

    /// Normalized prefixes
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// True when no prefix is configured
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl From<Vec<String>> for MarkerSet {
    fn from(prefixes: Vec<String>) -> Self {
        Self::new(prefixes)
    }
}

impl From<MarkerSet> for Vec<String> {
    fn from(set: MarkerSet) -> Self {
        set.prefixes
    }
}
