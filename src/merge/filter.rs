//! Noise filtering - pure functions over commit logs
//!
//! Administrative commits (branch creation, externals updates, merge
//! announcements) are not outstanding work and are dropped before counting.

use crate::types::CommitLogEntry;

/// Administrative messages every entry point treats as noise.
///
/// `MERGE` is included so merge announcements never count as work.
pub const STANDARD_NOISE: &[&str] = &[
    "Created release branch",
    "Created feature branch",
    "Updated svn:externals",
    "Updated project file",
    "Updated version information",
    "MERGE",
];

/// Project scaffolding messages, used for whole-repository scans
pub const SCAFFOLDING_NOISE: &[&str] = &[
    "Created DataConfig",
    "Created Functions",
    "Created StoredProcs",
    "Created Tables",
    "Created Views",
    "Created ClientSettings",
    "Initial setup",
];

/// A set of case-sensitive substrings marking noise commits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseFilter {
    patterns: Vec<String>,
}

impl NoiseFilter {
    /// Build a filter from arbitrary patterns
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut filter = Self {
            patterns: Vec::new(),
        };
        filter.extend(patterns);
        filter
    }

    /// The standard administrative set
    pub fn standard() -> Self {
        Self::new(STANDARD_NOISE.iter().copied())
    }

    /// Standard set plus project scaffolding markers
    pub fn with_scaffolding() -> Self {
        let mut filter = Self::standard();
        filter.extend(SCAFFOLDING_NOISE.iter().copied());
        filter
    }

    /// Add patterns, skipping empties and duplicates
    ///
    /// An empty pattern would match every message.
    pub fn extend<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for pattern in patterns {
            let pattern = pattern.into();
            if !pattern.is_empty() && !self.patterns.contains(&pattern) {
                self.patterns.push(pattern);
            }
        }
    }

    /// Patterns in insertion order
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Check if a commit message is noise
    pub fn is_noise(&self, message: &str) -> bool {
        self.patterns.iter().any(|p| message.contains(p.as_str()))
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::standard()
    }
}

/// Drop noise commits and, optionally, commits by other authors
///
/// Order-preserving; the input is left untouched. Author comparison is
/// exact with no case folding.
pub fn filter_log(
    entries: &[CommitLogEntry],
    noise: &NoiseFilter,
    author: Option<&str>,
) -> Vec<CommitLogEntry> {
    entries
        .iter()
        .filter(|e| !noise.is_noise(&e.message))
        .filter(|e| author.is_none_or(|a| e.author == a))
        .cloned()
        .collect()
}
