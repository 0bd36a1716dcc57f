//! Per-run settings threaded through every resolution

use crate::error::{Error, Result};
use crate::merge::filter::NoiseFilter;

/// How a batch reacts to a failing project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Every project runs to completion; failures become report rows
    #[default]
    CollectPartial,
    /// The first failure aborts the batch and cancels in-flight siblings
    FailFast,
}

/// Everything one run needs to resolve merge status
///
/// Built once by the caller and shared read-only by all resolutions.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Branch whose merge status is checked
    pub target_branch: String,
    /// Maximum trunk log entries to scan for a merge marker (0 = unbounded)
    pub log_limit: u32,
    /// Count only commits by this author
    pub author: Option<String>,
    /// Commits to exclude from the outstanding count
    pub noise: NoiseFilter,
    /// Reaction to per-project failures
    pub failure_policy: FailurePolicy,
}

impl RunContext {
    /// Create a context with the standard noise set
    pub fn new(target_branch: impl Into<String>, log_limit: u32) -> Result<Self> {
        let target_branch = target_branch.into();
        if target_branch.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "target branch must not be empty".to_string(),
            ));
        }

        Ok(Self {
            target_branch,
            log_limit,
            author: None,
            noise: NoiseFilter::standard(),
            failure_policy: FailurePolicy::default(),
        })
    }

    /// Restrict counts to one author
    #[must_use]
    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author.filter(|a| !a.is_empty());
        self
    }

    /// Replace the noise filter
    #[must_use]
    pub fn with_noise(mut self, noise: NoiseFilter) -> Self {
        self.noise = noise;
        self
    }

    /// Set the failure policy
    #[must_use]
    pub const fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_branch_rejected() {
        assert!(matches!(
            RunContext::new("  ", 1000),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_author_means_no_filter() {
        let ctx = RunContext::new("feature-x", 1000)
            .unwrap()
            .with_author(Some(String::new()));
        assert!(ctx.author.is_none());
    }

    #[test]
    fn test_defaults() {
        let ctx = RunContext::new("feature-x", 500).unwrap();
        assert_eq!(ctx.log_limit, 500);
        assert_eq!(ctx.failure_policy, FailurePolicy::CollectPartial);
        assert_eq!(ctx.noise, NoiseFilter::standard());
    }
}
