//! Error types for merge-status

use thiserror::Error;

/// Errors produced while resolving merge status
#[derive(Debug, Error)]
pub enum Error {
    /// A trunk or branch path does not exist in the repository
    #[error("path not found: {0}")]
    PathNotFound(String),

    /// The log source failed to return history (network, protocol, timeout)
    #[error("failed to retrieve log: {0}")]
    LogRetrieval(String),

    /// A trunk commit announced a merge but carried no revision number
    #[error("merge marker has no revision number: {message:?}")]
    MergeMarkerParse {
        /// The offending commit message
        message: String,
    },

    /// A branch group references a project missing from the configuration
    #[error("merge project '{0}' is not configured")]
    UnknownProject(String),

    /// The requested branch group is missing from the configuration
    #[error("merge branch group '{0}' is not configured")]
    UnknownBranchGroup(String),

    /// The branch path exists but has no history at all
    #[error("branch has no log entries: {0}")]
    BranchNotFound(String),

    /// Configuration could not be located, parsed, or validated
    #[error("configuration error: {0}")]
    Config(String),

    /// A command-line value was rejected
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal invariant violated
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether retrying the same request could succeed.
    ///
    /// Only backend failures qualify; a missing path or malformed marker
    /// will fail identically on every attempt.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::LogRetrieval(_))
    }

    /// Whether this error is scoped to a single project's resolution.
    ///
    /// Project-scoped errors are reported as failed rows; everything else
    /// aborts the whole run.
    pub const fn is_project_scoped(&self) -> bool {
        matches!(
            self,
            Self::PathNotFound(_)
                | Self::LogRetrieval(_)
                | Self::MergeMarkerParse { .. }
                | Self::BranchNotFound(_)
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
