//! Version control log sources
//!
//! The merge engine never talks to a repository directly. Everything it
//! knows about history arrives through [`VersionControlLogSource`].

mod parse;
mod svn;

pub use parse::{parse_list_output, parse_log_output};
pub use svn::SvnService;

use crate::error::Result;
use crate::types::{CommitLogEntry, DirEntry};
use async_trait::async_trait;

/// Read-only access to repository history and layout
///
/// Implementations must return log entries newest first.
#[async_trait]
pub trait VersionControlLogSource: Send + Sync {
    /// Fetch the commit log for a path
    ///
    /// `limit` of 0 means unbounded. With `stop_at_branch_creation`, history
    /// inherited from before the path was copied is excluded.
    ///
    /// Returns an empty vector when the path exists but has no history,
    /// `Error::PathNotFound` when it does not exist, and
    /// `Error::LogRetrieval` for any other backend failure.
    async fn get_log(
        &self,
        path: &str,
        limit: u32,
        stop_at_branch_creation: bool,
    ) -> Result<Vec<CommitLogEntry>>;

    /// List the immediate children of a directory
    async fn list_children(&self, path: &str) -> Result<Vec<DirEntry>>;

    /// Check whether `path` has a child with exactly this name
    ///
    /// A missing `path` counts as "no such child" rather than an error.
    async fn has_child(&self, path: &str, name: &str) -> Result<bool> {
        match self.list_children(path).await {
            Ok(children) => Ok(children.iter().any(|c| c.name == name)),
            Err(crate::error::Error::PathNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
