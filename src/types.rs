//! Core types for merge-status

use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single commit from a log fetch
///
/// Produced by a log source, newest first. Never mutated after retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitLogEntry {
    /// Revision number (monotonic, unique within the repository)
    pub revision: u64,
    /// Commit author
    pub author: String,
    /// Full commit message
    pub message: String,
    /// When the commit was made, if the source reports it
    pub committed_at: Option<DateTime<Utc>>,
}

impl CommitLogEntry {
    /// Create an entry without a timestamp
    pub fn new(revision: u64, author: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            revision,
            author: author.into(),
            message: message.into(),
            committed_at: None,
        }
    }
}

/// A child entry returned by a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Entry name, without any trailing `/`
    pub name: String,
}

/// The branch revision a trunk commit declares as merged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeMarker {
    /// Highest branch revision incorporated into trunk
    pub source_revision: u64,
}

/// Where to find one project's trunk and branches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMergeTarget {
    /// Project name as it appears in the report
    pub project: String,
    /// Full trunk location
    pub trunk_path: String,
    /// Full location of the `branches` directory (trailing `/`)
    pub branches_path: String,
}

impl ProjectMergeTarget {
    /// Location of the named branch under this project
    pub fn branch_path(&self, branch: &str) -> String {
        format!("{}{branch}", self.branches_path)
    }
}

/// Merge classification for one project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeStatus {
    /// No qualifying branch commits
    Empty,
    /// Every qualifying branch commit is covered by a merge marker
    Merged,
    /// Branch has commits newer than the last merge (or was never merged)
    Pending,
}

impl MergeStatus {
    /// Label used in reports; `Empty` renders as an empty string
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Merged => "MERGED",
            Self::Pending => "PENDING",
        }
    }
}

impl std::fmt::Display for MergeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolved merge status of one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeStatusRecord {
    /// Project name
    pub project: String,
    /// Classification
    pub status: MergeStatus,
    /// Number of qualifying branch commits
    pub outstanding_commits: usize,
}

/// Outcome of resolving one project inside a batch
#[derive(Debug)]
pub enum ProjectOutcome {
    /// Resolution succeeded
    Resolved(MergeStatusRecord),
    /// Resolution failed; siblings are unaffected
    Failed {
        /// Project name
        project: String,
        /// Why it failed
        error: Error,
    },
}

impl ProjectOutcome {
    /// Project name for this outcome
    pub fn project(&self) -> &str {
        match self {
            Self::Resolved(record) => &record.project,
            Self::Failed { project, .. } => project,
        }
    }

    /// The record, if resolution succeeded
    pub const fn record(&self) -> Option<&MergeStatusRecord> {
        match self {
            Self::Resolved(record) => Some(record),
            Self::Failed { .. } => None,
        }
    }

    /// Check if this project failed to resolve
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// One row of the final report, in presentation shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// `""`, `"PENDING"`, `"MERGED"`, or `"ERROR"`
    pub status: String,
    /// Outstanding commit count (0 for failed rows)
    pub commits: usize,
    /// Project name
    pub project: String,
    /// Error message for failed rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ProjectOutcome> for ReportRow {
    fn from(outcome: &ProjectOutcome) -> Self {
        match outcome {
            ProjectOutcome::Resolved(record) => Self {
                status: record.status.label().to_string(),
                commits: record.outstanding_commits,
                project: record.project.clone(),
                error: None,
            },
            ProjectOutcome::Failed { project, error } => Self {
                status: "ERROR".to_string(),
                commits: 0,
                project: project.clone(),
                error: Some(error.to_string()),
            },
        }
    }
}

/// A configured set of projects reconciled together under one branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchGroup {
    /// Group name
    pub name: String,
    /// Member projects, in report order
    pub projects: Vec<String>,
}
