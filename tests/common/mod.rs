//! Shared test fixtures

#![allow(dead_code)]

mod mock_log_source;

pub use mock_log_source::{GetLogCall, MockLogSource};

use merge_status::types::{CommitLogEntry, ProjectMergeTarget};

/// Repository root used by fixtures
pub const ROOT: &str = "svn://svn.test/repos/";

/// A log entry by `author`
pub fn commit(revision: u64, author: &str, message: &str) -> CommitLogEntry {
    CommitLogEntry::new(revision, author, message)
}

/// Build a newest-first log from `(revision, author, message)` tuples
pub fn make_log(entries: &[(u64, &str, &str)]) -> Vec<CommitLogEntry> {
    entries
        .iter()
        .map(|(rev, author, msg)| commit(*rev, author, msg))
        .collect()
}

/// Target with the default `trunk/` + `branches/` layout under [`ROOT`]
pub fn make_target(project: &str) -> ProjectMergeTarget {
    ProjectMergeTarget {
        project: project.to_string(),
        trunk_path: format!("{ROOT}{project}/trunk/"),
        branches_path: format!("{ROOT}{project}/branches/"),
    }
}

/// Seed `source` with a project's trunk and branch logs
pub fn seed_project(
    source: &MockLogSource,
    target: &ProjectMergeTarget,
    branch: &str,
    trunk: Vec<CommitLogEntry>,
    branch_log: Vec<CommitLogEntry>,
) {
    source.set_log(&target.trunk_path, trunk);
    source.set_log(&target.branch_path(branch), branch_log);
}
