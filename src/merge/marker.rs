//! Merge marker detection in trunk history
//!
//! A merge into trunk is announced by a commit whose first line reads
//! `MERGE <rev>[-<rev>] ... <branch>`. The marker records the newest branch
//! revision that trunk has incorporated.

use crate::error::{Error, Result};
use crate::types::{CommitLogEntry, MergeMarker};
use regex::Regex;
use std::sync::LazyLock;

static REVISION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^MERGE (\d+)(?:-(\d+))?").expect("valid revision regex"));

/// Check if a message announces a merge of `branch`
///
/// The first line must begin with `MERGE` and mention the branch somewhere
/// after it. Matching is case-sensitive.
pub fn announces_merge(message: &str, branch: &str) -> bool {
    message
        .lines()
        .next()
        .and_then(|first| first.strip_prefix("MERGE"))
        .is_some_and(|rest| rest.contains(branch))
}

/// Extract the merged revision from a merge announcement
///
/// For a range (`MERGE 115-130`) the upper bound is returned.
pub fn parse_merge_revision(message: &str) -> Result<u64> {
    let malformed = || Error::MergeMarkerParse {
        message: message.to_string(),
    };

    let caps = REVISION.captures(message).ok_or_else(malformed)?;
    let digits = caps.get(2).or_else(|| caps.get(1)).ok_or_else(malformed)?;
    digits.as_str().parse::<u64>().map_err(|_| malformed())
}

/// Find the most recent merge marker for `branch`
///
/// Scans in the given order (newest first) and stops at the first
/// announcement. A matching announcement without a revision is an error,
/// never "no marker".
pub fn find_marker(trunk: &[CommitLogEntry], branch: &str) -> Result<Option<MergeMarker>> {
    let Some(entry) = trunk.iter().find(|e| announces_merge(&e.message, branch)) else {
        return Ok(None);
    };

    let source_revision = parse_merge_revision(&entry.message)?;
    Ok(Some(MergeMarker { source_revision }))
}
