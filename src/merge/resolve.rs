//! Merge status resolution for a single project
//!
//! `classify` is the pure decision; `resolve_project` gathers the two logs
//! and feeds them through the filter, the marker parser, and `classify`.

use crate::error::{Error, Result};
use crate::merge::context::RunContext;
use crate::merge::filter::filter_log;
use crate::merge::marker::find_marker;
use crate::types::{CommitLogEntry, MergeMarker, MergeStatus, MergeStatusRecord, ProjectMergeTarget};
use crate::vcs::VersionControlLogSource;
use tracing::debug;

/// Classify filtered branch history against the trunk's merge marker
///
/// `remaining` must be newest first. Only the newest remaining revision is
/// compared; revisions are assumed globally ordered across trunk and branch.
pub fn classify(marker: Option<MergeMarker>, remaining: &[CommitLogEntry]) -> MergeStatus {
    let Some(newest) = remaining.first() else {
        return MergeStatus::Empty;
    };

    match marker {
        None => MergeStatus::Pending,
        Some(m) if newest.revision > m.source_revision => MergeStatus::Pending,
        Some(_) => MergeStatus::Merged,
    }
}

/// Build a status record from already-fetched logs (PURE)
pub fn resolve_from_logs(
    project: &str,
    trunk: &[CommitLogEntry],
    branch: &[CommitLogEntry],
    ctx: &RunContext,
) -> Result<MergeStatusRecord> {
    let marker = find_marker(trunk, &ctx.target_branch)?;
    let remaining = filter_log(branch, &ctx.noise, ctx.author.as_deref());
    let status = classify(marker, &remaining);

    debug!(
        project,
        marker = ?marker.map(|m| m.source_revision),
        newest = ?remaining.first().map(|e| e.revision),
        outstanding = remaining.len(),
        %status,
        "Classified project"
    );

    Ok(MergeStatusRecord {
        project: project.to_string(),
        status,
        outstanding_commits: remaining.len(),
    })
}

/// Resolve one project's merge status (EFFECTFUL)
///
/// Fetches the trunk log bounded by the context's limit, then the branch log
/// back to the branch's creation. A branch with no history at all is
/// `Error::BranchNotFound`, distinct from one whose commits are all noise.
pub async fn resolve_project(
    target: &ProjectMergeTarget,
    ctx: &RunContext,
    source: &dyn VersionControlLogSource,
) -> Result<MergeStatusRecord> {
    let trunk = source.get_log(&target.trunk_path, ctx.log_limit, false).await?;

    let branch_path = target.branch_path(&ctx.target_branch);
    let branch = source.get_log(&branch_path, 0, true).await?;
    if branch.is_empty() {
        return Err(Error::BranchNotFound(branch_path));
    }

    resolve_from_logs(&target.project, &trunk, &branch, ctx)
}
