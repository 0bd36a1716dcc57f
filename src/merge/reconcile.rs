//! Branch group reconciliation - concurrent fan-out over projects
//!
//! Every project resolves on its own task. Results land in a slot per input
//! index, so the report follows the declared project order no matter which
//! resolution finishes first.

use crate::error::{Error, Result};
use crate::merge::context::{FailurePolicy, RunContext};
use crate::merge::resolve::resolve_project;
use crate::types::{BranchGroup, ProjectMergeTarget, ProjectOutcome};
use crate::vcs::VersionControlLogSource;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Progress notifications while a batch resolves
pub trait ProgressCallback: Send + Sync {
    /// Called once per project as soon as its resolution finishes
    fn on_resolved(&self, outcome: &ProjectOutcome, done: usize, total: usize);
}

/// Progress callback that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_resolved(&self, _outcome: &ProjectOutcome, _done: usize, _total: usize) {}
}

/// Look up every project of a group in the registry
///
/// Fails on the first name the registry does not know; nothing is resolved
/// in that case.
pub fn group_targets<S: BuildHasher>(
    group: &BranchGroup,
    registry: &HashMap<String, ProjectMergeTarget, S>,
) -> Result<Vec<ProjectMergeTarget>> {
    group
        .projects
        .iter()
        .map(|name| {
            registry
                .get(name)
                .cloned()
                .ok_or_else(|| Error::UnknownProject(name.clone()))
        })
        .collect()
}

/// Resolve a configured branch group
pub async fn reconcile_group<S: BuildHasher>(
    group: &BranchGroup,
    registry: &HashMap<String, ProjectMergeTarget, S>,
    ctx: &RunContext,
    source: Arc<dyn VersionControlLogSource>,
    progress: &dyn ProgressCallback,
) -> Result<Vec<ProjectOutcome>> {
    let targets = group_targets(group, registry)?;
    debug!(group = %group.name, projects = targets.len(), "Reconciling branch group");
    reconcile_targets(targets, ctx, source, progress).await
}

/// Resolve many projects concurrently, preserving input order
///
/// Under `FailurePolicy::CollectPartial` a failing project becomes a
/// `ProjectOutcome::Failed` and its siblings run to completion. Under
/// `FailurePolicy::FailFast` the first failure is returned and every
/// in-flight resolution is aborted. Errors that are not project-scoped
/// abort the batch under either policy.
pub async fn reconcile_targets(
    targets: Vec<ProjectMergeTarget>,
    ctx: &RunContext,
    source: Arc<dyn VersionControlLogSource>,
    progress: &dyn ProgressCallback,
) -> Result<Vec<ProjectOutcome>> {
    let total = targets.len();
    let shared_ctx = Arc::new(ctx.clone());
    let mut tasks = JoinSet::new();

    for (index, target) in targets.into_iter().enumerate() {
        let ctx = Arc::clone(&shared_ctx);
        let source = Arc::clone(&source);
        tasks.spawn(async move {
            let result = resolve_project(&target, &ctx, source.as_ref()).await;
            (index, target.project, result)
        });
    }

    let mut slots: Vec<Option<ProjectOutcome>> = std::iter::repeat_with(|| None).take(total).collect();
    let mut done = 0;

    while let Some(joined) = tasks.join_next().await {
        let (index, project, result) =
            joined.map_err(|e| Error::Internal(format!("resolution task failed: {e}")))?;

        let outcome = match result {
            Ok(record) => ProjectOutcome::Resolved(record),
            Err(error)
                if ctx.failure_policy == FailurePolicy::FailFast || !error.is_project_scoped() =>
            {
                warn!(%project, %error, "Aborting batch");
                tasks.abort_all();
                return Err(error);
            }
            Err(error) => {
                warn!(%project, %error, "Project resolution failed");
                ProjectOutcome::Failed { project, error }
            }
        };

        done += 1;
        progress.on_resolved(&outcome, done, total);
        slots[index] = Some(outcome);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(i, slot)| slot.ok_or_else(|| Error::Internal(format!("no result for project #{i}"))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(name: &str) -> ProjectMergeTarget {
        ProjectMergeTarget {
            project: name.to_string(),
            trunk_path: format!("svn://repo/{name}/trunk/"),
            branches_path: format!("svn://repo/{name}/branches/"),
        }
    }

    #[test]
    fn test_group_targets_preserves_group_order() {
        let registry: HashMap<String, ProjectMergeTarget> = ["A", "B", "C"]
            .iter()
            .map(|n| ((*n).to_string(), target(n)))
            .collect();
        let group = BranchGroup {
            name: "release-1".to_string(),
            projects: vec!["C".to_string(), "A".to_string()],
        };

        let targets = group_targets(&group, &registry).unwrap();
        let names: Vec<&str> = targets.iter().map(|t| t.project.as_str()).collect();
        assert_eq!(names, vec!["C", "A"]);
    }

    #[test]
    fn test_group_targets_unknown_project() {
        let registry: HashMap<String, ProjectMergeTarget> =
            std::iter::once(("A".to_string(), target("A"))).collect();
        let group = BranchGroup {
            name: "release-1".to_string(),
            projects: vec!["A".to_string(), "a".to_string()],
        };

        match group_targets(&group, &registry) {
            Err(Error::UnknownProject(name)) => assert_eq!(name, "a"),
            other => panic!("Expected UnknownProject error, got: {other:?}"),
        }
    }
}
