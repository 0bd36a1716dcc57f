//! Project discovery - which projects carry a given branch
//!
//! Probes are independent reads, so they run concurrently. Results keep the
//! order of the candidate list.

use crate::error::{Error, Result};
use crate::vcs::VersionControlLogSource;
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::debug;

/// Keep only the candidates for which `probe` returns true
///
/// The first probe error aborts discovery and cancels the remaining probes.
pub async fn discover_branched_projects<F, Fut>(candidates: Vec<String>, probe: F) -> Result<Vec<String>>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<bool>> + Send + 'static,
{
    let total = candidates.len();
    let mut tasks = JoinSet::new();

    for (index, name) in candidates.into_iter().enumerate() {
        let check = probe(name.clone());
        tasks.spawn(async move { (index, name, check.await) });
    }

    let mut keep: Vec<Option<String>> = std::iter::repeat_with(|| None).take(total).collect();
    while let Some(joined) = tasks.join_next().await {
        let (index, name, result) =
            joined.map_err(|e| Error::Internal(format!("discovery task failed: {e}")))?;
        if result? {
            keep[index] = Some(name);
        }
    }

    Ok(keep.into_iter().flatten().collect())
}

/// Check that `project` has a branches directory containing `branch`
///
/// `repository_root` and `branches_path` must end with `/`. The first
/// segment of `branches_path` is probed before the branch itself, so
/// projects without any branches cost a single listing.
pub async fn project_has_branch(
    source: &dyn VersionControlLogSource,
    repository_root: &str,
    branches_path: &str,
    project: &str,
    branch: &str,
) -> Result<bool> {
    let project_root = format!("{repository_root}{project}/");
    let branches_dir = branches_path.split('/').next().unwrap_or_default();
    if !source.has_child(&project_root, branches_dir).await? {
        debug!(project, "No branches directory");
        return Ok(false);
    }

    let found = source
        .has_child(&format!("{project_root}{branches_path}"), branch)
        .await?;
    debug!(project, branch, found, "Probed branch");
    Ok(found)
}

/// List every project in the repository that has `branch`
///
/// `branches_path` is the per-project branches location (e.g. `branches/`).
pub async fn list_branched_projects(
    source: Arc<dyn VersionControlLogSource>,
    repository_root: &str,
    branches_path: &str,
    branch: &str,
) -> Result<Vec<String>> {
    let candidates: Vec<String> = source
        .list_children(repository_root)
        .await?
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    debug!(count = candidates.len(), "Listed repository projects");

    let root = repository_root.to_string();
    let branches = branches_path.to_string();
    let branch = branch.to_string();

    discover_branched_projects(candidates, move |project| {
        let source = Arc::clone(&source);
        let root = root.clone();
        let branches = branches.clone();
        let branch = branch.clone();
        async move { project_has_branch(source.as_ref(), &root, &branches, &project, &branch).await }
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_discover_keeps_input_order() {
        let candidates = vec!["slow".to_string(), "skip".to_string(), "fast".to_string()];

        let kept = discover_branched_projects(candidates, |name| async move {
            if name == "slow" {
                tokio::time::sleep(Duration::from_millis(30)).await;
            }
            Ok(name != "skip")
        })
        .await
        .unwrap();

        assert_eq!(kept, vec!["slow", "fast"]);
    }

    #[tokio::test]
    async fn test_discover_propagates_probe_error() {
        let candidates = vec!["a".to_string(), "b".to_string()];

        let result = discover_branched_projects(candidates, |name| async move {
            if name == "b" {
                Err(Error::LogRetrieval("timeout".to_string()))
            } else {
                Ok(true)
            }
        })
        .await;

        assert!(matches!(result, Err(Error::LogRetrieval(_))));
    }

    #[tokio::test]
    async fn test_discover_empty_candidates() {
        let kept = discover_branched_projects(Vec::new(), |_| async { Ok(true) })
            .await
            .unwrap();
        assert!(kept.is_empty());
    }
}
