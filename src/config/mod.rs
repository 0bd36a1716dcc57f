//! Configuration for merge status runs
//!
//! Describes the repository, per-project path overrides, and named branch
//! groups. Keys are snake_case; the camelCase keys of legacy `config.json`
//! files are accepted as aliases.

mod storage;

pub use storage::{CONFIG_FILE, LEGACY_CONFIG_FILE, find_config, load_config, parse_config};

use crate::error::{Error, Result};
use crate::merge::NoiseFilter;
use crate::types::{BranchGroup, ProjectMergeTarget};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use url::Url;

/// Default trunk location inside a project
pub const DEFAULT_TRUNK_PATH: &str = "trunk/";

/// Default branches location inside a project
pub const DEFAULT_BRANCHES_PATH: &str = "branches/";

/// Default number of trunk log entries scanned for a merge marker
pub const DEFAULT_LOG_LIMIT: u32 = 1000;

/// Repository-wide path layout and limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSettings {
    /// Trunk location relative to a project
    #[serde(default = "default_trunk_path", alias = "trunkUri")]
    pub trunk_path: String,
    /// Branches location relative to a project
    #[serde(default = "default_branches_path", alias = "branchesUri")]
    pub branches_path: String,
    /// Trunk log entries scanned for a merge marker
    #[serde(default = "default_log_limit", alias = "logLimit")]
    pub log_limit: u32,
}

fn default_trunk_path() -> String {
    DEFAULT_TRUNK_PATH.to_string()
}

fn default_branches_path() -> String {
    DEFAULT_BRANCHES_PATH.to_string()
}

const fn default_log_limit() -> u32 {
    DEFAULT_LOG_LIMIT
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            trunk_path: default_trunk_path(),
            branches_path: default_branches_path(),
            log_limit: DEFAULT_LOG_LIMIT,
        }
    }
}

/// A project with its location and optional trunk override
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Name used in reports and branch groups
    pub name: String,
    /// Location relative to the repository root (default `<name>/`)
    #[serde(default, alias = "projectUri", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Trunk location relative to the project, overriding the default
    #[serde(default, alias = "trunkUri", skip_serializing_if = "Option::is_none")]
    pub trunk_path: Option<String>,
}

/// Top-level configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// URL of the repository root that contains all projects
    #[serde(alias = "svnRepos")]
    pub repository_root: String,
    /// Path layout and limits
    #[serde(default, alias = "mergeConfig")]
    pub merge: MergeSettings,
    /// Known projects
    #[serde(default, alias = "mergeProjects")]
    pub projects: Vec<ProjectConfig>,
    /// Named project groups
    #[serde(default, alias = "mergeBranchGroups")]
    pub branch_groups: Vec<BranchGroup>,
    /// Extra commit message substrings to treat as noise
    #[serde(default, alias = "noisePatterns")]
    pub noise_patterns: Vec<String>,
}

/// Ensure a path fragment ends with exactly one `/`
fn with_trailing_slash(path: &str) -> String {
    format!("{}/", path.trim_end_matches('/'))
}

fn first_duplicate<'a>(mut names: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    names.find(|name| !seen.insert(*name))
}

impl Config {
    /// Normalize paths and reject inconsistent settings
    pub fn validate(mut self) -> Result<Self> {
        let root = self.repository_root.trim().to_string();
        if root.is_empty() {
            return Err(Error::Config("repository_root is empty".to_string()));
        }
        Url::parse(&root)
            .map_err(|e| Error::Config(format!("repository_root '{root}' is not a URL: {e}")))?;
        self.repository_root = with_trailing_slash(&root);

        if self.merge.log_limit == 0 {
            return Err(Error::Config("merge.log_limit must be positive".to_string()));
        }
        self.merge.trunk_path = with_trailing_slash(&self.merge.trunk_path);
        self.merge.branches_path = with_trailing_slash(&self.merge.branches_path);

        if let Some(name) = first_duplicate(self.projects.iter().map(|p| p.name.as_str())) {
            return Err(Error::Config(format!("project '{name}' is configured twice")));
        }
        if let Some(name) = first_duplicate(self.branch_groups.iter().map(|g| g.name.as_str())) {
            return Err(Error::Config(format!(
                "branch group '{name}' is configured twice"
            )));
        }

        Ok(self)
    }

    /// Resolve the concrete locations for a project
    ///
    /// Projects absent from the configuration get the default layout.
    pub fn target_for(&self, name: &str) -> ProjectMergeTarget {
        let project = self.projects.iter().find(|p| p.name == name);

        let project_path = project
            .and_then(|p| p.path.as_deref())
            .map_or_else(|| format!("{name}/"), with_trailing_slash);
        let trunk = project
            .and_then(|p| p.trunk_path.as_deref())
            .map_or_else(|| self.merge.trunk_path.clone(), with_trailing_slash);

        let base = format!("{}{project_path}", self.repository_root);
        ProjectMergeTarget {
            project: name.to_string(),
            trunk_path: format!("{base}{trunk}"),
            branches_path: format!("{base}{}", self.merge.branches_path),
        }
    }

    /// Targets for every configured project, keyed by name
    pub fn registry(&self) -> HashMap<String, ProjectMergeTarget> {
        self.projects
            .iter()
            .map(|p| (p.name.clone(), self.target_for(&p.name)))
            .collect()
    }

    /// Find a branch group by exact name
    pub fn branch_group(&self, name: &str) -> Result<&BranchGroup> {
        self.branch_groups
            .iter()
            .find(|g| g.name == name)
            .ok_or_else(|| Error::UnknownBranchGroup(name.to_string()))
    }

    /// Build a noise filter from `base` plus the configured extras
    pub fn noise_filter(&self, mut base: NoiseFilter) -> NoiseFilter {
        base.extend(self.noise_patterns.iter().cloned());
        base
    }
}
