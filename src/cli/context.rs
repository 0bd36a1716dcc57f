//! Shared command context for CLI commands
//!
//! Extracts the setup every front-end needs: locate and load the
//! configuration, then build the log source.

use merge_status::config::{Config, find_config, load_config};
use merge_status::error::Result;
use merge_status::merge::{FailurePolicy, NoiseFilter, RunContext};
use merge_status::vcs::{SvnService, VersionControlLogSource};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Values shared by the status front-ends
#[derive(Debug, Clone, Default)]
pub struct StatusOptions {
    /// Count only this author's commits
    pub author: Option<String>,
    /// Override for the configured trunk log limit
    pub log_limit: Option<u32>,
    /// Abort on the first failing project
    pub fail_fast: bool,
}

/// Shared context for CLI commands that talk to the repository
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Log source (svn)
    pub source: Arc<dyn VersionControlLogSource>,
}

impl CommandContext {
    /// Load configuration and create the log source
    pub fn new(config: Option<&Path>, svn_binary: &str) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config_path = find_config(config, &cwd)?;
        debug!(path = %config_path.display(), "Loading configuration");
        let config = load_config(&config_path)?;

        Ok(Self {
            config,
            source: Arc::new(SvnService::new(svn_binary)),
        })
    }

    /// Build the per-run context from config defaults and CLI overrides
    pub fn run_context(
        &self,
        branch: &str,
        options: &StatusOptions,
        noise: NoiseFilter,
    ) -> Result<RunContext> {
        let policy = if options.fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::CollectPartial
        };

        Ok(RunContext::new(
            branch,
            options.log_limit.unwrap_or(self.config.merge.log_limit),
        )?
        .with_author(options.author.clone())
        .with_noise(self.config.noise_filter(noise))
        .with_failure_policy(policy))
    }
}
