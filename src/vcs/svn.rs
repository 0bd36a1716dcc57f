//! Subversion log source backed by the `svn` command-line client

use crate::error::{Error, Result};
use crate::types::{CommitLogEntry, DirEntry};
use crate::vcs::VersionControlLogSource;
use crate::vcs::parse::{parse_list_output, parse_log_output};
use async_trait::async_trait;
use std::process::Output;
use tokio::process::Command;
use tracing::debug;

/// Error codes and phrases `svn` uses for a path that does not exist
const NOT_FOUND_MARKERS: &[&str] = &[
    "E160013",
    "E200009",
    "W160013",
    "non-existent",
    "path not found",
];

/// Log source that shells out to `svn`
#[derive(Debug, Clone)]
pub struct SvnService {
    binary: String,
}

impl Default for SvnService {
    fn default() -> Self {
        Self::new("svn")
    }
}

impl SvnService {
    /// Create a service using the given `svn` executable
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Build the `svn` invocation; output is parsed as text, so the locale is pinned
    fn command(&self, args: &[String], path: &str) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args)
            .arg(path)
            .env("LC_ALL", "C")
            .env("LANGUAGE", "C")
            .kill_on_drop(true);
        cmd
    }

    async fn run(&self, args: &[String], path: &str) -> Result<String> {
        debug!(binary = %self.binary, ?args, path, "Running svn");

        let output = self
            .command(args, path)
            .output()
            .await
            .map_err(|e| Error::LogRetrieval(format!("failed to run {}: {e}", self.binary)))?;

        check_output(&output, path)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Map a finished `svn` process to the error taxonomy
fn check_output(output: &Output, path: &str) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if NOT_FOUND_MARKERS.iter().any(|m| stderr.contains(m)) {
        return Err(Error::PathNotFound(path.to_string()));
    }

    Err(Error::LogRetrieval(format!(
        "svn exited with {} for {path}: {}",
        output.status.code().unwrap_or(-1),
        stderr.trim()
    )))
}

/// Build the argument list for `svn log`
fn log_args(limit: u32, stop_at_branch_creation: bool) -> Vec<String> {
    let mut args = vec!["log".to_string(), "--non-interactive".to_string()];
    if limit > 0 {
        args.push("--limit".to_string());
        args.push(limit.to_string());
    }
    if stop_at_branch_creation {
        args.push("--stop-on-copy".to_string());
    }
    args
}

#[async_trait]
impl VersionControlLogSource for SvnService {
    async fn get_log(
        &self,
        path: &str,
        limit: u32,
        stop_at_branch_creation: bool,
    ) -> Result<Vec<CommitLogEntry>> {
        let stdout = self
            .run(&log_args(limit, stop_at_branch_creation), path)
            .await?;
        let entries = parse_log_output(&stdout)?;
        debug!(path, count = entries.len(), "Fetched log");
        Ok(entries)
    }

    async fn list_children(&self, path: &str) -> Result<Vec<DirEntry>> {
        let args = vec!["list".to_string(), "--non-interactive".to_string()];
        let stdout = self.run(&args, path).await?;
        Ok(parse_list_output(&stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_log_args_bounded_stop_on_copy() {
        assert_eq!(
            log_args(1000, true),
            vec!["log", "--non-interactive", "--limit", "1000", "--stop-on-copy"]
        );
    }

    #[test]
    fn test_log_args_unbounded() {
        assert_eq!(log_args(0, false), vec!["log", "--non-interactive"]);
    }

    #[test]
    fn test_command_pins_c_locale() {
        let svn = SvnService::default();
        let cmd = svn.command(&log_args(10, false), "svn://repo/trunk/");
        let envs: Vec<_> = cmd.as_std().get_envs().collect();

        assert!(envs.contains(&(OsStr::new("LC_ALL"), Some(OsStr::new("C")))));
        assert!(envs.contains(&(OsStr::new("LANGUAGE"), Some(OsStr::new("C")))));
    }

    #[tokio::test]
    async fn test_missing_binary_is_retrieval_error() {
        let svn = SvnService::new("definitely-not-an-svn-binary-3f9a");
        let result = svn.get_log("file:///tmp/repo/trunk", 10, false).await;
        match result {
            Err(e @ Error::LogRetrieval(_)) => assert!(e.is_retryable()),
            other => panic!("Expected LogRetrieval error, got: {other:?}"),
        }
    }
}
