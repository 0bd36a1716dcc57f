//! In-memory log source for resolver and reconciler tests

#![allow(dead_code)]

use async_trait::async_trait;
use merge_status::error::{Error, Result};
use merge_status::types::{CommitLogEntry, DirEntry};
use merge_status::vcs::VersionControlLogSource;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Call record for `get_log`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetLogCall {
    pub path: String,
    pub limit: u32,
    pub stop_at_branch_creation: bool,
}

/// Simple mock log source for testing
///
/// Features:
/// - Canned log and listing responses per path
/// - Per-path delays to force out-of-order completion
/// - Error injection per path
/// - Call tracking for verification
///
/// Paths with no configured response behave as missing (`PathNotFound`).
#[derive(Default)]
pub struct MockLogSource {
    logs: Mutex<HashMap<String, Vec<CommitLogEntry>>>,
    children: Mutex<HashMap<String, Vec<DirEntry>>>,
    delays: Mutex<HashMap<String, Duration>>,
    // Error injection
    log_errors: Mutex<HashMap<String, (fn(String) -> Error, String)>>,
    // Call tracking
    get_log_calls: Mutex<Vec<GetLogCall>>,
    list_calls: Mutex<Vec<String>>,
    completed: Mutex<Vec<String>>,
}

impl MockLogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log returned for `path` (newest first)
    pub fn set_log(&self, path: &str, entries: Vec<CommitLogEntry>) {
        self.logs.lock().unwrap().insert(path.to_string(), entries);
    }

    /// Set the children listed for `path`
    pub fn set_children(&self, path: &str, names: &[&str]) {
        self.children.lock().unwrap().insert(
            path.to_string(),
            names
                .iter()
                .map(|n| DirEntry {
                    name: (*n).to_string(),
                })
                .collect(),
        );
    }

    /// Delay every call for `path`
    pub fn set_delay(&self, path: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(path.to_string(), delay);
    }

    /// Make `get_log` for `path` fail with a retrieval error
    pub fn fail_log(&self, path: &str, msg: &str) {
        self.fail_log_with(path, Error::LogRetrieval, msg);
    }

    /// Make `get_log` for `path` fail with `make(msg)`
    pub fn fail_log_with(&self, path: &str, make: fn(String) -> Error, msg: &str) {
        self.log_errors
            .lock()
            .unwrap()
            .insert(path.to_string(), (make, msg.to_string()));
    }

    // === Call verification methods ===

    /// Get all `get_log` calls
    pub fn get_log_calls(&self) -> Vec<GetLogCall> {
        self.get_log_calls.lock().unwrap().clone()
    }

    /// Get all paths `list_children` was called with
    pub fn get_list_calls(&self) -> Vec<String> {
        self.list_calls.lock().unwrap().clone()
    }

    /// Paths whose `get_log` call finished, in completion order
    pub fn completion_order(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }

    /// Assert that `get_log` was called for `path` with these flags
    pub fn assert_log_called(&self, path: &str, limit: u32, stop_at_branch_creation: bool) {
        let calls = self.get_log_calls();
        assert!(
            calls.iter().any(|c| c.path == path
                && c.limit == limit
                && c.stop_at_branch_creation == stop_at_branch_creation),
            "Expected get_log({path}, {limit}, {stop_at_branch_creation}) but got: {calls:?}"
        );
    }

    async fn wait(&self, path: &str) {
        let delay = self.delays.lock().unwrap().get(path).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl VersionControlLogSource for MockLogSource {
    async fn get_log(
        &self,
        path: &str,
        limit: u32,
        stop_at_branch_creation: bool,
    ) -> Result<Vec<CommitLogEntry>> {
        self.get_log_calls.lock().unwrap().push(GetLogCall {
            path: path.to_string(),
            limit,
            stop_at_branch_creation,
        });

        self.wait(path).await;
        self.completed.lock().unwrap().push(path.to_string());

        // Check for injected error
        if let Some((make, msg)) = self.log_errors.lock().unwrap().get(path) {
            return Err(make(msg.clone()));
        }

        let logs = self.logs.lock().unwrap();
        let entries = logs
            .get(path)
            .cloned()
            .ok_or_else(|| Error::PathNotFound(path.to_string()))?;

        if limit == 0 {
            Ok(entries)
        } else {
            Ok(entries.into_iter().take(limit as usize).collect())
        }
    }

    async fn list_children(&self, path: &str) -> Result<Vec<DirEntry>> {
        self.list_calls.lock().unwrap().push(path.to_string());
        self.wait(path).await;

        self.children
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| Error::PathNotFound(path.to_string()))
    }
}
