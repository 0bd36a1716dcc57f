//! CLI front-ends
//!
//! Each front-end differs only in how it builds the project list; all of
//! them hand off to the same resolver and reconciler.

pub mod context;
pub mod list;
pub mod report;
pub mod status;
pub mod style;

use indicatif::ProgressBar;
use merge_status::merge::ProgressCallback;
use merge_status::types::ProjectOutcome;
use std::time::Duration;
use style::spinner_style;

/// Spinner-backed progress reporting on stderr
pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    /// Start a spinner for `total` projects
    pub fn start(total: usize) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(spinner_style());
        bar.set_message(format!("Resolving {total} project(s)..."));
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Remove the spinner
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_resolved(&self, outcome: &ProjectOutcome, done: usize, total: usize) {
        self.bar
            .set_message(format!("[{done}/{total}] {}", outcome.project()));
    }
}
