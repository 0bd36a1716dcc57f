//! Merge reconciliation engine
//!
//! Three layers, pure to effectful:
//! 1. Filter + marker - pure functions over fetched logs
//! 2. Resolve - one project: fetch trunk and branch logs, classify
//! 3. Reconcile - many projects concurrently, report in declared order

mod context;
mod filter;
mod marker;
mod reconcile;
mod resolve;

pub use context::{FailurePolicy, RunContext};
pub use filter::{NoiseFilter, SCAFFOLDING_NOISE, STANDARD_NOISE, filter_log};
pub use marker::{announces_merge, find_marker, parse_merge_revision};
pub use reconcile::{
    NoProgress, ProgressCallback, group_targets, reconcile_group, reconcile_targets,
};
pub use resolve::{classify, resolve_from_logs, resolve_project};
