//! merge-status - has a branch been merged back to trunk?
//!
//! Compares each project's trunk history against its branch history. A trunk
//! commit starting with `MERGE <rev>` records which branch revision trunk has
//! absorbed; branch commits newer than that revision (minus administrative
//! noise) are outstanding.
//!
//! The engine only sees history through [`vcs::VersionControlLogSource`];
//! [`vcs::SvnService`] is the Subversion implementation.

pub mod config;
pub mod discovery;
pub mod error;
pub mod merge;
pub mod types;
pub mod vcs;

pub use error::{Error, Result};
