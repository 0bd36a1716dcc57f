//! List command - projects in the repository that carry a branch

use crate::cli::context::CommandContext;
use crate::cli::report::{OutputFormat, format_elapsed, print_projects};
use crate::cli::style::{Stylize, check};
use anstream::println;
use merge_status::discovery::list_branched_projects;
use merge_status::error::{Error, Result};
use std::sync::Arc;
use std::time::Instant;

/// Run the list command
pub async fn run_list(ctx: &CommandContext, branch: &str, format: OutputFormat) -> Result<()> {
    if branch.trim().is_empty() {
        return Err(Error::InvalidArgument(
            "target branch must not be empty".to_string(),
        ));
    }

    if format == OutputFormat::Table {
        println!(
            "Filtering list to projects containing a {} branch...",
            branch.accent()
        );
    }
    let started = Instant::now();

    let projects = list_branched_projects(
        Arc::clone(&ctx.source),
        &ctx.config.repository_root,
        &ctx.config.merge.branches_path,
        branch,
    )
    .await?;

    print_projects(&projects, format)?;
    if format == OutputFormat::Table {
        println!("{} {}", check(), format_elapsed(started.elapsed()).muted());
    }
    Ok(())
}
