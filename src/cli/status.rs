//! Status commands - configured group, whole repository, single project

use crate::cli::CliProgress;
use crate::cli::context::{CommandContext, StatusOptions};
use crate::cli::report::{OutputFormat, format_elapsed, print_report};
use crate::cli::style::{Stylize, check};
use anstream::println;
use merge_status::discovery::list_branched_projects;
use merge_status::error::Result;
use merge_status::merge::{
    NoiseFilter, RunContext, reconcile_group, reconcile_targets, resolve_project,
};
use merge_status::types::{ProjectMergeTarget, ProjectOutcome};
use std::sync::Arc;
use std::time::Instant;

/// Print the run header (table output only)
fn print_header(run: &RunContext, format: OutputFormat) {
    if format == OutputFormat::Json {
        return;
    }

    println!(
        "Checking merge status on branch {} back to TRUNK...",
        run.target_branch.accent()
    );
    if let Some(ref author) = run.author {
        println!("Filtering by author: {}", author.accent());
    }
}

/// Reconcile targets with a spinner, then print the report
async fn reconcile_and_report(
    ctx: &CommandContext,
    targets: Vec<ProjectMergeTarget>,
    run: &RunContext,
    format: OutputFormat,
    started: Instant,
) -> Result<()> {
    let progress = CliProgress::start(targets.len());
    let outcomes = reconcile_targets(targets, run, Arc::clone(&ctx.source), &progress).await;
    progress.finish();

    finish_report(&outcomes?, format, started)
}

fn finish_report(outcomes: &[ProjectOutcome], format: OutputFormat, started: Instant) -> Result<()> {
    print_report(outcomes, format)?;
    if format == OutputFormat::Table {
        println!("{} {}", check(), format_elapsed(started.elapsed()).muted());
    }
    Ok(())
}

/// Run the group command
///
/// The group name defaults to the branch name.
pub async fn run_group(
    ctx: &CommandContext,
    branch: &str,
    group: Option<&str>,
    options: &StatusOptions,
    format: OutputFormat,
) -> Result<()> {
    let group = ctx.config.branch_group(group.unwrap_or(branch))?;
    let run = ctx.run_context(branch, options, NoiseFilter::standard())?;
    let registry = ctx.config.registry();

    print_header(&run, format);
    let started = Instant::now();

    let progress = CliProgress::start(group.projects.len());
    let outcomes = reconcile_group(group, &registry, &run, Arc::clone(&ctx.source), &progress).await;
    progress.finish();

    finish_report(&outcomes?, format, started)
}

/// Run the repo command - every project in the repository with the branch
pub async fn run_repo(
    ctx: &CommandContext,
    branch: &str,
    options: &StatusOptions,
    format: OutputFormat,
) -> Result<()> {
    let run = ctx.run_context(branch, options, NoiseFilter::with_scaffolding())?;
    let started = Instant::now();

    if format == OutputFormat::Table {
        println!("{}", "Generating list of all projects...".muted());
    }
    let projects = list_branched_projects(
        Arc::clone(&ctx.source),
        &ctx.config.repository_root,
        &ctx.config.merge.branches_path,
        branch,
    )
    .await?;

    if projects.is_empty() {
        if format == OutputFormat::Table {
            println!("{}", format!("No projects contain a {branch} branch.").muted());
        } else {
            print_report(&[], format)?;
        }
        return Ok(());
    }

    let targets = projects
        .iter()
        .map(|name| ctx.config.target_for(name))
        .collect();

    print_header(&run, format);
    reconcile_and_report(ctx, targets, &run, format, started).await
}

/// Run the project command - one project, errors abort
pub async fn run_project(
    ctx: &CommandContext,
    branch: &str,
    project: &str,
    options: &StatusOptions,
    format: OutputFormat,
) -> Result<()> {
    let run = ctx.run_context(branch, options, NoiseFilter::standard())?;
    let target = ctx.config.target_for(project);

    print_header(&run, format);
    let started = Instant::now();

    let record = resolve_project(&target, &run, ctx.source.as_ref()).await?;
    finish_report(&[ProjectOutcome::Resolved(record)], format, started)
}
