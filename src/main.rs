//! merge-status CLI

mod cli;

use clap::{Args, Parser, Subcommand};
use cli::context::{CommandContext, StatusOptions};
use cli::report::OutputFormat;
use cli::style::Stylize;
use merge_status::error::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "merge-status")]
#[command(version)]
#[command(about = "Check whether branch work has been merged back to trunk")]
struct Cli {
    /// Path to configuration file (default: ./merge-status.toml or ./config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Subversion client executable
    #[arg(long, global = true, default_value = "svn")]
    svn: String,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
struct FilterArgs {
    /// Count only commits by this author
    #[arg(short, long)]
    author: Option<String>,

    /// Number of trunk log commits to scan for merges
    #[arg(short = 'l', long = "log", value_parser = clap::value_parser!(u32).range(1..))]
    log_limit: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge status of a configured branch group
    Group {
        /// Branch to check
        branch: String,

        /// Branch group name (defaults to the branch name)
        #[arg(short, long)]
        group: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Stop at the first failing project
        #[arg(long)]
        fail_fast: bool,
    },

    /// Merge status of every repository project that has the branch
    Repo {
        /// Branch to check
        branch: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Stop at the first failing project
        #[arg(long)]
        fail_fast: bool,
    },

    /// Merge status of a single project
    Project {
        /// Branch to check
        branch: String,

        /// Project name
        project: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List repository projects containing the branch
    List {
        /// Branch to look for
        branch: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "merge_status=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn status_options(filters: FilterArgs, fail_fast: bool) -> StatusOptions {
    StatusOptions {
        author: filters.author,
        log_limit: filters.log_limit,
        fail_fast,
    }
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = CommandContext::new(cli.config.as_deref(), &cli.svn)?;
    let format = cli.format;

    match cli.command {
        Commands::Group {
            branch,
            group,
            filters,
            fail_fast,
        } => {
            let options = status_options(filters, fail_fast);
            cli::status::run_group(&ctx, &branch, group.as_deref(), &options, format).await
        }
        Commands::Repo {
            branch,
            filters,
            fail_fast,
        } => {
            let options = status_options(filters, fail_fast);
            cli::status::run_repo(&ctx, &branch, &options, format).await
        }
        Commands::Project {
            branch,
            project,
            filters,
        } => {
            let options = status_options(filters, true);
            cli::status::run_project(&ctx, &branch, &project, &options, format).await
        }
        Commands::List { branch } => cli::list::run_list(&ctx, &branch, format).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {e}", "Error:".error());
        std::process::exit(1);
    }
}
