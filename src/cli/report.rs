//! Report rendering - table and JSON

use crate::cli::style::Stylize;
use anstream::println;
use clap::ValueEnum;
use merge_status::error::{Error, Result};
use merge_status::types::{ProjectOutcome, ReportRow};
use std::time::Duration;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned console table
    #[default]
    Table,
    /// JSON array on stdout
    Json,
}

/// Format one table row; the status column is padded before styling
fn format_row(row: &ReportRow) -> String {
    let status = format!("{:>7}", row.status);
    let status = match row.status.as_str() {
        "PENDING" => status.warn(),
        "MERGED" => status.success(),
        "ERROR" => status.error(),
        _ => status,
    };

    let mut line = format!("{status}  {:>7}  {}", row.commits, row.project);
    if let Some(ref error) = row.error {
        line.push_str(&format!("  {}", error.muted()));
    }
    line
}

/// Print the final report in the requested format
pub fn print_report(outcomes: &[ProjectOutcome], format: OutputFormat) -> Result<()> {
    let rows: Vec<ReportRow> = outcomes.iter().map(ReportRow::from).collect();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rows)
                .map_err(|e| Error::Internal(format!("failed to serialize report: {e}")))?;
            println!("{json}");
        }
        OutputFormat::Table => {
            println!();
            println!("{}", "Status   Commits  Project".emphasis());
            println!("-------  -------  -------------------------------");
            for row in &rows {
                println!("{}", format_row(row));
            }
            println!();
        }
    }

    Ok(())
}

/// Print a plain list of project names
pub fn print_projects(projects: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(projects)
                .map_err(|e| Error::Internal(format!("failed to serialize project list: {e}")))?;
            println!("{json}");
        }
        OutputFormat::Table => {
            println!();
            println!("{}", "Project".emphasis());
            println!("-------------------------------");
            for project in projects {
                println!("{project}");
            }
            println!();
        }
    }

    Ok(())
}

/// Human-readable elapsed time, whole minutes and seconds
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!(
        "Merge status check complete in {} minutes and {} seconds.",
        total / 60,
        total % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(
            format_elapsed(Duration::from_secs(125)),
            "Merge status check complete in 2 minutes and 5 seconds."
        );
        assert_eq!(
            format_elapsed(Duration::from_millis(900)),
            "Merge status check complete in 0 minutes and 0 seconds."
        );
    }

    #[test]
    fn test_format_row_empty_status_is_blank_column() {
        let row = ReportRow {
            status: String::new(),
            commits: 0,
            project: "Billing".to_string(),
            error: None,
        };
        assert_eq!(format_row(&row), "               0  Billing");
    }
}
