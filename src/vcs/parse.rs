//! Parsers for `svn log` and `svn list` text output

use crate::error::{Error, Result};
use crate::types::{CommitLogEntry, DirEntry};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// `r1234 | author | 2016-03-01 10:20:30 -0500 (Tue, 01 Mar 2016) | 2 lines`
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^r(\d+) \| (.*?) \| (.*?) \| (\d+) lines?$").expect("valid header regex")
});

fn is_separator(line: &str) -> bool {
    line.len() >= 20 && line.bytes().all(|b| b == b'-')
}

/// Parse the leading ISO portion of an svn date column
///
/// Returns `None` for `(no date)` or anything unparseable; a missing
/// timestamp never invalidates the entry.
fn parse_svn_date(raw: &str) -> Option<DateTime<Utc>> {
    let iso = raw.split(" (").next()?.trim();
    DateTime::parse_from_str(iso, "%Y-%m-%d %H:%M:%S %z")
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse plain-text `svn log` output into entries, preserving order
///
/// Message bodies are read by the line count in each header, so a message
/// that itself contains a dashed line is not mistaken for a separator.
pub fn parse_log_output(output: &str) -> Result<Vec<CommitLogEntry>> {
    let mut entries = Vec::new();
    let mut lines = output.lines().peekable();

    while let Some(line) = lines.next() {
        if line.trim().is_empty() || is_separator(line) {
            continue;
        }

        let caps = HEADER
            .captures(line)
            .ok_or_else(|| Error::LogRetrieval(format!("unexpected svn log line: {line}")))?;

        let revision = caps[1]
            .parse::<u64>()
            .map_err(|e| Error::LogRetrieval(format!("bad revision in '{line}': {e}")))?;
        let line_count = caps[4]
            .parse::<usize>()
            .map_err(|e| Error::LogRetrieval(format!("bad line count in '{line}': {e}")))?;

        // Header is followed by one blank line before the message body
        if lines.peek().is_some_and(|l| l.is_empty()) {
            lines.next();
        }

        let message = lines.by_ref().take(line_count).collect::<Vec<_>>().join("\n");

        entries.push(CommitLogEntry {
            revision,
            author: caps[2].to_string(),
            message,
            committed_at: parse_svn_date(&caps[3]),
        });
    }

    Ok(entries)
}

/// Parse `svn list` output, one entry per line
pub fn parse_list_output(output: &str) -> Vec<DirEntry> {
    output
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .map(|l| DirEntry {
            name: l.trim_end_matches('/').to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SEP: &str = "------------------------------------------------------------------------";

    #[test]
    fn test_parse_two_entries_newest_first() {
        let output = format!(
            "{SEP}\n\
             r502 | alice | 2016-03-01 10:20:30 -0500 (Tue, 01 Mar 2016) | 1 line\n\
             \n\
             Fix login redirect\n\
             {SEP}\n\
             r498 | bob | 2016-02-28 09:00:00 +0000 (Sun, 28 Feb 2016) | 2 lines\n\
             \n\
             Add audit table\n\
             Refs #42\n\
             {SEP}\n"
        );

        let entries = parse_log_output(&output).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].revision, 502);
        assert_eq!(entries[0].author, "alice");
        assert_eq!(entries[0].message, "Fix login redirect");
        assert_eq!(
            entries[0].committed_at,
            Some(Utc.with_ymd_and_hms(2016, 3, 1, 15, 20, 30).unwrap())
        );
        assert_eq!(entries[1].revision, 498);
        assert_eq!(entries[1].message, "Add audit table\nRefs #42");
    }

    #[test]
    fn test_parse_message_containing_separator() {
        let output = format!(
            "{SEP}\n\
             r10 | carol | 2016-01-01 00:00:00 +0000 (Fri, 01 Jan 2016) | 3 lines\n\
             \n\
             Header\n\
             {SEP}\n\
             Footer\n\
             {SEP}\n"
        );

        let entries = parse_log_output(&output).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, format!("Header\n{SEP}\nFooter"));
    }

    #[test]
    fn test_parse_no_author_no_date() {
        let output = format!("{SEP}\nr1 | (no author) | (no date) | 1 line\n\nInitial import\n{SEP}\n");

        let entries = parse_log_output(&output).unwrap();
        assert_eq!(entries[0].author, "(no author)");
        assert!(entries[0].committed_at.is_none());
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_log_output("").unwrap().is_empty());
        assert!(parse_log_output(&format!("{SEP}\n")).unwrap().is_empty());
    }

    #[test]
    fn test_parse_garbage_is_retrieval_error() {
        let result = parse_log_output("svn: warning: something odd\n");
        assert!(matches!(result, Err(Error::LogRetrieval(_))));
    }

    #[test]
    fn test_parse_list_strips_directory_slash() {
        let entries = parse_list_output("branches/\ntags/\ntrunk/\nREADME.txt\n\n");
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["branches", "tags", "trunk", "README.txt"]);
    }
}
