use crate::command::CommandRunner;
use crate::domain::CommitRecord;
use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use std::path::Path;
use tracing::debug;

/// Separator between the fields of one `git log` line
pub const LOG_FIELD_SEPARATOR: &str = " ||| ";

// subject, author date, author name, author email
const LOG_FORMAT: &str = "--format=%s ||| %ai ||| %an ||| %ae";

/// [Repository] backed by the `git` executable
#[derive(Debug, Clone, Default)]
pub struct GitCliRepository {
    runner: CommandRunner,
}

impl GitCliRepository {
    /// Repository of the current working directory
    pub fn new() -> Self {
        GitCliRepository {
            runner: CommandRunner::new(),
        }
    }

    /// Repository rooted at (or containing) `dir`
    pub fn open(dir: impl AsRef<Path>) -> Self {
        GitCliRepository {
            runner: CommandRunner::in_dir(dir),
        }
    }
}

impl Repository for GitCliRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let out = self.runner.run("git", &["tag", "-l"])?;
        Ok(out.lines().map(str::to_string).collect())
    }

    fn log_range(&self, from: &str, to: &str) -> Result<Vec<CommitRecord>> {
        let range = format!("{}..{}", from, to);
        let out = self
            .runner
            .run("git", &["log", LOG_FORMAT, "--reverse", range.as_str()])?;
        let commits = parse_log_output(&out)?;
        debug!(range = %range, count = commits.len(), "collected commits");
        Ok(commits)
    }
}

/// Parse `git log` output produced with the four-field format.
///
/// Empty lines are skipped. The author date ("2019-04-18 13:36:42 +0800")
/// is reduced to its calendar day.
pub fn parse_log_output(out: &str) -> Result<Vec<CommitRecord>> {
    out.lines()
        .filter(|line| !line.is_empty())
        .map(parse_log_line)
        .collect()
}

fn parse_log_line(line: &str) -> Result<CommitRecord> {
    let fields: Vec<&str> = line.split(LOG_FIELD_SEPARATOR).collect();
    if fields.len() != 4 {
        return Err(ReleaseError::MalformedLogLine {
            line: line.to_string(),
        });
    }

    let date = fields[1].split_whitespace().next().unwrap_or_default();
    Ok(CommitRecord::new(fields[0], date, fields[2], fields[3]))
}
