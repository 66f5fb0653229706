use crate::domain::CommitRecord;
use crate::error::Result;
use crate::git::Repository;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
///
/// `log_range` returns every added commit regardless of the range and
/// records the requested range for later inspection.
pub struct MockRepository {
    tags: Vec<String>,
    commits: Vec<CommitRecord>,
    requested_ranges: Mutex<Vec<(String, String)>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            commits: Vec::new(),
            requested_ranges: Mutex::new(Vec::new()),
        }
    }

    /// Add a tag name
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Append a commit; commits are returned in insertion order
    pub fn add_commit(&mut self, commit: CommitRecord) {
        self.commits.push(commit);
    }

    /// Ranges passed to `log_range` so far, oldest first
    pub fn requested_ranges(&self) -> Vec<(String, String)> {
        self.requested_ranges
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn log_range(&self, from: &str, to: &str) -> Result<Vec<CommitRecord>> {
        if let Ok(mut ranges) = self.requested_ranges.lock() {
            ranges.push((from.to_string(), to.to_string()));
        }
        Ok(self.commits.clone())
    }
}
