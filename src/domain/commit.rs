use crate::domain::category::{CategoryTable, CATEGORY_MARKER};
use crate::error::{ReleaseError, Result};

/// One commit as extracted from the history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub subject: String,
    /// Author date, calendar day only (e.g. "2019-04-18")
    pub date: String,
    pub author: String,
    pub email: String,
}

impl CommitRecord {
    pub fn new(
        subject: impl Into<String>,
        date: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        CommitRecord {
            subject: subject.into(),
            date: date.into(),
            author: author.into(),
            email: email.into(),
        }
    }
}

/// A commit subject split into category, module and description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEntry {
    pub category: String,
    pub module: String,
    pub description: String,
}

impl ClassifiedEntry {
    /// Parse a subject of the form `<prefix> <module> <description>`.
    ///
    /// Tokens are separated by single spaces and the subject is split at most
    /// twice, so the description keeps its inner spaces:
    /// - `<prefix>` must be a prefix known to `table` (e.g. "fix:")
    /// - trailing ':' are stripped from `<module>`
    /// - every ':' is removed from `<description>`
    pub fn parse(subject: &str, table: &CategoryTable) -> Result<Self> {
        let mut parts = subject.splitn(3, ' ');
        let (prefix, module, rest) = match (parts.next(), parts.next(), parts.next()) {
            (Some(p), Some(m), Some(r)) => (p, m, r),
            _ => return Err(ReleaseError::malformed_subject(subject)),
        };

        let category = table
            .lookup(prefix)
            .ok_or_else(|| ReleaseError::UnknownCategory {
                prefix: prefix.to_string(),
                subject: subject.to_string(),
            })?;

        Ok(ClassifiedEntry {
            category: category.to_string(),
            module: module.trim_end_matches(CATEGORY_MARKER).to_string(),
            description: rest.replace(CATEGORY_MARKER, ""),
        })
    }

    /// Changelog line: "<description>; by <author>; <date>"
    pub fn changelog_line(&self, commit: &CommitRecord) -> String {
        format!("{}; by {}; {}", self.description, commit.author, commit.date)
    }
}
