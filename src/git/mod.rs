//! Git history access
//!
//! The changelog pipeline only needs two things from version control: the
//! list of release tags and the commits in a revision range. Both sit behind
//! the [Repository] trait so that classification and orchestration can run
//! against [MockRepository] in tests.
//!
//! - [GitCliRepository]: shells out to the `git` command line
//! - [MockRepository]: in-memory tags and commits
//!
//! ```rust,no_run
//! # use release_notes::git::{GitCliRepository, Repository};
//! # fn example() -> release_notes::Result<()> {
//! let repo = GitCliRepository::new();
//! for commit in repo.log_range("v0.1.0", "HEAD")? {
//!     println!("{} ({})", commit.subject, commit.date);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::{parse_log_output, GitCliRepository, LOG_FIELD_SEPARATOR};

use crate::domain::{parse_tags, CommitRecord, Tag};
use crate::error::Result;

/// Read-only view of the release history
pub trait Repository: Send + Sync {
    /// All tag names, one entry per tag, in no particular order
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Commits reachable from `to` but not from `from`, oldest first
    ///
    /// # Arguments
    /// * `from` - Revision excluded from the range (e.g. "v1.1.0")
    /// * `to` - Revision included in the range (e.g. "HEAD")
    fn log_range(&self, from: &str, to: &str) -> Result<Vec<CommitRecord>>;
}

/// List every release tag of `repo` as a parsed version.
///
/// Fails on the first tag that is not a semantic version.
pub fn list_versions<R: Repository + ?Sized>(repo: &R) -> Result<Vec<Tag>> {
    let names = repo.list_tags()?;
    parse_tags(&names)
}
