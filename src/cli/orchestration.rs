//! Release changelog workflow
//!
//! Ties the pipeline together: find the preceding release, collect and
//! classify the commits since then, write the per-version changelog and
//! regenerate the combined index. The workflow is independent of clap so
//! it can be driven from tests with a [MockRepository](crate::git::MockRepository).

use std::path::PathBuf;

use tracing::info;

use crate::boundary::BoundaryWarning;
use crate::changelog::{self, CategoryMap};
use crate::config::Config;
use crate::domain::{preceding_release, ReleaseVersion, Tag};
use crate::error::Result;
use crate::git::{self, Repository};
use crate::writer;

/// Revision the changelog range ends at
pub const RANGE_END: &str = "HEAD";

/// Result of a successful release build
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// The version the changelog was built for
    pub version: ReleaseVersion,

    /// Tag the commit range starts after
    pub previous: Tag,

    /// Number of commits classified
    pub commit_count: usize,

    /// Changelog lines written after filtering
    pub entry_count: usize,

    /// The changelog as written
    pub changelog: CategoryMap,

    /// Per-version changelog file
    pub changelog_path: PathBuf,

    /// Combined index file
    pub index_path: PathBuf,

    /// Versions listed in the combined index, newest first
    pub indexed_versions: Vec<ReleaseVersion>,

    pub warnings: Vec<BoundaryWarning>,
}

/// Build the changelog for `target_version` (with or without leading 'v').
///
/// Steps:
/// 1. Parse the target version
/// 2. Pick the greatest tag older than the target
/// 3. Collect commits from that tag to HEAD
/// 4. Classify and filter them
/// 5. Write the per-version changelog
/// 6. Regenerate the combined index
///
/// Nothing is written unless steps 1-4 succeed. A failure in step 6 leaves
/// the per-version file of step 5 in place.
pub fn build_release<R: Repository + ?Sized>(
    repo: &R,
    target_version: &str,
    config: &Config,
) -> Result<ReleaseOutcome> {
    let version = ReleaseVersion::parse(target_version)?;
    let table = config.category_table()?;
    let policy = config.visibility_policy();
    let mut warnings = Vec::new();

    let tags = git::list_versions(repo)?;
    if let Some(existing) = tags.iter().find(|t| t.version == version) {
        warnings.push(BoundaryWarning::TargetAlreadyTagged {
            tag: existing.name.clone(),
        });
    }
    let previous = preceding_release(&tags, &version)?.clone();
    info!(version = %version, previous = %previous.name, "building release changelog");

    let commits = repo.log_range(&previous.name, RANGE_END)?;
    if commits.is_empty() {
        warnings.push(BoundaryWarning::NoNewCommits {
            since_tag: previous.name.clone(),
        });
    }

    let mut map: CategoryMap = changelog::aggregate(&commits, &table)?;
    let hidden = changelog::apply_visibility(&mut map, &policy);
    if map.is_empty() && !hidden.is_empty() {
        warnings.push(BoundaryWarning::AllCategoriesHidden { hidden });
    }

    let changelog_dir = &config.paths.changelog_dir;
    let existing = writer::version_file_path(changelog_dir, &version);
    if existing.exists() {
        warnings.push(BoundaryWarning::ChangelogOverwritten { path: existing });
    }
    let changelog_path = writer::write_version_changelog(changelog_dir, &version, &map)?;

    let index_path = config.paths.index_file.clone();
    let indexed_versions = writer::rebuild_combined_index(changelog_dir, &index_path)?;
    info!(
        path = %index_path.display(),
        versions = indexed_versions.len(),
        "rebuilt changelog index"
    );

    Ok(ReleaseOutcome {
        version,
        previous,
        commit_count: commits.len(),
        entry_count: changelog::entry_count(&map),
        changelog: map,
        changelog_path,
        index_path,
        indexed_versions,
        warnings,
    })
}
