//! Commit classification and aggregation into a per-version changelog.

use crate::domain::{CategoryTable, ClassifiedEntry, CommitRecord, VisibilityPolicy};
use crate::error::Result;
use std::collections::BTreeMap;
use tracing::debug;

/// Lines of one category, keyed by module name
pub type ModuleMap = BTreeMap<String, Vec<String>>;

/// Changelog of one release: category -> module -> lines
///
/// Keys are sorted; lines keep commit order.
pub type CategoryMap = BTreeMap<String, ModuleMap>;

/// Classify `commits`, group them by category and module, then drop
/// categories hidden by `policy`.
///
/// Any commit with a malformed subject or an unknown category prefix fails
/// the whole classification.
pub fn classify(
    commits: &[CommitRecord],
    table: &CategoryTable,
    policy: &VisibilityPolicy,
) -> Result<CategoryMap> {
    let mut map = aggregate(commits, table)?;
    apply_visibility(&mut map, policy);
    Ok(map)
}

/// Group commits by category and module without any filtering
pub fn aggregate(commits: &[CommitRecord], table: &CategoryTable) -> Result<CategoryMap> {
    let mut map = CategoryMap::new();

    for commit in commits {
        let entry = ClassifiedEntry::parse(&commit.subject, table)?;
        let line = entry.changelog_line(commit);
        map.entry(entry.category)
            .or_default()
            .entry(entry.module)
            .or_default()
            .push(line);
    }

    Ok(map)
}

/// Remove hidden categories from `map`, returning the names removed
pub fn apply_visibility(map: &mut CategoryMap, policy: &VisibilityPolicy) -> Vec<String> {
    let hidden: Vec<String> = map
        .keys()
        .filter(|category| !policy.is_visible(category))
        .cloned()
        .collect();

    for category in &hidden {
        map.remove(category);
        debug!(category = %category, "hiding category");
    }

    hidden
}

/// Total number of changelog lines in `map`
pub fn entry_count(map: &CategoryMap) -> usize {
    map.values()
        .flat_map(|modules| modules.values())
        .map(Vec::len)
        .sum()
}
