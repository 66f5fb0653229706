//! Per-version changelog files and the combined changelog index.

use crate::changelog::CategoryMap;
use crate::domain::ReleaseVersion;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension of every per-version changelog file
pub const CHANGELOG_EXTENSION: &str = "yaml";

/// Indentation applied to per-version contents inside the combined index
pub const INDEX_INDENT: &str = "  ";

/// Path of the changelog file for `version` inside `dir` (e.g. `dir/v1.2.0.yaml`)
pub fn version_file_path(dir: &Path, version: &ReleaseVersion) -> PathBuf {
    dir.join(format!("{}.{}", version.tag_name(), CHANGELOG_EXTENSION))
}

/// Serialize `map` as YAML; keys are sorted, module lines keep their order
pub fn render_version_changelog(map: &CategoryMap) -> Result<String> {
    Ok(serde_yaml::to_string(map)?)
}

/// Write the changelog of `version` into `dir`, replacing any previous file.
///
/// Returns the path written.
pub fn write_version_changelog(
    dir: &Path,
    version: &ReleaseVersion,
    map: &CategoryMap,
) -> Result<PathBuf> {
    let content = render_version_changelog(map)?;
    fs::create_dir_all(dir)?;

    let path = version_file_path(dir, version);
    fs::write(&path, content)?;
    debug!(path = %path.display(), "wrote version changelog");
    Ok(path)
}

/// Per-version changelog files found in `dir`, ordered oldest version first.
///
/// Only files with the changelog extension are considered; the file stem
/// must be a version (with or without a leading 'v'). `exclude`, when it
/// names an existing file in `dir`, is skipped so an index kept next to
/// the per-version files is not read back as one.
pub fn list_version_files(
    dir: &Path,
    exclude: Option<&Path>,
) -> Result<Vec<(ReleaseVersion, PathBuf)>> {
    let excluded = exclude.and_then(|p| fs::canonicalize(p).ok());
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if excluded.is_some() && fs::canonicalize(&path).ok() == excluded {
            debug!(path = %path.display(), "skipping combined index");
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(CHANGELOG_EXTENSION) {
            debug!(path = %path.display(), "skipping non-changelog file");
            continue;
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let version = ReleaseVersion::parse(&stem)?;
        files.push((version, path));
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Build the combined index text from `(heading, contents)` blocks.
///
/// Each block becomes `<heading>:` followed by every contents line indented
/// by two spaces.
pub fn render_combined_index<H: AsRef<str>, C: AsRef<str>>(blocks: &[(H, C)]) -> String {
    let mut out = String::new();

    for (heading, contents) in blocks {
        out.push_str(heading.as_ref());
        out.push_str(":\n");

        let indented: Vec<String> = contents
            .as_ref()
            .lines()
            .map(|line| format!("{}{}", INDEX_INDENT, line))
            .collect();
        out.push_str(&indented.join("\n"));
        out.push('\n');
    }

    out
}

/// Regenerate `index_path` from every per-version file in `dir`, newest first.
///
/// Returns the versions included, newest first.
pub fn rebuild_combined_index(dir: &Path, index_path: &Path) -> Result<Vec<ReleaseVersion>> {
    let files = list_version_files(dir, Some(index_path))?;

    let mut blocks = Vec::with_capacity(files.len());
    for (_, path) in files.iter().rev() {
        let heading = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let contents = fs::read_to_string(path)?;
        blocks.push((heading, contents));
    }

    if let Some(parent) = index_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(index_path, render_combined_index(&blocks))?;
    debug!(path = %index_path.display(), versions = blocks.len(), "wrote combined index");

    Ok(files.into_iter().rev().map(|(v, _)| v).collect())
}
