use crate::domain::version::ReleaseVersion;
use crate::error::{ReleaseError, Result};

/// Represents a release tag and the version it names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub version: ReleaseVersion,
}

impl Tag {
    /// Parse a tag name (e.g., "v1.2.3") into a release tag
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let version = ReleaseVersion::parse(&name)?;
        Ok(Tag { name, version })
    }
}

/// Parse every non-empty tag name; a single malformed tag fails the whole set
pub fn parse_tags<S: AsRef<str>>(names: &[S]) -> Result<Vec<Tag>> {
    names
        .iter()
        .map(|n| n.as_ref())
        .filter(|n| !n.is_empty())
        .map(Tag::parse)
        .collect()
}

/// Select the greatest tag strictly older than `target`
pub fn preceding_release<'a>(tags: &'a [Tag], target: &ReleaseVersion) -> Result<&'a Tag> {
    tags.iter()
        .filter(|t| t.version < *target)
        .max_by(|a, b| a.version.cmp(&b.version))
        .ok_or_else(|| ReleaseError::NoPrecedingRelease {
            version: target.to_string(),
        })
}
