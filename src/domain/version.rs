use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Semantic version of a release, ordered by semver precedence
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseVersion(semver::Version);

impl ReleaseVersion {
    /// Create a release version without pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        ReleaseVersion(semver::Version::new(major, minor, patch))
    }

    /// Parse a version string, ignoring a leading 'v' (e.g., "v1.2.3" -> 1.2.3)
    pub fn parse(input: &str) -> Result<Self> {
        let clean = input.trim_start_matches('v');
        semver::Version::parse(clean)
            .map(ReleaseVersion)
            .map_err(|source| ReleaseError::VersionParse {
                input: input.to_string(),
                source,
            })
    }

    /// Tag name for this version ("v" followed by the version)
    pub fn tag_name(&self) -> String {
        format!("v{}", self.0)
    }

    pub fn semver(&self) -> &semver::Version {
        &self.0
    }
}

impl FromStr for ReleaseVersion {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        ReleaseVersion::parse(s)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
