//! Domain logic - pure release rules independent of git and the filesystem

pub mod category;
pub mod commit;
pub mod tag;
pub mod version;

pub use category::{CategoryTable, VisibilityPolicy};
pub use commit::{ClassifiedEntry, CommitRecord};
pub use tag::{parse_tags, preceding_release, Tag};
pub use version::ReleaseVersion;
