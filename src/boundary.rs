use std::fmt;
use std::path::PathBuf;

/// Warnings that occur while building a release changelog.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No commits between the preceding release and HEAD
    NoNewCommits { since_tag: String },
    /// The requested version already has a tag
    TargetAlreadyTagged { tag: String },
    /// A changelog for this version existed and was replaced
    ChangelogOverwritten { path: PathBuf },
    /// Every collected category is hidden by the visibility policy
    AllCategoriesHidden { hidden: Vec<String> },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits { since_tag } => {
                write!(f, "No new commits since tag '{}'", since_tag)
            }
            BoundaryWarning::TargetAlreadyTagged { tag } => {
                write!(
                    f,
                    "Tag '{}' already exists; changelog covers commits up to HEAD",
                    tag
                )
            }
            BoundaryWarning::ChangelogOverwritten { path } => {
                write!(f, "Overwriting existing changelog {}", path.display())
            }
            BoundaryWarning::AllCategoriesHidden { hidden } => {
                write!(
                    f,
                    "All changes are in hidden categories ({}); changelog is empty",
                    hidden.join(", ")
                )
            }
        }
    }
}
