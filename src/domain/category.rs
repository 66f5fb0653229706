//! Classification ruleset: recognized category prefixes and their visibility.

use crate::error::{ReleaseError, Result};
use std::collections::{BTreeMap, HashMap};

/// Marker every category prefix ends with in a commit subject
pub const CATEGORY_MARKER: char = ':';

/// Maps commit subject prefixes (e.g. "fix:") to canonical category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    prefixes: HashMap<String, String>,
}

impl CategoryTable {
    /// Build the table from the recognized category names plus typo/plural aliases.
    ///
    /// Each name `n` is recognized as `n:`; each alias `a -> n` as `a:`.
    /// An alias pointing at a name that is not in `types` is rejected.
    pub fn new<S: AsRef<str>>(types: &[S], aliases: &BTreeMap<String, String>) -> Result<Self> {
        let mut prefixes = HashMap::new();
        for name in types {
            let name = name.as_ref();
            prefixes.insert(format!("{}{}", name, CATEGORY_MARKER), name.to_string());
        }

        for (alias, target) in aliases {
            if !types.iter().any(|t| t.as_ref() == target.as_str()) {
                return Err(ReleaseError::config(format!(
                    "alias '{}' refers to unknown category '{}'",
                    alias, target
                )));
            }
            prefixes.insert(format!("{}{}", alias, CATEGORY_MARKER), target.clone());
        }

        Ok(CategoryTable { prefixes })
    }

    /// Canonical category for a subject prefix such as "fixbug:"
    pub fn lookup(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

/// Which canonical categories are written to the changelog.
///
/// Categories without an entry are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityPolicy {
    display: HashMap<String, bool>,
}

impl VisibilityPolicy {
    /// Policy hiding exactly the given categories
    pub fn hiding<S: AsRef<str>>(hidden: &[S]) -> Self {
        let display = hidden
            .iter()
            .map(|c| (c.as_ref().to_string(), false))
            .collect();
        VisibilityPolicy { display }
    }

    pub fn set(&mut self, category: impl Into<String>, visible: bool) {
        self.display.insert(category.into(), visible);
    }

    pub fn is_visible(&self, category: &str) -> bool {
        self.display.get(category).copied().unwrap_or(true)
    }
}
