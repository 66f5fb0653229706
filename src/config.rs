use crate::domain::{CategoryTable, VisibilityPolicy};
use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "release-notes.toml";

/// Represents the complete configuration for release-notes.
///
/// Contains file locations, the commit classification ruleset and the
/// documentation rendering settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub categories: CategoriesConfig,

    #[serde(default)]
    pub docs: DocsConfig,
}

fn default_changelog_dir() -> PathBuf {
    PathBuf::from("docs/change-log")
}

fn default_index_file() -> PathBuf {
    PathBuf::from("docs/change-log.yaml")
}

fn default_change_types() -> PathBuf {
    PathBuf::from("scripts/change-types.yaml")
}

/// Where changelog files live.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PathsConfig {
    /// Directory holding one changelog file per release
    #[serde(default = "default_changelog_dir")]
    pub changelog_dir: PathBuf,

    /// Combined changelog of all releases
    #[serde(default = "default_index_file")]
    pub index_file: PathBuf,

    /// YAML list of category names; replaces `categories.types` when present
    #[serde(default = "default_change_types")]
    pub change_types: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            changelog_dir: default_changelog_dir(),
            index_file: default_index_file(),
            change_types: default_change_types(),
        }
    }
}

/// Returns the default list of change categories.
fn default_types() -> Vec<String> {
    vec![
        "api-change".to_string(),
        "new-feature".to_string(),
        "internal".to_string(),
        "doc".to_string(),
        "refactor".to_string(),
        "fixbug".to_string(),
        "fixdoc".to_string(),
        "test".to_string(),
    ]
}

/// Returns the default typo and plural aliases.
fn default_aliases() -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    map.insert("api-changes".to_string(), "api-change".to_string());
    map.insert("new-features".to_string(), "new-feature".to_string());
    map.insert("docs".to_string(), "doc".to_string());
    map.insert("fix".to_string(), "fixbug".to_string());
    map
}

/// Returns the categories left out of the changelog by default.
fn default_hidden() -> Vec<String> {
    vec![
        "doc".to_string(),
        "refactor".to_string(),
        "internal".to_string(),
        "test".to_string(),
    ]
}

/// Commit classification ruleset.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CategoriesConfig {
    #[serde(default = "default_types")]
    pub types: Vec<String>,

    #[serde(default = "default_aliases")]
    pub aliases: BTreeMap<String, String>,

    #[serde(default = "default_hidden")]
    pub hidden: Vec<String>,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        CategoriesConfig {
            types: default_types(),
            aliases: default_aliases(),
            hidden: default_hidden(),
        }
    }
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_name_command() -> Vec<String> {
    vec![
        "git".to_string(),
        "rev-parse".to_string(),
        "--show-toplevel".to_string(),
    ]
}

/// Documentation template rendering.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DocsConfig {
    /// Directory scanned for `*.md.j2` templates
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// Command whose output names the project; the last '/' component is used.
    ///
    /// The default, `git rev-parse --show-toplevel`, yields the checkout
    /// directory name. Projects whose module name differs from that
    /// directory should set a build-tool command here, e.g. `["go", "list", "."]`.
    #[serde(default = "default_name_command")]
    pub name_command: Vec<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        DocsConfig {
            template_dir: default_template_dir(),
            name_command: default_name_command(),
        }
    }
}

impl Config {
    /// Category table built from the configured names and aliases.
    ///
    /// The change-types file, when it exists, supplies the names.
    pub fn category_table(&self) -> Result<CategoryTable> {
        let types = self.category_types()?;
        CategoryTable::new(&types, &self.categories.aliases)
    }

    pub fn visibility_policy(&self) -> VisibilityPolicy {
        VisibilityPolicy::hiding(&self.categories.hidden)
    }

    fn category_types(&self) -> Result<Vec<String>> {
        let path = &self.paths.change_types;
        if !path.exists() {
            return Ok(self.categories.types.clone());
        }

        debug!(path = %path.display(), "loading change types");
        let content = fs::read_to_string(path)?;
        let types: Vec<String> = serde_yaml::from_str(&content)?;
        if types.is_empty() {
            return Err(ReleaseError::config(format!(
                "no change types listed in {}",
                path.display()
            )));
        }
        Ok(types)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-notes.toml` in current directory
/// 3. `.release-notes.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_ruleset() {
        let config = Config::default();
        let table = config.category_table().unwrap();
        assert_eq!(table.lookup("fix:"), Some("fixbug"));
        assert_eq!(table.lookup("api-changes:"), Some("api-change"));
        assert_eq!(table.lookup("test:"), Some("test"));

        let policy = config.visibility_policy();
        assert!(!policy.is_visible("test"));
        assert!(!policy.is_visible("internal"));
        assert!(policy.is_visible("fixbug"));
        assert!(policy.is_visible("fixdoc"));
    }

    #[test]
    fn test_change_types_file_overrides_types() {
        let dir = TempDir::new().unwrap();
        let types_path = dir.path().join("change-types.yaml");
        fs::write(&types_path, "- fixbug\n- perf\n").unwrap();

        let mut config = Config::default();
        config.paths.change_types = types_path;
        config.categories.aliases = BTreeMap::new();

        let table = config.category_table().unwrap();
        assert_eq!(table.lookup("perf:"), Some("perf"));
        assert_eq!(table.lookup("doc:"), None);
    }

    #[test]
    fn test_change_types_file_missing_alias_target() {
        let dir = TempDir::new().unwrap();
        let types_path = dir.path().join("change-types.yaml");
        fs::write(&types_path, "- perf\n").unwrap();

        let mut config = Config::default();
        config.paths.change_types = types_path;

        assert!(matches!(
            config.category_table(),
            Err(ReleaseError::Config(_))
        ));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[paths]
changelog_dir = "CHANGES"
"#,
        )
        .unwrap();

        assert_eq!(config.paths.changelog_dir, PathBuf::from("CHANGES"));
        assert_eq!(config.paths.index_file, default_index_file());
        assert_eq!(config.categories, CategoriesConfig::default());
    }

    #[test]
    fn test_name_command_default_and_override() {
        assert_eq!(
            DocsConfig::default().name_command,
            vec!["git", "rev-parse", "--show-toplevel"]
        );

        let config: Config = toml::from_str(
            r#"
[docs]
name_command = ["go", "list", "."]
"#,
        )
        .unwrap();
        assert_eq!(config.docs.name_command, vec!["go", "list", "."]);
        assert_eq!(config.docs.template_dir, default_template_dir());
    }
}
