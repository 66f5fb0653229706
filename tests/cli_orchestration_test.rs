use std::fs;
use std::path::Path;

use release_notes::boundary::BoundaryWarning;
use release_notes::cli::build_release;
use release_notes::config::Config;
use release_notes::domain::{CommitRecord, ReleaseVersion};
use release_notes::git::MockRepository;
use release_notes::ReleaseError;
use tempfile::TempDir;

fn config_in(dir: &Path) -> Config {
    let mut config = Config::default();
    config.paths.changelog_dir = dir.join("docs/change-log");
    config.paths.index_file = dir.join("docs/change-log.yaml");
    config.paths.change_types = dir.join("scripts/change-types.yaml");
    config
}

fn commit(subject: &str) -> CommitRecord {
    CommitRecord::new(subject, "2019-04-18", "Alice", "alice@example.com")
}

fn repo_with_tags(tags: &[&str]) -> MockRepository {
    let mut repo = MockRepository::new();
    for tag in tags {
        repo.add_tag(*tag);
    }
    repo
}

#[test]
fn test_selects_greatest_preceding_tag() {
    let dir = TempDir::new().unwrap();
    let mut repo = repo_with_tags(&["v1.0.0", "v1.1.0", "v1.2.0"]);
    repo.add_commit(commit("fixbug: trie: fix search"));

    let outcome = build_release(&repo, "v1.2.0", &config_in(dir.path())).unwrap();

    assert_eq!(outcome.previous.name, "v1.1.0");
    assert_eq!(
        repo.requested_ranges(),
        vec![("v1.1.0".to_string(), "HEAD".to_string())]
    );
    assert!(outcome
        .warnings
        .contains(&BoundaryWarning::TargetAlreadyTagged {
            tag: "v1.2.0".to_string()
        }));
}

#[test]
fn test_writes_version_file_and_index() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let mut repo = repo_with_tags(&["v0.5.9"]);
    repo.add_commit(commit("new-feature: kv: add range scan"));
    repo.add_commit(commit("fix: kv: handle empty key"));
    repo.add_commit(commit("fixbug: trie: off by one"));

    let outcome = build_release(&repo, "0.5.10", &config).unwrap();

    assert_eq!(
        outcome.changelog_path,
        dir.path().join("docs/change-log/v0.5.10.yaml")
    );
    assert_eq!(outcome.commit_count, 3);
    assert_eq!(outcome.entry_count, 3);

    let content = fs::read_to_string(&outcome.changelog_path).unwrap();
    assert_eq!(
        content,
        "\
fixbug:
  kv:
  - handle empty key; by Alice; 2019-04-18
  trie:
  - off by one; by Alice; 2019-04-18
new-feature:
  kv:
  - add range scan; by Alice; 2019-04-18
"
    );

    let index = fs::read_to_string(&config.paths.index_file).unwrap();
    assert!(index.starts_with("v0.5.10:\n  fixbug:\n    kv:\n    - handle empty key"));
    assert_eq!(outcome.indexed_versions, vec![ReleaseVersion::new(0, 5, 10)]);
}

#[test]
fn test_hidden_categories_not_written() {
    let dir = TempDir::new().unwrap();
    let mut repo = repo_with_tags(&["v1.0.0"]);
    repo.add_commit(commit("doc: readme: explain usage"));
    repo.add_commit(commit("test: trie: more cases"));
    repo.add_commit(commit("fixdoc: readme: typo"));

    let outcome = build_release(&repo, "v1.0.1", &config_in(dir.path())).unwrap();
    let content = fs::read_to_string(&outcome.changelog_path).unwrap();

    let categories: Vec<&str> = content.lines().filter(|l| !l.starts_with(' ')).collect();
    assert_eq!(categories, vec!["fixdoc:"]);
}

#[test]
fn test_all_hidden_warns() {
    let dir = TempDir::new().unwrap();
    let mut repo = repo_with_tags(&["v1.0.0"]);
    repo.add_commit(commit("internal: build: faster ci"));

    let outcome = build_release(&repo, "v1.0.1", &config_in(dir.path())).unwrap();

    assert!(outcome
        .warnings
        .contains(&BoundaryWarning::AllCategoriesHidden {
            hidden: vec!["internal".to_string()]
        }));
    assert_eq!(
        fs::read_to_string(&outcome.changelog_path).unwrap().trim(),
        "{}"
    );
}

#[test]
fn test_malformed_subject_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let mut repo = repo_with_tags(&["v1.0.0"]);
    repo.add_commit(commit("fixbug: trie: fine"));
    repo.add_commit(commit("fixbug: everything"));

    let result = build_release(&repo, "v1.1.0", &config);

    assert!(matches!(result, Err(ReleaseError::MalformedSubject { .. })));
    assert!(!config.paths.changelog_dir.join("v1.1.0.yaml").exists());
    assert!(!config.paths.index_file.exists());
}

#[test]
fn test_unknown_category_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let mut repo = repo_with_tags(&["v1.0.0"]);
    repo.add_commit(commit("feat: trie: new api"));

    let result = build_release(&repo, "v1.1.0", &config);

    assert!(matches!(result, Err(ReleaseError::UnknownCategory { .. })));
    assert!(!config.paths.changelog_dir.exists());
}

#[test]
fn test_no_preceding_release() {
    let dir = TempDir::new().unwrap();
    let repo = repo_with_tags(&["v1.0.0", "v2.0.0"]);

    let result = build_release(&repo, "v0.1.0", &config_in(dir.path()));
    assert!(matches!(
        result,
        Err(ReleaseError::NoPrecedingRelease { .. })
    ));
}

#[test]
fn test_invalid_target_version() {
    let dir = TempDir::new().unwrap();
    let repo = repo_with_tags(&["v1.0.0"]);

    let result = build_release(&repo, "next", &config_in(dir.path()));
    assert!(matches!(result, Err(ReleaseError::VersionParse { .. })));
}

#[test]
fn test_malformed_tag_aborts() {
    let dir = TempDir::new().unwrap();
    let repo = repo_with_tags(&["v1.0.0", "stable"]);

    let result = build_release(&repo, "v1.1.0", &config_in(dir.path()));
    assert!(matches!(result, Err(ReleaseError::VersionParse { .. })));
}

#[test]
fn test_no_commits_still_writes_empty_changelog() {
    let dir = TempDir::new().unwrap();
    let repo = repo_with_tags(&["v1.0.0"]);

    let outcome = build_release(&repo, "v1.0.1", &config_in(dir.path())).unwrap();

    assert!(outcome.warnings.contains(&BoundaryWarning::NoNewCommits {
        since_tag: "v1.0.0".to_string()
    }));
    assert!(outcome.changelog_path.exists());
}

#[test]
fn test_rerun_overwrites_and_warns() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let mut repo = repo_with_tags(&["v1.0.0"]);
    repo.add_commit(commit("fixbug: trie: fix"));

    let first = build_release(&repo, "v1.0.1", &config).unwrap();
    assert!(first.warnings.is_empty());

    let second = build_release(&repo, "v1.0.1", &config).unwrap();
    assert!(second
        .warnings
        .contains(&BoundaryWarning::ChangelogOverwritten {
            path: second.changelog_path.clone()
        }));
}

#[test]
fn test_index_orders_versions_semantically() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    fs::create_dir_all(&config.paths.changelog_dir).unwrap();
    fs::write(config.paths.changelog_dir.join("v0.9.0.yaml"), "{}\n").unwrap();
    fs::write(config.paths.changelog_dir.join("v1.0.0.yaml"), "{}\n").unwrap();
    let mut repo = repo_with_tags(&["v0.9.0", "v1.0.0"]);
    repo.add_commit(commit("fixbug: trie: fix"));

    build_release(&repo, "v1.10.0", &config).unwrap();

    let index = fs::read_to_string(&config.paths.index_file).unwrap();
    let headings: Vec<&str> = index.lines().filter(|l| !l.starts_with(' ')).collect();
    assert_eq!(headings, vec!["v1.10.0:", "v1.0.0:", "v0.9.0:"]);
}

#[test]
fn test_index_failure_keeps_version_file() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(dir.path());
    // a directory in place of the index file makes the final write fail
    config.paths.index_file = dir.path().join("blocked");
    fs::create_dir_all(&config.paths.index_file).unwrap();
    let mut repo = repo_with_tags(&["v1.0.0"]);
    repo.add_commit(commit("fixbug: trie: fix"));

    let result = build_release(&repo, "v1.0.1", &config);

    assert!(matches!(result, Err(ReleaseError::Io(_))));
    assert!(config.paths.changelog_dir.join("v1.0.1.yaml").exists());
}
