//! Snapshot enumeration and lookup over real directories

use super::test_utils::write_tree;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use treematch::tree::filter::{FilterConfig, PathFilter};
use treematch::tree::snapshot::{Lookup, Snapshot};
use treematch::tree::walker::WalkerConfig;

fn sample_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_tree(
        dir.path(),
        &[
            ("core/src/main/java/org/a/Util.java", "a"),
            ("web/src/main/java/org/b/Util.java", "b"),
            ("web/src/main/java/org/b/Page.java", "c"),
            ("README.md", "d"),
            (".git/HEAD", "ref"),
            ("target/classes/Util.class", "bin"),
        ],
    );
    dir
}

#[test]
fn test_relative_paths_and_ignored_dirs() {
    let dir = sample_tree();
    let snapshot =
        Snapshot::build(dir.path(), &PathFilter::accept_all(), WalkerConfig::default()).unwrap();

    let all: Vec<&PathBuf> = snapshot.list_all().iter().collect();
    assert_eq!(
        all,
        vec![
            &PathBuf::from("README.md"),
            &PathBuf::from("core/src/main/java/org/a/Util.java"),
            &PathBuf::from("web/src/main/java/org/b/Page.java"),
            &PathBuf::from("web/src/main/java/org/b/Util.java"),
        ]
    );
    assert!(all.iter().all(|p| p.is_relative()));
}

#[test]
fn test_basename_index_returns_every_match() {
    let dir = sample_tree();
    let snapshot =
        Snapshot::build(dir.path(), &PathFilter::accept_all(), WalkerConfig::default()).unwrap();

    let mut utils = snapshot.find_by_basename("Util.java").to_vec();
    utils.sort();
    assert_eq!(
        utils,
        vec![
            PathBuf::from("core/src/main/java/org/a/Util.java"),
            PathBuf::from("web/src/main/java/org/b/Util.java"),
        ]
    );
    assert!(snapshot.find_by_basename("Missing.java").is_empty());
}

#[test]
fn test_lookup_and_absolute_paths() {
    let dir = sample_tree();
    let snapshot =
        Snapshot::build(dir.path(), &PathFilter::accept_all(), WalkerConfig::default()).unwrap();

    let rel = Path::new("web/src/main/java/org/b/Page.java");
    let abs = snapshot.to_absolute(rel).unwrap();
    assert!(abs.is_absolute());
    assert_eq!(snapshot.try_resolve(rel), Lookup::Found(abs.clone()));
    assert_eq!(snapshot.try_resolve(Path::new("nope.txt")), Lookup::NotFound);

    assert_eq!(std::fs::read_to_string(abs).unwrap(), "c");
    assert!(snapshot.to_absolute(Path::new("nope.txt")).is_err());
}

#[test]
fn test_include_pattern_restricts_snapshot() {
    let dir = sample_tree();
    let filter = PathFilter::from_config(&FilterConfig {
        include_patterns: vec![r".*src.main.java(.*)\.(java|groovy)$".to_string()],
        ..Default::default()
    })
    .unwrap();
    let snapshot = Snapshot::build(dir.path(), &filter, WalkerConfig::default()).unwrap();

    assert_eq!(snapshot.len(), 3);
    assert!(!snapshot.contains(Path::new("README.md")));
}

#[test]
fn test_empty_root_gives_empty_snapshot() {
    let dir = TempDir::new().unwrap();
    let snapshot =
        Snapshot::build(dir.path(), &PathFilter::accept_all(), WalkerConfig::default()).unwrap();
    assert!(snapshot.is_empty());
}

#[test]
fn test_file_as_root_is_rejected() {
    let dir = sample_tree();
    let result = Snapshot::build(
        &dir.path().join("README.md"),
        &PathFilter::accept_all(),
        WalkerConfig::default(),
    );
    assert!(result.is_err());
}
