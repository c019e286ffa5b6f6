//! End-to-end classification over real directory trees

use super::test_utils::TreePair;
use std::path::PathBuf;
use treematch::api::compare_trees;
use treematch::compare::normalize::Dialect;
use treematch::config::TreematchConfig;
use treematch::diff::{best_guess, AmbiguityReason, BestGuess};
use treematch::error::DiffError;

const SERVICE: &str = "package org.example.core;\n\npublic class Service {\n    private final Store store;\n\n    public Service(Store store) {\n        this.store = store;\n    }\n\n    public void run() {\n        store.open();\n        store.flush();\n        store.close();\n    }\n}\n";

const SERVICE_TWEAKED: &str = "package org.example.engine;\n\npublic class Service {\n    private final Store store;\n\n    public Service(Store store) {\n        this.store = store;\n    }\n\n    public void run() {\n        store.open();\n        store.flush();\n        store.close();\n    }\n}\n";

const UNRELATED: &str = "# Notes\n\nxyzzy plugh qwfp 0123 9876 !!\n";

fn config_for(pair: &TreePair) -> TreematchConfig {
    TreematchConfig {
        before_root: Some(pair.before()),
        after_root: Some(pair.after()),
        ..Default::default()
    }
}

#[test]
fn test_identical_file_at_same_path_is_unchanged() {
    let pair = TreePair::new(
        &[("src/Service.java", SERVICE)],
        &[("src/Service.java", SERVICE)],
    );
    let result = compare_trees(&config_for(&pair)).unwrap().result;

    assert_eq!(result.unchanged().len(), 1);
    assert_eq!(result.unchanged()[0].path, PathBuf::from("src/Service.java"));
    assert_eq!(result.unchanged()[0].similarity, 1.0);
    assert!(result.moved().is_empty());
    assert!(result.ambiguous().is_empty());
    assert!(result.new_files().is_empty());
}

#[test]
fn test_rewritten_file_at_same_path_does_not_fall_through() {
    // A copy with the same name elsewhere is never considered.
    let pair = TreePair::new(
        &[("src/Service.java", SERVICE)],
        &[("src/Service.java", UNRELATED), ("other/Service.java", SERVICE)],
    );
    let result = compare_trees(&config_for(&pair)).unwrap().result;

    assert_eq!(result.ambiguous().len(), 1);
    let record = &result.ambiguous()[0];
    assert_eq!(record.reason, AmbiguityReason::SignificantChangeAtSamePath);
    assert_eq!(record.candidates.len(), 1);
    assert!(record.candidates.contains_key(&PathBuf::from("src/Service.java")));
    assert_eq!(result.new_files(), &[PathBuf::from("other/Service.java")]);
}

#[test]
fn test_relocated_file_is_moved() {
    let pair = TreePair::new(
        &[("core/Service.java", SERVICE)],
        &[("engine/Service.java", SERVICE_TWEAKED)],
    );
    let result = compare_trees(&config_for(&pair)).unwrap().result;

    assert_eq!(result.moved().len(), 1);
    let moved = &result.moved()[0];
    assert_eq!(moved.orig_path, PathBuf::from("core/Service.java"));
    assert_eq!(moved.new_path, PathBuf::from("engine/Service.java"));
    assert!(moved.similarity >= 0.75 && moved.similarity < 1.0);
    assert!(result.new_files().is_empty());
}

#[test]
fn test_relocated_and_rewritten_file_is_ambiguous_but_guessable() {
    let pair = TreePair::new(
        &[("core/Service.java", SERVICE)],
        &[("engine/Service.java", UNRELATED)],
    );
    let result = compare_trees(&config_for(&pair)).unwrap().result;

    assert_eq!(result.ambiguous().len(), 1);
    let record = &result.ambiguous()[0];
    assert_eq!(record.reason, AmbiguityReason::MovedFileSignificantlyChanged);
    assert_eq!(best_guess(record, 0.75), BestGuess::Unresolved);
    // The path was examined, so it is claimed rather than new.
    assert!(result.new_files().is_empty());
}

#[test]
fn test_deleted_file_has_no_candidates_and_new_file_is_listed() {
    let pair = TreePair::new(
        &[("core/Gone.java", SERVICE)],
        &[("core/Fresh.java", SERVICE)],
    );
    let result = compare_trees(&config_for(&pair)).unwrap().result;

    let record = &result.ambiguous()[0];
    assert_eq!(record.reason, AmbiguityReason::NoFileWithSameName);
    assert!(record.candidates.is_empty());
    assert_eq!(result.new_files(), &[PathBuf::from("core/Fresh.java")]);
}

#[test]
fn test_duplicate_names_are_all_scored_and_one_stands_out() {
    let pair = TreePair::new(
        &[("core/Service.java", SERVICE)],
        &[
            ("engine/Service.java", SERVICE_TWEAKED),
            ("legacy/Service.java", UNRELATED),
        ],
    );
    let result = compare_trees(&config_for(&pair)).unwrap().result;

    let record = &result.ambiguous()[0];
    assert_eq!(record.reason, AmbiguityReason::MultipleFilesWithSameName);
    assert_eq!(record.candidates.len(), 2);
    assert_eq!(
        best_guess(record, 0.75),
        BestGuess::Probable(PathBuf::from("engine/Service.java"))
    );
    assert!(result.new_files().is_empty());
}

#[test]
fn test_java_header_and_imports_are_ignored() {
    let header = Dialect::Java.boilerplate_block().join("\n");
    let with_header = format!("{}\nimport java.util.List;\nimport java.util.Map;\n{}", header, SERVICE);
    let pair = TreePair::new(
        &[("src/Service.java", with_header.as_str())],
        &[("src/Service.java", SERVICE)],
    );

    let mut config = config_for(&pair);
    config.normalizer.dialect = Dialect::Java;
    let result = compare_trees(&config).unwrap().result;
    assert_eq!(result.unchanged().len(), 1);
    assert_eq!(result.unchanged()[0].similarity, 1.0);

    let plain = compare_trees(&config_for(&pair)).unwrap().result;
    assert_eq!(plain.ambiguous().len(), 1);
}

#[test]
fn test_filter_limits_both_trees() {
    let pair = TreePair::new(
        &[("src/Service.java", SERVICE), ("examples/Demo.java", SERVICE)],
        &[("src/Service.java", SERVICE), ("examples/Other.java", UNRELATED)],
    );
    let mut config = config_for(&pair);
    config.filter.exclude_prefixes = vec!["examples/".to_string()];

    let comparison = compare_trees(&config).unwrap();
    assert_eq!(comparison.before.len(), 1);
    assert_eq!(comparison.after.len(), 1);
    assert_eq!(comparison.result.classified_count(), 1);
    assert!(comparison.result.new_files().is_empty());
}

#[test]
fn test_sequential_and_parallel_agree() {
    let pair = TreePair::new(
        &[
            ("a/One.java", SERVICE),
            ("a/Two.java", UNRELATED),
            ("a/Three.java", SERVICE),
            ("a/Four.java", SERVICE_TWEAKED),
        ],
        &[
            ("a/One.java", SERVICE),
            ("b/Two.java", UNRELATED),
            ("c/Three.java", SERVICE),
            ("d/Three.java", SERVICE),
            ("e/Five.java", SERVICE),
        ],
    );
    let mut config = config_for(&pair);
    config.matching.parallel = true;
    let parallel = compare_trees(&config).unwrap().result;
    config.matching.parallel = false;
    let sequential = compare_trees(&config).unwrap().result;

    assert_eq!(parallel, sequential);
    assert_eq!(parallel.classified_count(), 4);
}

#[test]
fn test_unreadable_content_aborts_run() {
    let pair = TreePair::new(&[], &[("src/Blob.bin", SERVICE)]);
    std::fs::create_dir_all(pair.before().join("src")).unwrap();
    std::fs::write(pair.before().join("src/Blob.bin"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

    let err = compare_trees(&config_for(&pair)).unwrap_err();
    assert!(matches!(err, DiffError::ContentRead { .. }));
}

#[test]
fn test_missing_root_is_reported() {
    let pair = TreePair::new(&[], &[]);
    let mut config = config_for(&pair);
    config.after_root = Some(pair.dir.path().join("does-not-exist"));

    let err = compare_trees(&config).unwrap_err();
    assert!(matches!(err, DiffError::Snapshot(_)));
}
