//! CLI routing and report rendering against real trees

use super::test_utils::{with_isolated_env, TreePair};
use clap::Parser;
use tempfile::TempDir;
use treematch::cli::{Cli, RunContext, UNRESOLVED_MARKER};
use treematch::report::DiffReport;

const UTIL: &str = "package org.example.util;\n\npublic final class Strings {\n    public static boolean isBlank(String s) {\n        return s == null || s.trim().isEmpty();\n    }\n}\n";
const UTIL_MOVED: &str = "package org.example.common;\n\npublic final class Strings {\n    public static boolean isBlank(String s) {\n        return s == null || s.trim().isEmpty();\n    }\n}\n";

fn migration() -> TreePair {
    TreePair::new(
        &[
            ("core/src/main/java/org/example/util/Strings.java", UTIL),
            ("core/src/main/java/org/example/util/Dropped.java", UTIL),
            ("core/src/main/java/org/example/Same.java", UTIL),
        ],
        &[
            ("common/src/main/java/org/example/common/Strings.java", UTIL_MOVED),
            ("core/src/main/java/org/example/Same.java", UTIL),
            ("core/src/main/java/org/example/Added.java", UTIL),
        ],
    )
}

fn run(workspace: &TempDir, pair: &TreePair, command: &[&str]) -> String {
    let ws = workspace.path().to_string_lossy().to_string();
    let before = pair.before().to_string_lossy().to_string();
    let after = pair.after().to_string_lossy().to_string();

    let mut argv = vec!["treematch", "--workspace", ws.as_str()];
    argv.extend_from_slice(command);
    argv.extend_from_slice(&["--before", before.as_str(), "--after", after.as_str()]);
    let cli = Cli::try_parse_from(argv).unwrap();

    with_isolated_env(workspace, |_| {
        let ctx = RunContext::new(cli.workspace.clone(), cli.config.clone()).unwrap();
        ctx.execute(&cli.command).unwrap()
    })
}

#[test]
fn test_compare_json_report() {
    let workspace = TempDir::new().unwrap();
    let pair = migration();
    let out = run(&workspace, &pair, &["compare", "--format", "json"]);

    let report: DiffReport = serde_json::from_str(&out).unwrap();
    assert_eq!(report.summary.unchanged, 1);
    assert_eq!(report.summary.moved, 1);
    assert_eq!(report.summary.ambiguous, 1);
    assert_eq!(report.summary.new, 1);
    assert_eq!(
        report.new_files[0].label,
        "core/src/main/java/org/example/Added.java"
    );
}

#[test]
fn test_renames_use_configured_labels() {
    let workspace = TempDir::new().unwrap();
    std::fs::write(
        workspace.path().join("treematch.toml"),
        "[report]\nlabel_pattern = '.*src.main.java(.*)\\.(java|groovy)$'\nrename_column_width = 40\n",
    )
    .unwrap();
    let pair = migration();
    let out = run(&workspace, &pair, &["renames"]);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Moved files:");
    assert_eq!(
        lines[1],
        format!(
            "{:<40} : {}",
            "org.example.util.Strings", "org.example.common.Strings"
        )
    );
    assert_eq!(lines[3], "Ambiguous moved files:");
    assert_eq!(
        lines[4],
        format!("{:<40} : {}", "org.example.util.Dropped", UNRESOLVED_MARKER)
    );
}

#[test]
fn test_summary_text_and_threshold_flag() {
    let workspace = TempDir::new().unwrap();
    let pair = migration();

    let text = run(&workspace, &pair, &["summary"]);
    assert!(text.contains("Moved"));
    assert!(text.contains("New"));

    // A threshold of 1.0 demotes the edited move to ambiguous.
    let json = run(
        &workspace,
        &pair,
        &["summary", "--format", "json", "--threshold", "1.0"],
    );
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["moved"], 0);
    assert_eq!(value["summary"]["ambiguous"], 2);
    assert_eq!(value["similarity_threshold"], 1.0);
}

#[test]
fn test_config_command_prints_effective_settings() {
    let workspace = TempDir::new().unwrap();
    std::fs::write(
        workspace.path().join("treematch.toml"),
        "[normalizer]\ndialect = \"java\"\n",
    )
    .unwrap();
    let ws = workspace.path().to_string_lossy().to_string();
    let cli = Cli::try_parse_from(["treematch", "--workspace", ws.as_str(), "config"]).unwrap();

    let out = with_isolated_env(&workspace, |_| {
        RunContext::new(cli.workspace.clone(), cli.config.clone())
            .unwrap()
            .execute(&cli.command)
            .unwrap()
    });
    assert!(out.contains("dialect = \"java\""));
}
