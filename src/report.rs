//! Comparison report
//!
//! Sorted, labelled view of a [`DiffResult`] ready for presentation. Sorting
//! and labels are presentation concerns only; the classification itself is
//! order independent.

use crate::diff::{best_guess, AmbiguityReason, BestGuess, DiffResult, MatchingConfig};
use crate::error::DiffError;
use crate::tree::path::relative_key;
use chrono::{SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Regex whose first capture group, with `/` turned into `.`, labels a path
    /// (e.g. `.*src.main.java(.*)\.(java|groovy)$` yields Java class names)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_pattern: Option<String>,

    /// Width of the left column in the renames view
    #[serde(default = "default_rename_column_width")]
    pub rename_column_width: usize,
}

fn default_rename_column_width() -> usize {
    80
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            label_pattern: None,
            rename_column_width: default_rename_column_width(),
        }
    }
}

/// Derives display labels from relative paths.
#[derive(Debug, Clone, Default)]
pub struct Labeler {
    pattern: Option<Regex>,
}

impl Labeler {
    pub fn from_config(config: &ReportConfig) -> Result<Self, DiffError> {
        let pattern = config
            .label_pattern
            .as_deref()
            .map(|p| {
                Regex::new(p).map_err(|e| {
                    DiffError::ConfigError(format!("Invalid label pattern '{}': {}", p, e))
                })
            })
            .transpose()?;
        Ok(Self { pattern })
    }

    /// Label for `path`; the plain relative path when no pattern is set or it doesn't match.
    pub fn label(&self, path: &Path) -> String {
        let key = relative_key(path);
        let Some(pattern) = &self.pattern else {
            return key;
        };
        let Some(group) = pattern.captures(&key).and_then(|c| c.get(1)) else {
            return key;
        };
        let dotted = group.as_str().replace(['/', '\\'], ".");
        let trimmed = dotted.trim_matches('.');
        if trimmed.is_empty() {
            key
        } else {
            trimmed.to_string()
        }
    }
}

/// Record counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounts {
    pub unchanged: usize,
    pub moved: usize,
    pub ambiguous: usize,
    pub new: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnchangedEntry {
    pub path: PathBuf,
    pub label: String,
    pub similarity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovedEntry {
    pub orig_path: PathBuf,
    pub orig_label: String,
    pub new_path: PathBuf,
    pub new_label: String,
    pub similarity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateEntry {
    pub path: PathBuf,
    pub label: String,
    pub similarity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmbiguousEntry {
    pub orig_path: PathBuf,
    pub orig_label: String,
    pub reason: AmbiguityReason,
    pub message: String,
    pub candidates: Vec<CandidateEntry>,
    pub best_guess: BestGuess,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_guess_label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: PathBuf,
    pub label: String,
}

/// One line of the renames view: a move, or an ambiguous file with its guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRow {
    pub from: String,
    /// `None` when the guess is unresolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub moved: bool,
}

/// Full comparison report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffReport {
    pub generated_at: String,
    pub before_root: PathBuf,
    pub after_root: PathBuf,
    pub similarity_threshold: f64,
    pub summary: SummaryCounts,
    pub unchanged: Vec<UnchangedEntry>,
    pub moved: Vec<MovedEntry>,
    pub ambiguous: Vec<AmbiguousEntry>,
    pub new_files: Vec<FileEntry>,
}

impl DiffReport {
    /// Build a sorted, labelled report.
    pub fn build(
        result: &DiffResult,
        before_root: &Path,
        after_root: &Path,
        labeler: &Labeler,
        matching: &MatchingConfig,
    ) -> Self {
        let mut unchanged: Vec<UnchangedEntry> = result
            .unchanged()
            .iter()
            .map(|r| UnchangedEntry {
                path: r.path.clone(),
                label: labeler.label(&r.path),
                similarity: r.similarity,
            })
            .collect();
        unchanged.sort_by(|a, b| a.path.cmp(&b.path));

        let mut moved: Vec<MovedEntry> = result
            .moved()
            .iter()
            .map(|r| MovedEntry {
                orig_path: r.orig_path.clone(),
                orig_label: labeler.label(&r.orig_path),
                new_path: r.new_path.clone(),
                new_label: labeler.label(&r.new_path),
                similarity: r.similarity,
            })
            .collect();
        moved.sort_by(|a, b| a.orig_path.cmp(&b.orig_path));

        let mut ambiguous: Vec<AmbiguousEntry> = result
            .ambiguous()
            .iter()
            .map(|r| {
                let guess = best_guess(r, matching.close_match_threshold);
                AmbiguousEntry {
                    orig_path: r.orig_path.clone(),
                    orig_label: labeler.label(&r.orig_path),
                    reason: r.reason,
                    message: r.reason.to_string(),
                    candidates: r
                        .candidates
                        .iter()
                        .map(|(path, similarity)| CandidateEntry {
                            path: path.clone(),
                            label: labeler.label(path),
                            similarity: *similarity,
                        })
                        .collect(),
                    best_guess_label: guess.path().map(|p| labeler.label(p)),
                    best_guess: guess,
                }
            })
            .collect();
        ambiguous.sort_by(|a, b| a.orig_path.cmp(&b.orig_path));

        let mut new_files: Vec<FileEntry> = result
            .new_files()
            .iter()
            .map(|p| FileEntry {
                path: p.clone(),
                label: labeler.label(p),
            })
            .collect();
        new_files.sort_by(|a, b| a.path.cmp(&b.path));

        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            before_root: before_root.to_path_buf(),
            after_root: after_root.to_path_buf(),
            similarity_threshold: matching.similarity_threshold,
            summary: SummaryCounts {
                unchanged: unchanged.len(),
                moved: moved.len(),
                ambiguous: ambiguous.len(),
                new: new_files.len(),
            },
            unchanged,
            moved,
            ambiguous,
            new_files,
        }
    }

    /// Moves first, then every ambiguous file with its best guess.
    pub fn renames(&self) -> Vec<RenameRow> {
        let moved = self.moved.iter().map(|m| RenameRow {
            from: m.orig_label.clone(),
            to: Some(m.new_label.clone()),
            moved: true,
        });
        let guessed = self.ambiguous.iter().map(|a| RenameRow {
            from: a.orig_label.clone(),
            to: a.best_guess_label.clone(),
            moved: false,
        });
        moved.chain(guessed).collect()
    }
}
