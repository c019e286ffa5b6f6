//! Matcher/classifier
//!
//! For each before-path: an exact relative path in the after-snapshot wins
//! outright; otherwise same-basename candidates anywhere in the after tree
//! are scored. A single candidate at or above the similarity threshold is a
//! move; anything else is ambiguous and left to a human. Every candidate an
//! ambiguous record mentions counts as claimed when computing new files.
//!
//! Paths are classified independently, so the scan runs on a rayon pool when
//! `parallel` is set. Records are collected in before-snapshot order and
//! frozen into a [`DiffResult`] in one step.

use crate::compare::comparer::{ComparerFactory, FileComparer};
use crate::diff::{
    AmbiguityReason, AmbiguousResult, Classification, DiffResult, MovedResult, UnchangedResult,
};
use crate::error::DiffError;
use crate::tree::path::basename;
use crate::tree::snapshot::{Lookup, Snapshot};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Classification policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum score for a same-path or single-candidate match (inclusive)
    #[serde(default = "default_threshold")]
    pub similarity_threshold: f64,

    /// Score a candidate must exceed to count as close when guessing renames
    #[serde(default = "default_threshold")]
    pub close_match_threshold: f64,

    /// Classify before-paths on the rayon thread pool
    #[serde(default = "default_true")]
    pub parallel: bool,
}

fn default_threshold() -> f64 {
    0.75
}

fn default_true() -> bool {
    true
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_threshold(),
            close_match_threshold: default_threshold(),
            parallel: default_true(),
        }
    }
}

impl MatchingConfig {
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("similarity_threshold", self.similarity_threshold),
            ("close_match_threshold", self.close_match_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be within [0, 1], got {}", name, value));
            }
        }
        Ok(())
    }
}

/// Compares a before-snapshot against an after-snapshot.
#[derive(Debug, Clone, Default)]
pub struct Differ {
    config: MatchingConfig,
}

impl Differ {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Classify every before-path. Any read failure aborts the whole run.
    pub fn compare<F: ComparerFactory>(
        &self,
        before: &Snapshot,
        after: &Snapshot,
        factory: &F,
    ) -> Result<DiffResult, DiffError> {
        info!(
            before = %before.root().display(),
            after = %after.root().display(),
            before_files = before.len(),
            after_files = after.len(),
            "Comparing snapshots"
        );

        let paths: Vec<&PathBuf> = before.list_all().iter().collect();
        let records: Vec<Classification> = if self.config.parallel {
            paths
                .par_iter()
                .map(|path| self.classify_path(path, before, after, factory))
                .collect::<Result<Vec<_>, DiffError>>()?
        } else {
            paths
                .iter()
                .map(|path| self.classify_path(path, before, after, factory))
                .collect::<Result<Vec<_>, DiffError>>()?
        };

        let result = DiffResult::from_records(records, after.list_all());

        info!(
            unchanged = result.unchanged().len(),
            moved = result.moved().len(),
            ambiguous = result.ambiguous().len(),
            new = result.new_files().len(),
            "Comparison complete"
        );

        Ok(result)
    }

    /// Classify a single before-path.
    pub fn classify_path<F: ComparerFactory>(
        &self,
        path: &Path,
        before: &Snapshot,
        after: &Snapshot,
        factory: &F,
    ) -> Result<Classification, DiffError> {
        debug!(path = %path.display(), "Classifying");

        let comparer = factory.comparer_for(&before.to_absolute(path)?)?;
        let threshold = self.config.similarity_threshold;

        // Exact path match short-circuits the basename search.
        if let Lookup::Found(after_abs) = after.try_resolve(path) {
            let similarity = comparer.similarity(&after_abs)?;
            return Ok(if similarity >= threshold {
                Classification::Unchanged(UnchangedResult {
                    path: path.to_path_buf(),
                    similarity,
                })
            } else {
                Classification::Ambiguous(AmbiguousResult {
                    orig_path: path.to_path_buf(),
                    candidates: BTreeMap::from([(path.to_path_buf(), similarity)]),
                    reason: AmbiguityReason::SignificantChangeAtSamePath,
                })
            });
        }

        let contenders: &[PathBuf] = match basename(path) {
            Some(name) => after.find_by_basename(&name),
            None => &[],
        };

        match contenders {
            [] => Ok(Classification::Ambiguous(AmbiguousResult {
                orig_path: path.to_path_buf(),
                candidates: BTreeMap::new(),
                reason: AmbiguityReason::NoFileWithSameName,
            })),
            [new_path] => {
                let similarity = comparer.similarity(&after.to_absolute(new_path)?)?;
                Ok(if similarity >= threshold {
                    Classification::Moved(MovedResult {
                        orig_path: path.to_path_buf(),
                        new_path: new_path.clone(),
                        similarity,
                    })
                } else {
                    Classification::Ambiguous(AmbiguousResult {
                        orig_path: path.to_path_buf(),
                        candidates: BTreeMap::from([(new_path.clone(), similarity)]),
                        reason: AmbiguityReason::MovedFileSignificantlyChanged,
                    })
                })
            }
            many => {
                let mut candidates = BTreeMap::new();
                for new_path in many {
                    let similarity = comparer.similarity(&after.to_absolute(new_path)?)?;
                    candidates.insert(new_path.clone(), similarity);
                }
                Ok(Classification::Ambiguous(AmbiguousResult {
                    orig_path: path.to_path_buf(),
                    candidates,
                    reason: AmbiguityReason::MultipleFilesWithSameName,
                }))
            }
        }
    }
}
