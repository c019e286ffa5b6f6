//! Tree comparison
//!
//! Classification records produced by the [`Differ`] and the frozen
//! [`DiffResult`] that partitions the before-snapshot.

pub mod classify;
pub mod resolve;

pub use classify::{Differ, MatchingConfig};
pub use resolve::{best_guess, BestGuess};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

/// A before-path found at the same relative path after, with similar content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnchangedResult {
    pub path: PathBuf,
    pub similarity: f64,
}

/// A before-path matched to the single same-named after-path elsewhere in the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovedResult {
    pub orig_path: PathBuf,
    pub new_path: PathBuf,
    pub similarity: f64,
}

/// Why a before-path could not be matched with confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityReason {
    SignificantChangeAtSamePath,
    MovedFileSignificantlyChanged,
    NoFileWithSameName,
    MultipleFilesWithSameName,
}

impl fmt::Display for AmbiguityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            AmbiguityReason::SignificantChangeAtSamePath => "significant change at same path",
            AmbiguityReason::MovedFileSignificantlyChanged => "moved file significantly changed",
            AmbiguityReason::NoFileWithSameName => "no file with same name",
            AmbiguityReason::MultipleFilesWithSameName => "multiple files with same name",
        };
        f.write_str(msg)
    }
}

/// A before-path with zero, several, or only low-scoring after-path candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbiguousResult {
    pub orig_path: PathBuf,
    /// Candidate after-path -> similarity
    pub candidates: BTreeMap<PathBuf, f64>,
    pub reason: AmbiguityReason,
}

/// Outcome for a single before-path
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Unchanged(UnchangedResult),
    Moved(MovedResult),
    Ambiguous(AmbiguousResult),
}

impl Classification {
    /// The before-path this record classifies.
    pub fn before_path(&self) -> &PathBuf {
        match self {
            Classification::Unchanged(r) => &r.path,
            Classification::Moved(r) => &r.orig_path,
            Classification::Ambiguous(r) => &r.orig_path,
        }
    }
}

/// Partition of a before-snapshot, plus the after-paths nothing claimed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffResult {
    unchanged: Vec<UnchangedResult>,
    moved: Vec<MovedResult>,
    ambiguous: Vec<AmbiguousResult>,
    new_files: Vec<PathBuf>,
}

impl DiffResult {
    /// Freeze per-path records into a result. `after_paths` is every path of
    /// the after-snapshot; those not claimed by a record become new files.
    pub fn from_records<'a>(
        records: Vec<Classification>,
        after_paths: impl IntoIterator<Item = &'a PathBuf>,
    ) -> Self {
        let mut unchanged = Vec::new();
        let mut moved = Vec::new();
        let mut ambiguous = Vec::new();

        for record in records {
            match record {
                Classification::Unchanged(r) => unchanged.push(r),
                Classification::Moved(r) => moved.push(r),
                Classification::Ambiguous(r) => ambiguous.push(r),
            }
        }

        let mut claimed: BTreeSet<&PathBuf> = BTreeSet::new();
        claimed.extend(unchanged.iter().map(|r| &r.path));
        claimed.extend(moved.iter().map(|r| &r.new_path));
        for r in &ambiguous {
            claimed.extend(r.candidates.keys());
        }

        let new_files = after_paths
            .into_iter()
            .filter(|p| !claimed.contains(p))
            .cloned()
            .collect();

        Self {
            unchanged,
            moved,
            ambiguous,
            new_files,
        }
    }

    pub fn unchanged(&self) -> &[UnchangedResult] {
        &self.unchanged
    }

    pub fn moved(&self) -> &[MovedResult] {
        &self.moved
    }

    pub fn ambiguous(&self) -> &[AmbiguousResult] {
        &self.ambiguous
    }

    pub fn new_files(&self) -> &[PathBuf] {
        &self.new_files
    }

    /// Number of before-paths classified.
    pub fn classified_count(&self) -> usize {
        self.unchanged.len() + self.moved.len() + self.ambiguous.len()
    }
}
