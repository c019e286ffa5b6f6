//! Snapshot index
//!
//! The set of files under one root at comparison time, with a basename index
//! for rename lookups. Built once per root and read-only afterwards, so it can
//! be shared freely between classification workers.

use crate::error::SnapshotError;
use crate::tree::filter::PathFilter;
use crate::tree::path::{basename, canonicalize_root, relative_key};
use crate::tree::walker::{Walker, WalkerConfig};
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of resolving a relative path against a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Absolute path of a file in the snapshot
    Found(PathBuf),
    NotFound,
}

/// Immutable file set of one tree
#[derive(Debug, Clone)]
pub struct Snapshot {
    root: PathBuf,
    files: BTreeSet<PathBuf>,
    by_basename: HashMap<String, Vec<PathBuf>>,
}

impl Snapshot {
    /// Walk `root` and index every file the filter accepts.
    pub fn build(
        root: &Path,
        filter: &PathFilter,
        walker_config: WalkerConfig,
    ) -> Result<Self, SnapshotError> {
        let root = canonicalize_root(root)?;
        let walked = Walker::with_config(root.clone(), walker_config).walk_files()?;
        let total = walked.len();

        let accepted: Vec<PathBuf> = walked
            .into_iter()
            .filter(|p| filter.accepts(&relative_key(p)))
            .collect();

        debug!(
            root = %root.display(),
            walked = total,
            accepted = accepted.len(),
            "Snapshot built"
        );

        Ok(Self::from_paths(root, accepted))
    }

    /// Index an already-enumerated set of relative paths under `root`.
    pub fn from_paths(root: PathBuf, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let files: BTreeSet<PathBuf> = paths.into_iter().collect();

        let mut by_basename: HashMap<String, Vec<PathBuf>> = HashMap::new();
        for path in &files {
            if let Some(name) = basename(path) {
                by_basename.entry(name).or_default().push(path.clone());
            }
        }

        Self {
            root,
            files,
            by_basename,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every relative path in the snapshot, sorted.
    pub fn list_all(&self) -> &BTreeSet<PathBuf> {
        &self.files
    }

    /// Relative paths whose final segment is `name` (sorted, possibly empty).
    pub fn find_by_basename(&self, name: &str) -> &[PathBuf] {
        self.by_basename
            .get(name)
            .map(|paths| paths.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, relative: &Path) -> bool {
        self.files.contains(relative)
    }

    /// Absolute path of `relative`, or [`Lookup::NotFound`] when the snapshot lacks it.
    pub fn try_resolve(&self, relative: &Path) -> Lookup {
        if self.contains(relative) {
            Lookup::Found(self.root.join(relative))
        } else {
            Lookup::NotFound
        }
    }

    /// Absolute path of a relative path the caller expects to be present.
    pub fn to_absolute(&self, relative: &Path) -> Result<PathBuf, SnapshotError> {
        match self.try_resolve(relative) {
            Lookup::Found(path) => Ok(path),
            Lookup::NotFound => Err(SnapshotError::PathNotFound(relative.to_path_buf())),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
