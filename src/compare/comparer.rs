//! File comparers: read, normalize and score pairs of files.

use crate::compare::normalize::Normalizer;
use crate::compare::similarity::letter_pair_similarity;
use crate::error::DiffError;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Scores files against one before-file whose content has already been read.
pub trait FileComparer {
    /// Similarity between the bound before-file and the file at `after`: 1.0
    /// means identical normalized content, 0.0 means nothing in common.
    fn similarity(&self, after: &Path) -> Result<f64, DiffError>;
}

/// Creates a [`FileComparer`] bound to a before-file.
///
/// Factories are shared across classification workers, hence `Sync`.
pub trait ComparerFactory: Sync {
    type Comparer: FileComparer;

    fn comparer_for(&self, before: &Path) -> Result<Self::Comparer, DiffError>;
}

/// Read a file as text, normalized for comparison.
pub fn read_normalized_text(normalizer: &Normalizer, path: &Path) -> Result<String, DiffError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DiffError::ContentRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalizer.normalize(&raw))
}

/// Factory for [`NormalizedTextComparer`]s sharing one normalizer.
#[derive(Debug, Clone)]
pub struct NormalizedTextFactory {
    normalizer: Arc<Normalizer>,
}

impl NormalizedTextFactory {
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer: Arc::new(normalizer),
        }
    }
}

impl ComparerFactory for NormalizedTextFactory {
    type Comparer = NormalizedTextComparer;

    fn comparer_for(&self, before: &Path) -> Result<NormalizedTextComparer, DiffError> {
        let text = read_normalized_text(&self.normalizer, before)?;
        Ok(NormalizedTextComparer {
            normalizer: Arc::clone(&self.normalizer),
            before: before.to_path_buf(),
            text,
        })
    }
}

/// Letter-pair comparer over normalized file text.
#[derive(Debug)]
pub struct NormalizedTextComparer {
    normalizer: Arc<Normalizer>,
    before: PathBuf,
    text: String,
}

impl NormalizedTextComparer {
    pub fn before(&self) -> &Path {
        &self.before
    }
}

impl FileComparer for NormalizedTextComparer {
    fn similarity(&self, after: &Path) -> Result<f64, DiffError> {
        let other = read_normalized_text(&self.normalizer, after)?;
        Ok(letter_pair_similarity(&self.text, &other))
    }
}
