//! Error types for snapshot enumeration and tree comparison.

use std::path::PathBuf;
use thiserror::Error;

/// Snapshot-related errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Path not found in snapshot: {0}")]
    PathNotFound(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Snapshot I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors surfaced by a comparison run
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Failed to read {}: {source}", path.display())]
    ContentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Report error: {0}")]
    Report(String),
}

impl From<config::ConfigError> for DiffError {
    fn from(err: config::ConfigError) -> Self {
        DiffError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for DiffError {
    fn from(err: serde_json::Error) -> Self {
        DiffError::Report(err.to_string())
    }
}
