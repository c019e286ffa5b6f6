//! Filesystem walker for enumerating the files under a snapshot root

use crate::error::SnapshotError;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false for determinism)
    pub follow_symlinks: bool,
    /// Directory names never descended into (e.g., ".git", "target")
    pub ignore_dirs: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_dirs: vec![
                ".git".to_string(),
                "target".to_string(),
                "node_modules".to_string(),
                ".cargo".to_string(),
            ],
        }
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect every regular file, relative to the root
    ///
    /// Returns paths sorted for determinism.
    pub fn walk_files(&self) -> Result<Vec<PathBuf>, SnapshotError> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .into_iter()
            .filter_entry(|entry| !self.should_ignore(entry));

        for entry in walker {
            let entry = entry.map_err(|e| {
                SnapshotError::IoError(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Failed to walk directory: {}", e),
                ))
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .map_err(|_| {
                    SnapshotError::InvalidPath(format!(
                        "{} is not under {}",
                        entry.path().display(),
                        self.root.display()
                    ))
                })?
                .to_path_buf();
            files.push(relative);
        }

        files.sort();
        Ok(files)
    }

    /// Check if a directory entry is one of the ignored directory names
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        self.config.ignore_dirs.iter().any(|d| d.as_str() == name)
    }
}
