//! Path canonicalization and normalization utilities

use crate::error::SnapshotError;
use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a snapshot root
///
/// Resolves symlinks, `..` and `.` (via `dunce`, so Windows roots stay free of
/// the `\\?\` prefix) and rejects anything that is not a directory.
pub fn canonicalize_root(path: &Path) -> Result<PathBuf, SnapshotError> {
    let canonical = dunce::canonicalize(path).map_err(|e| {
        SnapshotError::InvalidPath(format!(
            "Failed to canonicalize root {}: {}",
            path.display(),
            e
        ))
    })?;

    if !canonical.is_dir() {
        return Err(SnapshotError::InvalidPath(format!(
            "Root is not a directory: {}",
            canonical.display()
        )));
    }

    Ok(canonical)
}

/// String form of a relative path used for filtering and display
///
/// Components joined with `/` on every platform, Unicode normalized to NFC.
pub fn relative_key(path: &Path) -> String {
    let joined = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    joined.nfc().collect()
}

/// Final path segment, if any
pub fn basename(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}
