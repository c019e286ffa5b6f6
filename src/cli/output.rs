//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::DiffError;

/// Map comparison errors to a string for CLI output.
pub fn map_error(e: &DiffError) -> String {
    format!("Error: {}", e)
}
