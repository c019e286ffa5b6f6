//! Best-guess rename suggestions for ambiguous records
//!
//! Read-only: a guess never turns an ambiguous record into a move.

use crate::diff::AmbiguousResult;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of guessing a single rename target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "path")]
pub enum BestGuess {
    /// The only candidate scoring above the close-match threshold
    Probable(PathBuf),
    Unresolved,
}

impl BestGuess {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            BestGuess::Probable(path) => Some(path),
            BestGuess::Unresolved => None,
        }
    }
}

/// Pick the probable rename target of an ambiguous record.
///
/// Candidates scoring strictly above `close_threshold` are close; exactly one
/// close candidate is the guess, zero or several leave it unresolved.
pub fn best_guess(record: &AmbiguousResult, close_threshold: f64) -> BestGuess {
    let mut close = record
        .candidates
        .iter()
        .filter(|(_, score)| **score > close_threshold)
        .map(|(path, _)| path);

    match (close.next(), close.next()) {
        (Some(path), None) => BestGuess::Probable(path.clone()),
        _ => BestGuess::Unresolved,
    }
}
