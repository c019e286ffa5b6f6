//! Treematch: Source Tree Reconciliation
//!
//! Compares two snapshots of a source tree taken before and after a large
//! restructuring and classifies every file as unchanged, moved, ambiguous or
//! new, using letter-pair similarity over normalized file content.

pub mod api;
pub mod cli;
pub mod compare;
pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod report;
pub mod tree;
