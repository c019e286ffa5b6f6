//! File tree snapshots
//!
//! Enumerates the files under a root, filters them, and indexes them by
//! relative path and by basename.

pub mod filter;
pub mod path;
pub mod snapshot;
pub mod walker;

pub use filter::{FilterConfig, PathFilter};
pub use snapshot::{Lookup, Snapshot};
pub use walker::{Walker, WalkerConfig};
