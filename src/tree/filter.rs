//! Path filter applied while enumerating a snapshot
//!
//! Rules are evaluated against the `/`-separated relative path (see
//! [`relative_key`](crate::tree::path::relative_key)): excluded prefixes
//! first, then excluded patterns, then the include patterns, which must match
//! when any are configured.

use crate::error::DiffError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Relative-path prefixes to exclude (e.g. "examples/")
    #[serde(default)]
    pub exclude_prefixes: Vec<String>,

    /// Regular expressions; a path containing a match is excluded
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Regular expressions; when non-empty a path must match one of them
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Directory names never descended into
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,

    /// Descend into symlinked directories and index symlinked files
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_ignore_dirs() -> Vec<String> {
    vec![
        ".git".to_string(),
        "target".to_string(),
        "node_modules".to_string(),
        ".cargo".to_string(),
    ]
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            exclude_prefixes: Vec::new(),
            exclude_patterns: Vec::new(),
            include_patterns: Vec::new(),
            ignore_dirs: default_ignore_dirs(),
            follow_symlinks: false,
        }
    }
}

/// Compiled path filter
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    exclude_prefixes: Vec<String>,
    exclude: Vec<Regex>,
    include: Vec<Regex>,
}

impl PathFilter {
    /// Filter accepting every path.
    pub fn accept_all() -> Self {
        Self::default()
    }

    pub fn from_config(config: &FilterConfig) -> Result<Self, DiffError> {
        Ok(Self {
            exclude_prefixes: config.exclude_prefixes.clone(),
            exclude: compile_all(&config.exclude_patterns, "exclude")?,
            include: compile_all(&config.include_patterns, "include")?,
        })
    }

    /// Whether the relative path (in `/`-separated form) is part of the snapshot.
    pub fn accepts(&self, relative: &str) -> bool {
        if self
            .exclude_prefixes
            .iter()
            .any(|prefix| relative.starts_with(prefix.as_str()))
        {
            return false;
        }
        if self.exclude.iter().any(|re| re.is_match(relative)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|re| re.is_match(relative))
    }
}

fn compile_all(patterns: &[String], kind: &str) -> Result<Vec<Regex>, DiffError> {
    patterns
        .iter()
        .map(|p| {
            Regex::new(p).map_err(|e| {
                DiffError::ConfigError(format!("Invalid {} pattern '{}': {}", kind, p, e))
            })
        })
        .collect()
}
