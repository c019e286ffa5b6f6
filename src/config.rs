//! Configuration System
//!
//! Replaces hardcoded roots, filters, thresholds and boilerplate with one
//! explicit structure. Layered sources (defaults, global file, workspace files,
//! environment) are merged by the `config` crate; CLI flags are applied last by
//! the caller.

use crate::compare::normalize::{Normalizer, NormalizerConfig};
use crate::diff::MatchingConfig;
use crate::logging::LoggingConfig;
use crate::report::{Labeler, ReportConfig};
use crate::tree::filter::{FilterConfig, PathFilter};
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreematchConfig {
    /// Tree before the migration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_root: Option<PathBuf>,

    /// Tree after the migration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_root: Option<PathBuf>,

    /// Which files take part in the comparison
    #[serde(default)]
    pub filter: FilterConfig,

    /// Classification thresholds
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Boilerplate stripped before scoring
    #[serde(default)]
    pub normalizer: NormalizerConfig,

    /// Report labels and layout
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Roots(String),
    Filter(String),
    Matching(String),
    Normalizer(String),
    Report(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Roots(msg) => write!(f, "Roots: {}", msg),
            ValidationError::Filter(msg) => write!(f, "Filter: {}", msg),
            ValidationError::Matching(msg) => write!(f, "Matching: {}", msg),
            ValidationError::Normalizer(msg) => write!(f, "Normalizer: {}", msg),
            ValidationError::Report(msg) => write!(f, "Report: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl TreematchConfig {
    /// Validate the entire configuration, collecting every problem.
    ///
    /// Roots are optional here; [`TreematchConfig::roots`] checks them when a
    /// comparison actually needs them.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = PathFilter::from_config(&self.filter) {
            errors.push(ValidationError::Filter(e.to_string()));
        }
        if let Err(e) = self.matching.validate() {
            errors.push(ValidationError::Matching(e));
        }
        if let Err(e) = Normalizer::from_config(&self.normalizer) {
            errors.push(ValidationError::Normalizer(e.to_string()));
        }
        if let Err(e) = Labeler::from_config(&self.report) {
            errors.push(ValidationError::Report(e.to_string()));
        }
        if self.report.rename_column_width == 0 {
            errors.push(ValidationError::Report(
                "rename_column_width must be positive".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Both roots, or a validation error naming the missing one.
    pub fn roots(&self) -> Result<(PathBuf, PathBuf), ValidationError> {
        match (&self.before_root, &self.after_root) {
            (Some(before), Some(after)) => Ok((before.clone(), after.clone())),
            (None, _) => Err(ValidationError::Roots(
                "before_root is not set (use --before or the before_root setting)".to_string(),
            )),
            (_, None) => Err(ValidationError::Roots(
                "after_root is not set (use --after or the after_root setting)".to_string(),
            )),
        }
    }

    /// Walker settings derived from the filter section.
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.filter.follow_symlinks,
            ignore_dirs: self.filter.ignore_dirs.clone(),
        }
    }
}
