//! Comparison entry point
//!
//! Builds both snapshots and the comparer from one [`TreematchConfig`] and
//! runs the classifier. Everything the run needs comes through the config;
//! there is no global state.

use crate::compare::comparer::NormalizedTextFactory;
use crate::compare::normalize::Normalizer;
use crate::config::TreematchConfig;
use crate::diff::{DiffResult, Differ};
use crate::error::DiffError;
use crate::report::{DiffReport, Labeler};
use crate::tree::filter::PathFilter;
use crate::tree::snapshot::Snapshot;
use tracing::info;

/// Snapshots and classification of one run
#[derive(Debug, Clone)]
pub struct Comparison {
    pub before: Snapshot,
    pub after: Snapshot,
    pub result: DiffResult,
}

impl Comparison {
    /// Sorted, labelled report of this comparison.
    pub fn report(&self, config: &TreematchConfig) -> Result<DiffReport, DiffError> {
        let labeler = Labeler::from_config(&config.report)?;
        Ok(DiffReport::build(
            &self.result,
            self.before.root(),
            self.after.root(),
            &labeler,
            &config.matching,
        ))
    }
}

/// Validate `config`, returning every problem as one configuration error.
pub fn validate_config(config: &TreematchConfig) -> Result<(), DiffError> {
    config.validate().map_err(|errors| {
        let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        DiffError::ConfigError(format!(
            "Configuration validation failed:\n{}",
            msgs.join("\n")
        ))
    })
}

/// Compare the configured before and after trees.
pub fn compare_trees(config: &TreematchConfig) -> Result<Comparison, DiffError> {
    validate_config(config)?;
    let (before_root, after_root) = config
        .roots()
        .map_err(|e| DiffError::ConfigError(e.to_string()))?;

    let filter = PathFilter::from_config(&config.filter)?;
    let before = Snapshot::build(&before_root, &filter, config.walker_config())?;
    let after = Snapshot::build(&after_root, &filter, config.walker_config())?;
    info!(
        before_files = before.len(),
        after_files = after.len(),
        "Snapshots ready"
    );

    let factory = NormalizedTextFactory::new(Normalizer::from_config(&config.normalizer)?);
    let result = Differ::new(config.matching.clone()).compare(&before, &after, &factory)?;

    Ok(Comparison {
        before,
        after,
        result,
    })
}
