//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Defaults mirror the serde defaults so that partially specified sections
/// still deserialize, and so that later sources only override what they name.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("matching.similarity_threshold", 0.75)?
        .set_default("matching.close_match_threshold", 0.75)?
        .set_default("matching.parallel", true)?
        .set_default("normalizer.dialect", "plain")?
        .set_default("report.rename_column_width", 80)
}
