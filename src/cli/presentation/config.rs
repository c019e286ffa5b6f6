//! Effective configuration presentation.

use crate::config::TreematchConfig;
use crate::error::DiffError;

pub fn format_config(config: &TreematchConfig, format: &str) -> Result<String, DiffError> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(config)?),
        "text" => toml::to_string_pretty(config)
            .map_err(|e| DiffError::Report(format!("Failed to render configuration: {}", e))),
        other => Err(DiffError::ConfigError(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}
