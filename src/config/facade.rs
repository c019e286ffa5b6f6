//! Config loader facade: builds the layered configuration.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::TreematchConfig;
use config::{Config, ConfigError, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads [`TreematchConfig`] from files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `treematch.toml`, `config/{TREEMATCH_ENV}.toml`, `TREEMATCH_*` environment.
    pub fn load(workspace_root: &Path) -> Result<TreematchConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: TreematchConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from a single file, skipping discovery.
    /// Environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<TreematchConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true));
        let builder = environment::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Location of the global config file, if a home directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    /// Defaults only, no files or environment.
    pub fn defaults() -> Result<TreematchConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .build()?
            .try_deserialize()
    }
}
