//! CLI route: single route table and run context. Dispatches to the comparison
//! entry point and presentation.

use crate::api::{compare_trees, validate_config};
use crate::cli::parse::{CompareArgs, Commands};
use crate::cli::presentation::{
    format_config, format_full_text, format_renames_text, format_report_json,
    format_renames_json, format_summary_json, format_summary_text,
};
use crate::config::{ConfigLoader, TreematchConfig};
use crate::error::DiffError;
use crate::report::DiffReport;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Runtime context for CLI execution: workspace and loaded configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: TreematchConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, DiffError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self::from_config(workspace_root, config))
    }

    /// Create run context from an already-loaded configuration. Relative roots
    /// in the configuration are taken relative to the workspace.
    pub fn from_config(workspace_root: PathBuf, mut config: TreematchConfig) -> Self {
        config.before_root = config
            .before_root
            .map(|p| resolve_against(&workspace_root, p));
        config.after_root = config
            .after_root
            .map(|p| resolve_against(&workspace_root, p));
        Self {
            workspace_root,
            config,
        }
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn config(&self) -> &TreematchConfig {
        &self.config
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, DiffError> {
        match command {
            Commands::Compare { args } => {
                let (report, config) = self.run_comparison(args)?;
                match args.format.as_str() {
                    "json" => format_report_json(&report),
                    _ => Ok(format!(
                        "{}\n{}\n{}",
                        format_summary_text(&report),
                        format_full_text(&report),
                        format_renames_text(&report, config.report.rename_column_width)
                    )),
                }
            }
            Commands::Summary { args } => {
                let (report, _) = self.run_comparison(args)?;
                match args.format.as_str() {
                    "json" => format_summary_json(&report),
                    _ => Ok(format_summary_text(&report)),
                }
            }
            Commands::Renames { args } => {
                let (report, config) = self.run_comparison(args)?;
                match args.format.as_str() {
                    "json" => format_renames_json(&report),
                    _ => Ok(format_renames_text(
                        &report,
                        config.report.rename_column_width,
                    )),
                }
            }
            Commands::Config { format } => {
                validate_config(&self.config)?;
                format_config(&self.config, format)
            }
        }
    }

    /// Effective configuration for a comparison command: loaded config plus flags.
    pub fn effective_config(&self, args: &CompareArgs) -> TreematchConfig {
        let mut config = self.config.clone();
        if let Some(ref before) = args.before {
            config.before_root = Some(before.clone());
        }
        if let Some(ref after) = args.after {
            config.after_root = Some(after.clone());
        }
        if let Some(threshold) = args.threshold {
            config.matching.similarity_threshold = threshold;
        }
        if args.sequential {
            config.matching.parallel = false;
        }
        config
    }

    fn run_comparison(
        &self,
        args: &CompareArgs,
    ) -> Result<(DiffReport, TreematchConfig), DiffError> {
        if args.format != "text" && args.format != "json" {
            return Err(DiffError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                args.format
            )));
        }

        let config = self.effective_config(args);
        let started = Instant::now();
        let comparison = compare_trees(&config)?;
        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Comparison finished"
        );

        let report = comparison.report(&config)?;
        Ok((report, config))
    }
}

fn resolve_against(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
