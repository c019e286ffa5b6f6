//! CLI parse: clap types for treematch. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// treematch - reconcile two snapshots of a source tree
#[derive(Parser)]
#[command(name = "treematch")]
#[command(about = "Find unchanged, moved, ambiguous and new files between two source trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace directory searched for treematch.toml
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Options shared by every command that runs a comparison
#[derive(Args, Debug, Clone, Default)]
pub struct CompareArgs {
    /// Tree before the migration (overrides before_root)
    #[arg(long)]
    pub before: Option<PathBuf>,

    /// Tree after the migration (overrides after_root)
    #[arg(long)]
    pub after: Option<PathBuf>,

    /// Same-file similarity threshold in [0, 1]
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Classify sequentially instead of on the thread pool
    #[arg(long)]
    pub sequential: bool,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two trees and print the full report
    Compare {
        #[command(flatten)]
        args: CompareArgs,
    },
    /// Compare two trees and print only the counts
    Summary {
        #[command(flatten)]
        args: CompareArgs,
    },
    /// Compare two trees and print moved files and rename guesses
    Renames {
        #[command(flatten)]
        args: CompareArgs,
    },
    /// Print the effective configuration
    Config {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
