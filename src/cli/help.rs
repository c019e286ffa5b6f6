//! CLI command-name contract for logging spans.

use crate::cli::parse::Commands;

/// Command name string for log spans (e.g. "compare", "renames").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Compare { .. } => "compare",
        Commands::Summary { .. } => "summary",
        Commands::Renames { .. } => "renames",
        Commands::Config { .. } => "config",
    }
}
