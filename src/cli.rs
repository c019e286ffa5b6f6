//! CLI domain: parse, route, help, output, and presentation only.
//! No comparison logic; the single route table dispatches to the api layer.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, CompareArgs};
pub use presentation::{
    format_config, format_full_text, format_renames_json, format_renames_text,
    format_report_json, format_section_heading, format_summary_json, format_summary_text,
    UNRESOLVED_MARKER,
};
pub use route::RunContext;
