//! CLI presentation: text and json formatters per command family.

mod config;
mod renames;
mod report;

pub use config::format_config;
pub use renames::{format_renames_json, format_renames_text, UNRESOLVED_MARKER};
pub use report::{
    format_full_text, format_report_json, format_section_heading, format_summary_json,
    format_summary_text,
};
