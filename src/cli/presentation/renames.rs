//! Renames view: one line per moved or ambiguous file, old label padded to a column.

use crate::error::DiffError;
use crate::report::DiffReport;
use serde_json::json;

/// Shown in place of a target when no single candidate stands out.
pub const UNRESOLVED_MARKER: &str = "????????????????";

pub fn format_renames_text(report: &DiffReport, column_width: usize) -> String {
    let rows = report.renames();
    let mut out = String::from("Moved files:\n");
    for row in rows.iter().filter(|r| r.moved) {
        out.push_str(&format_row(&row.from, row.to.as_deref(), column_width));
    }
    out.push_str("\nAmbiguous moved files:\n");
    for row in rows.iter().filter(|r| !r.moved) {
        out.push_str(&format_row(&row.from, row.to.as_deref(), column_width));
    }
    out
}

fn format_row(from: &str, to: Option<&str>, width: usize) -> String {
    format!(
        "{:<width$} : {}\n",
        from,
        to.unwrap_or(UNRESOLVED_MARKER),
        width = width
    )
}

pub fn format_renames_json(report: &DiffReport) -> Result<String, DiffError> {
    let rows = report.renames();
    let out = json!({ "renames": rows, "total": rows.len() });
    Ok(serde_json::to_string_pretty(&out)?)
}
