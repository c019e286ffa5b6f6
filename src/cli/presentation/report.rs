//! Comparison report presentation: summary table, full listing and json.

use crate::error::DiffError;
use crate::report::DiffReport;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn format_score(similarity: f64) -> String {
    format!("{:.3}", similarity)
}

/// Counts per category as a table.
pub fn format_summary_text(report: &DiffReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Summary")));
    out.push_str(&format!("  Before: {}\n", report.before_root.display()));
    out.push_str(&format!("  After:  {}\n", report.after_root.display()));
    out.push_str(&format!(
        "  Threshold: {}\n\n",
        format_score(report.similarity_threshold)
    ));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Category", "Files"]);
    table.add_row(vec!["Unchanged".to_string(), report.summary.unchanged.to_string()]);
    table.add_row(vec!["Moved".to_string(), report.summary.moved.to_string()]);
    table.add_row(vec!["Ambiguous".to_string(), report.summary.ambiguous.to_string()]);
    table.add_row(vec!["New".to_string(), report.summary.new.to_string()]);
    out.push_str(&format!("{}\n", table));
    out
}

/// Every record, grouped by category.
pub fn format_full_text(report: &DiffReport) -> String {
    let mut out = String::new();

    if !report.moved.is_empty() {
        out.push_str(&format!(
            "{}\n\n",
            format_section_heading(&format!("Moved ({})", report.moved.len()))
        ));
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["From", "To", "Similarity"]);
        for m in &report.moved {
            table.add_row(vec![
                m.orig_label.clone(),
                m.new_label.clone(),
                format_score(m.similarity),
            ]);
        }
        out.push_str(&format!("{}\n\n", table));
    }

    if !report.ambiguous.is_empty() {
        out.push_str(&format!(
            "{}\n\n",
            format_section_heading(&format!("Ambiguous ({})", report.ambiguous.len()))
        ));
        for a in &report.ambiguous {
            out.push_str(&format!("  {}: {}\n", a.orig_label, a.message));
            for c in &a.candidates {
                out.push_str(&format!(
                    "      {} {}\n",
                    format_score(c.similarity),
                    c.label
                ));
            }
            if let Some(ref guess) = a.best_guess_label {
                out.push_str(&format!("    best guess: {}\n", guess));
            }
        }
        out.push('\n');
    }

    if !report.new_files.is_empty() {
        out.push_str(&format!(
            "{}\n\n",
            format_section_heading(&format!("New ({})", report.new_files.len()))
        ));
        for f in &report.new_files {
            out.push_str(&format!("  {}\n", f.label));
        }
        out.push('\n');
    }

    if !report.unchanged.is_empty() {
        out.push_str(&format!(
            "{}\n\n",
            format_section_heading(&format!("Unchanged ({})", report.unchanged.len()))
        ));
        for u in &report.unchanged {
            out.push_str(&format!("  {} {}\n", format_score(u.similarity), u.label));
        }
    }

    out
}

pub fn format_report_json(report: &DiffReport) -> Result<String, DiffError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn format_summary_json(report: &DiffReport) -> Result<String, DiffError> {
    let out = json!({
        "generated_at": report.generated_at,
        "before_root": report.before_root,
        "after_root": report.after_root,
        "similarity_threshold": report.similarity_threshold,
        "summary": report.summary,
    });
    Ok(serde_json::to_string_pretty(&out)?)
}
