/// Box-drawn console rendering of triage reports.
///
/// Pure string building over the engine's returned data — nothing in
/// here classifies, counts, or sorts.
use filetriage_core::analysis::BatchSummary;
use filetriage_core::model::percent::format_percent;
use filetriage_core::model::ClassificationRecord;

/// Inner content width of every box, excluding the frame columns.
const INNER_WIDTH: usize = 62;

fn top_border() -> String {
    format!("╔{}╗", "═".repeat(INNER_WIDTH))
}

fn separator() -> String {
    format!("╠{}╣", "═".repeat(INNER_WIDTH))
}

fn bottom_border() -> String {
    format!("╚{}╝", "═".repeat(INNER_WIDTH))
}

/// A framed row with left-aligned content.
fn row(content: &str) -> String {
    format!("║ {:<width$} ║", content, width = INNER_WIDTH - 2)
}

/// A framed row with centered content, for headings.
fn heading(content: &str) -> String {
    format!("║{:^width$}║", content, width = INNER_WIDTH)
}

/// Startup banner shown before processing begins.
pub fn banner() -> String {
    let mut out = String::new();
    out.push_str(&top_border());
    out.push('\n');
    out.push_str(&heading("FILE TRIAGE"));
    out.push('\n');
    out.push_str(&heading("Filename Classification and Priority Report"));
    out.push('\n');
    out.push_str(&bottom_border());
    out.push('\n');
    out
}

/// The per-file results table: one row per record, in the order given
/// (callers pass priority-sorted records).
pub fn results_table(records: &[ClassificationRecord]) -> String {
    let mut out = String::new();
    out.push_str(&top_border());
    out.push('\n');
    out.push_str(&heading("TRIAGE RESULTS"));
    out.push('\n');
    out.push_str(&separator());
    out.push('\n');

    if records.is_empty() {
        out.push_str(&row("(no files)"));
        out.push('\n');
    }
    for record in records {
        out.push_str(&row(&format!(
            "{:<30} → {:<16} [P{}]",
            record.filename, record.category.label(), record.priority
        )));
        out.push('\n');
    }

    out.push_str(&bottom_border());
    out.push('\n');
    out
}

/// The statistics report: totals, category distribution, and priority
/// distribution, with one-decimal percentages.
pub fn statistics_report(summary: &BatchSummary) -> String {
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

    let mut out = String::new();
    out.push_str(&top_border());
    out.push('\n');
    out.push_str(&heading("STATISTICAL ANALYSIS REPORT"));
    out.push('\n');
    out.push_str(&separator());
    out.push('\n');
    out.push_str(&row(&format!("Total files processed: {}", summary.total)));
    out.push('\n');
    out.push_str(&row(&format!("Generated: {generated}")));
    out.push('\n');

    out.push_str(&separator());
    out.push('\n');
    out.push_str(&heading("CATEGORY DISTRIBUTION"));
    out.push('\n');
    out.push_str(&separator());
    out.push('\n');
    for (category, count) in &summary.per_category {
        out.push_str(&row(&format!(
            "{:<16} {:>4} files ({})",
            category.label(),
            count,
            format_percent(summary.category_percent(*category))
        )));
        out.push('\n');
    }

    out.push_str(&separator());
    out.push('\n');
    out.push_str(&heading("PRIORITY DISTRIBUTION"));
    out.push('\n');
    out.push_str(&separator());
    out.push('\n');
    for (priority, count) in &summary.per_priority {
        out.push_str(&row(&format!(
            "Priority {priority}: {:>4} files ({})",
            count,
            format_percent(summary.priority_percent(*priority))
        )));
        out.push('\n');
    }

    out.push_str(&bottom_border());
    out.push('\n');
    out
}
