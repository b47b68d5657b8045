//! Table component renderer.
//!
//! Renders the header line and one line per row, each cell left-aligned and
//! padded to its column width. Cells wider than the column are truncated
//! with `...`.

use std::fmt::Write;

/// A column with its header label and rendered width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub label: String,
    pub width: usize,
}

/// Separator between two columns.
const COLUMN_GAP: &str = "  ";

/// Renders the column headers and a rule line below them.
pub fn render_table_headers(out: &mut String, columns: &[Column]) {
    let labels: Vec<String> = columns.iter().map(|c| c.label.clone()).collect();
    render_line(out, columns, &labels);

    let rule_width = columns.iter().map(|c| c.width).sum::<usize>()
        + COLUMN_GAP.len() * columns.len().saturating_sub(1);
    let _ = writeln!(out, "{}", "-".repeat(rule_width));
}

/// Renders each row's cells; `cells[i][j]` belongs to `columns[j]`.
pub fn render_table_rows(out: &mut String, columns: &[Column], cells: &[Vec<String>]) {
    for row in cells {
        render_line(out, columns, row);
    }
}

fn render_line(out: &mut String, columns: &[Column], cells: &[String]) {
    let line: Vec<String> = columns
        .iter()
        .zip(cells)
        .map(|(column, cell)| pad(&truncate(cell, column.width), column.width))
        .collect();
    let _ = writeln!(out, "{}", line.join(COLUMN_GAP).trim_end());
}

/// Cuts `text` to `width` characters, marking the cut with `...`.
pub(super) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str(&".".repeat(width.min(3)));
    cut
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}
