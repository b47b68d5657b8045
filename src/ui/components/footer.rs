//! Paginator footer renderer.

use crate::ui::viewmodel::PaginatorInfo;
use std::fmt::Write;

/// Renders the paginator line, e.g. `11-20 of 42  page 2/5  < >`.
///
/// The arrows are only shown when the corresponding page exists.
pub fn render_footer(out: &mut String, paginator: &PaginatorInfo) {
    let previous = if paginator.has_previous { "<" } else { " " };
    let next = if paginator.has_next { ">" } else { " " };
    let line = format!(
        "{}  page {}/{}  {previous} {next}",
        paginator.range_label(),
        paginator.index,
        paginator.page_count,
    );
    let _ = writeln!(out, "{}", line.trim_end());
}
