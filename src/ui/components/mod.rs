//! Plain-text table components.
//!
//! - [`table`]: column headers and rows
//! - [`footer`]: paginator line
//! - [`empty`]: message for a page without rows
//!
//! [`render_table`] assembles them into one block of text.

mod empty;
mod footer;
mod table;

pub use empty::render_empty_state;
pub use footer::render_footer;
pub use table::Column;

use crate::domain::{Row, SortDirection};
use crate::ui::viewmodel::TableViewModel;
use table::{render_table_headers, render_table_rows};

/// Widest a column grows before its cells are truncated.
pub const MAX_COLUMN_WIDTH: usize = 40;

/// Renders a page as text: headers, rows (or the empty state) and the
/// paginator footer.
///
/// Column widths fit the widest cell of the page, capped at
/// [`MAX_COLUMN_WIDTH`]. The sorted column's header carries `^` (ascending)
/// or `v` (descending). Missing fields render as empty cells.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tableview::domain::{FilterResult, FilterState};
/// use tableview::ui::{render_table, TableViewModel};
///
/// let result = FilterResult {
///     filtered_collection: vec![json!({"name": "fox"})],
///     unpaginated_length: 1,
/// };
/// let vm = TableViewModel::new(&FilterState::default(), &result);
/// let text = render_table(&vm, &["name".to_string()]);
/// assert!(text.contains("fox"));
/// assert!(text.ends_with("1-1 of 1  page 1/1\n"));
/// ```
#[must_use]
pub fn render_table<T: Row>(vm: &TableViewModel<T>, fields: &[String]) -> String {
    let cells: Vec<Vec<String>> = vm
        .rows
        .iter()
        .map(|row| {
            fields
                .iter()
                .map(|field| row.field(field).map(|v| v.display()).unwrap_or_default())
                .collect()
        })
        .collect();

    let columns: Vec<Column> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let label = header_label(vm, field);
            let widest = cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(label.chars().count()))
                .max()
                .unwrap_or(0);
            Column {
                label,
                width: widest.min(MAX_COLUMN_WIDTH),
            }
        })
        .collect();

    let mut out = String::new();
    render_table_headers(&mut out, &columns);
    if cells.is_empty() {
        render_empty_state(&mut out, &vm.search_term, vm.paginator.total);
    } else {
        render_table_rows(&mut out, &columns, &cells);
    }
    render_footer(&mut out, &vm.paginator);
    out
}

fn header_label<T>(vm: &TableViewModel<T>, field: &str) -> String {
    let label = field.to_uppercase();
    match vm.sort.as_ref().filter(|sort| sort.active == field) {
        Some(sort) if sort.direction == SortDirection::Asc => format!("{label} ^"),
        Some(sort) if sort.direction == SortDirection::Desc => format!("{label} v"),
        _ => label,
    }
}
