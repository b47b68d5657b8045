//! Empty state renderer.

use std::fmt::Write;

/// Renders the message shown when a page has no rows.
///
/// A search term gets its own message, since the collection is not empty but
/// nothing matched.
pub fn render_empty_state(out: &mut String, search_term: &str, total: usize) {
    let message = if !search_term.is_empty() {
        format!("No results for \"{search_term}\"")
    } else if total > 0 {
        "No rows on this page".to_string()
    } else {
        "No rows".to_string()
    };
    let _ = writeln!(out, "{message}");
}
