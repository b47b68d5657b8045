//! The pure filter, sort and paginate reducer.

use super::matcher::SearchPolicy;
use crate::domain::{compare_by_field, FilterResult, FilterState, Row, SortDirection};

/// Reduces `items` to the rows visible under `filters`.
///
/// 1. Keep rows accepted by `policy` when the search term is non-empty
/// 2. Stable-sort by the active sort field, if any
/// 3. Record the filtered length
/// 4. Slice out the current page
///
/// The input collection is only read. A page beyond the end of the filtered
/// set yields an empty `filtered_collection`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tableview::domain::{FilterPatch, FilterState};
/// use tableview::reducer::{compute_visible, FieldSubstring};
///
/// let items = vec![json!({"name": "fox"}), json!({"name": "wolf"}), json!({"name": "Foxglove"})];
/// let filters = FilterState::default().merged(&FilterPatch::search("fox"));
///
/// let result = compute_visible(&items, &filters, &FieldSubstring::new(["name"]));
/// assert_eq!(result.unpaginated_length, 2);
/// ```
pub fn compute_visible<T, P>(items: &[T], filters: &FilterState, policy: &P) -> FilterResult<T>
where
    T: Row + Clone,
    P: SearchPolicy<T> + ?Sized,
{
    let _span = tracing::debug_span!(
        "compute_visible",
        total_items = items.len(),
        search_len = filters.search_term.len(),
        page = filters.pagination.index,
        page_size = filters.pagination.size,
    )
    .entered();

    let term = filters.search_term.as_str();
    let mut filtered: Vec<&T> = if term.is_empty() {
        items.iter().collect()
    } else {
        items.iter().filter(|row| policy.matches(row, term)).collect()
    };

    if let Some(sort) = filters.active_sort() {
        let field = sort.active.as_str();
        match sort.direction {
            SortDirection::Asc => filtered.sort_by(|a, b| compare_by_field(*a, *b, field)),
            SortDirection::Desc => filtered.sort_by(|a, b| compare_by_field(*b, *a, field)),
            SortDirection::None => {}
        }
    }

    let unpaginated_length = filtered.len();
    let pagination = filters.pagination.clamped();
    let filtered_collection: Vec<T> = filtered
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.size)
        .cloned()
        .collect();

    tracing::debug!(
        unpaginated_length,
        visible = filtered_collection.len(),
        "collection reduced"
    );

    FilterResult {
        filtered_collection,
        unpaginated_length,
    }
}
