//! Filter state model: search term, sort order and pagination.
//!
//! [`FilterState`] is the single source of truth for what a list view shows.
//! It is only ever changed by merging a [`FilterPatch`] into it, which is where
//! the two policies of the controller live:
//!
//! - a search term that differs from the previous one resets the page index
//!   to 1, so a search never lands on a page that no longer exists
//! - malformed pagination (index or size below 1) is clamped, never rejected

use serde::{Deserialize, Serialize};

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Direction of a sort header.
///
/// Serialized as `"asc"`, `"desc"` and `""` to match the values a sort header
/// exchanges with the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
    /// No ordering; the collection keeps its natural order.
    #[default]
    #[serde(rename = "")]
    None,
}

impl SortDirection {
    /// Next direction when the same header is clicked again.
    ///
    /// Cycles `'' -> asc -> desc -> ''`.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::None => Self::Asc,
            Self::Asc => Self::Desc,
            Self::Desc => Self::None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
            Self::None => "",
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sort {
    /// Name of the field the collection is sorted by.
    pub active: String,
    pub direction: SortDirection,
}

impl Sort {
    #[must_use]
    pub fn new(active: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            active: active.into(),
            direction,
        }
    }

    #[must_use]
    pub fn asc(active: impl Into<String>) -> Self {
        Self::new(active, SortDirection::Asc)
    }

    #[must_use]
    pub fn desc(active: impl Into<String>) -> Self {
        Self::new(active, SortDirection::Desc)
    }

    /// Whether this sort actually reorders rows.
    ///
    /// An empty field name or an empty direction leaves the collection in its
    /// natural order.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.active.is_empty() && self.direction != SortDirection::None
    }

    /// Sort resulting from a click on the header of `field`.
    ///
    /// Clicking the active header cycles its direction; clicking any other
    /// header starts ascending on that field.
    #[must_use]
    pub fn toggled(current: Option<&Self>, field: &str) -> Self {
        match current {
            Some(sort) if sort.active == field => Self::new(field, sort.direction.cycle()),
            _ => Self::asc(field),
        }
    }
}

/// 1-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    pub index: usize,
    pub size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            index: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Builds a pagination, clamping both values to at least 1.
    #[must_use]
    pub fn new(index: usize, size: usize) -> Self {
        Self { index, size }.clamped()
    }

    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            index: self.index.max(1),
            size: self.size.max(1),
        }
    }

    /// Offset of the first row of this page in the unpaginated collection.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.index.saturating_sub(1).saturating_mul(self.size)
    }

    /// Number of pages needed for `total` rows (at least 1).
    #[must_use]
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.size.max(1)).max(1)
    }
}

/// Combined search, sort and pagination parameters of one list view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search_term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    pub pagination: Pagination,
}

impl FilterState {
    /// Default state with a specific page size.
    #[must_use]
    pub fn with_page_size(size: usize) -> Self {
        Self {
            pagination: Pagination::new(1, size),
            ..Self::default()
        }
    }

    /// Returns the state obtained by applying `patch` on top of `self`.
    ///
    /// Fields absent from the patch keep their current value. When the patch
    /// carries a search term different from the current one, the page index
    /// is forced back to 1 regardless of any index carried by the patch.
    #[must_use]
    pub fn merged(&self, patch: &FilterPatch) -> Self {
        let search_term = patch
            .search_term
            .clone()
            .unwrap_or_else(|| self.search_term.clone());
        let sort = patch.sort.clone().unwrap_or_else(|| self.sort.clone());
        let mut pagination = patch.pagination.unwrap_or(self.pagination).clamped();

        if search_term != self.search_term {
            pagination.index = 1;
        }

        Self {
            search_term,
            sort,
            pagination,
        }
    }

    /// Active sort, if it actually reorders rows.
    #[must_use]
    pub fn active_sort(&self) -> Option<&Sort> {
        self.sort.as_ref().filter(|s| s.is_active())
    }
}

/// Partial update of a [`FilterState`].
///
/// `sort` is doubly optional: `None` leaves the sort untouched while
/// `Some(None)` clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Option<Sort>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl FilterPatch {
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn sort(sort: Option<Sort>) -> Self {
        Self {
            sort: Some(sort),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn page(index: usize, size: usize) -> Self {
        Self {
            pagination: Some(Pagination { index, size }),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_term.is_none() && self.sort.is_none() && self.pagination.is_none()
    }

    /// Folds a later patch into this one; fields set in `later` win.
    pub fn absorb(&mut self, later: Self) {
        if later.search_term.is_some() {
            self.search_term = later.search_term;
        }
        if later.sort.is_some() {
            self.sort = later.sort;
        }
        if later.pagination.is_some() {
            self.pagination = later.pagination;
        }
    }
}

/// Rows visible on the current page plus the size of the filtered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult<T> {
    /// At most `pagination.size` rows.
    pub filtered_collection: Vec<T>,
    /// Number of rows that matched before pagination.
    pub unpaginated_length: usize,
}

impl<T> Default for FilterResult<T> {
    fn default() -> Self {
        Self {
            filtered_collection: Vec::new(),
            unpaginated_length: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_on_default_yields_defaults() {
        let state = FilterState::default().merged(&FilterPatch::default());
        assert_eq!(state.search_term, "");
        assert_eq!(state.pagination, Pagination { index: 1, size: 10 });
        assert!(state.sort.is_none());
    }

    #[test]
    fn new_search_term_resets_page_index() {
        let state = FilterState::default().merged(&FilterPatch::page(4, 10));
        assert_eq!(state.pagination.index, 4);

        let searched = state.merged(&FilterPatch::search("fox"));
        assert_eq!(searched.pagination.index, 1);
        assert_eq!(searched.search_term, "fox");
    }

    #[test]
    fn search_reset_wins_over_index_in_same_patch() {
        let state = FilterState::default();
        let patch = FilterPatch {
            search_term: Some("wolf".into()),
            pagination: Some(Pagination { index: 3, size: 5 }),
            ..FilterPatch::default()
        };
        let merged = state.merged(&patch);
        assert_eq!(merged.pagination, Pagination { index: 1, size: 5 });
    }

    #[test]
    fn same_search_term_keeps_page_index() {
        let state = FilterState::default()
            .merged(&FilterPatch::search("fox"))
            .merged(&FilterPatch::page(3, 10));
        let again = state.merged(&FilterPatch::search("fox"));
        assert_eq!(again.pagination.index, 3);
    }

    #[test]
    fn malformed_pagination_is_clamped() {
        let state = FilterState::default().merged(&FilterPatch::page(0, 0));
        assert_eq!(state.pagination, Pagination { index: 1, size: 1 });
    }

    #[test]
    fn sort_patch_can_clear_sort() {
        let sorted = FilterState::default().merged(&FilterPatch::sort(Some(Sort::asc("name"))));
        assert_eq!(sorted.active_sort(), Some(&Sort::asc("name")));

        let cleared = sorted.merged(&FilterPatch::sort(None));
        assert!(cleared.sort.is_none());
    }

    #[test]
    fn header_clicks_cycle_direction() {
        let first = Sort::toggled(None, "name");
        assert_eq!(first.direction, SortDirection::Asc);
        let second = Sort::toggled(Some(&first), "name");
        assert_eq!(second.direction, SortDirection::Desc);
        let third = Sort::toggled(Some(&second), "name");
        assert_eq!(third.direction, SortDirection::None);
        assert!(!third.is_active());
    }

    #[test]
    fn clicking_another_header_starts_ascending() {
        let by_name = Sort::desc("name");
        let by_version = Sort::toggled(Some(&by_name), "version");
        assert_eq!(by_version, Sort::asc("version"));
    }

    #[test]
    fn later_patch_fields_win_when_absorbed() {
        let mut patch = FilterPatch::page(2, 10);
        patch.absorb(FilterPatch::page(3, 10));
        patch.absorb(FilterPatch::sort(Some(Sort::asc("name"))));
        assert_eq!(patch.pagination, Some(Pagination { index: 3, size: 10 }));
        assert_eq!(patch.sort, Some(Some(Sort::asc("name"))));
        assert!(patch.search_term.is_none());
    }

    #[test]
    fn page_count_is_at_least_one() {
        let pagination = Pagination::new(1, 5);
        assert_eq!(pagination.page_count(0), 1);
        assert_eq!(pagination.page_count(12), 3);
        assert_eq!(pagination.page_count(10), 2);
    }

    #[test]
    fn filter_state_serializes_with_view_layer_names() {
        let state = FilterState::default().merged(&FilterPatch::sort(Some(Sort::desc("name"))));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["searchTerm"], "");
        assert_eq!(json["sort"]["direction"], "desc");
        assert_eq!(json["pagination"]["index"], 1);
    }
}
