//! View model types representing one renderable page.
//!
//! A [`TableViewModel`] is computed from the controller's filter state and
//! latest result. It carries no logic of its own, only display-ready data:
//! the rows, and the paginator figures a view needs to draw "11-20 of 42".

use crate::domain::{FilterResult, FilterState, Sort};

/// Everything needed to draw one page of a list view.
#[derive(Debug, Clone, PartialEq)]
pub struct TableViewModel<T> {
    /// Rows of the current page.
    pub rows: Vec<T>,
    pub paginator: PaginatorInfo,
    pub search_term: String,
    /// Active sort, if it reorders rows.
    pub sort: Option<Sort>,
}

/// Paginator figures for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginatorInfo {
    /// 1-based page index.
    pub index: usize,
    pub size: usize,
    /// Number of pages, at least 1.
    pub page_count: usize,
    /// Number of rows matching the filters, all pages included.
    pub total: usize,
    /// 1-based position of the first displayed row, 0 when the page is empty.
    pub first_item: usize,
    /// 1-based position of the last displayed row, 0 when the page is empty.
    pub last_item: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginatorInfo {
    /// Computes paginator figures for `shown` rows on the page described by
    /// `filters`, out of `total`.
    #[must_use]
    pub fn new(filters: &FilterState, shown: usize, total: usize) -> Self {
        let pagination = filters.pagination.clamped();
        let page_count = pagination.page_count(total);
        let (first_item, last_item) = if shown == 0 {
            (0, 0)
        } else {
            let first = pagination.offset().saturating_add(1);
            (first, first.saturating_add(shown - 1))
        };

        Self {
            index: pagination.index,
            size: pagination.size,
            page_count,
            total,
            first_item,
            last_item,
            has_previous: pagination.index > 1,
            has_next: pagination.index < page_count,
        }
    }

    /// Range label such as `11-20 of 42`.
    #[must_use]
    pub fn range_label(&self) -> String {
        format!("{}-{} of {}", self.first_item, self.last_item, self.total)
    }
}

impl<T: Clone> TableViewModel<T> {
    #[must_use]
    pub fn new(filters: &FilterState, result: &FilterResult<T>) -> Self {
        Self {
            rows: result.filtered_collection.clone(),
            paginator: PaginatorInfo::new(
                filters,
                result.filtered_collection.len(),
                result.unpaginated_length,
            ),
            search_term: filters.search_term.clone(),
            sort: filters.active_sort().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FilterPatch;

    #[test]
    fn middle_page_range() {
        let filters = FilterState::default().merged(&FilterPatch::page(2, 5));
        let info = PaginatorInfo::new(&filters, 5, 12);

        assert_eq!(info.page_count, 3);
        assert_eq!(info.range_label(), "6-10 of 12");
        assert!(info.has_previous);
        assert!(info.has_next);
    }

    #[test]
    fn last_partial_page() {
        let filters = FilterState::default().merged(&FilterPatch::page(3, 5));
        let info = PaginatorInfo::new(&filters, 2, 12);

        assert_eq!(info.range_label(), "11-12 of 12");
        assert!(!info.has_next);
    }

    #[test]
    fn huge_page_index_saturates() {
        let filters = FilterState::default().merged(&FilterPatch::page(usize::MAX, 10));
        let info = PaginatorInfo::new(&filters, 1, 5);

        assert_eq!(info.first_item, usize::MAX);
        assert_eq!(info.last_item, usize::MAX);
        assert!(info.has_previous);
        assert!(!info.has_next);
    }

    #[test]
    fn empty_result_reads_zero() {
        let info = PaginatorInfo::new(&FilterState::default(), 0, 0);

        assert_eq!(info.range_label(), "0-0 of 0");
        assert_eq!(info.page_count, 1);
        assert!(!info.has_previous);
        assert!(!info.has_next);
    }

    #[test]
    fn viewmodel_copies_page_rows() {
        let result = FilterResult {
            filtered_collection: vec![1, 2, 3],
            unpaginated_length: 9,
        };
        let vm = TableViewModel::new(&FilterState::with_page_size(3), &result);

        assert_eq!(vm.rows, vec![1, 2, 3]);
        assert_eq!(vm.paginator.page_count, 3);
        assert!(vm.sort.is_none());
    }
}
