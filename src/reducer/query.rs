//! Translation between filter state and REST/URL query parameters.
//!
//! Server-paginated screens send the filter state to the backend as
//! `page`, `perPage`, `q` and `sortBy` parameters, and the same parameters
//! are mirrored to the address bar for deep links. `sortBy` carries the
//! field name for ascending order and `-field` for descending order.

use crate::domain::{FilterState, Pagination, Sort, SortDirection};
use serde::{Deserialize, Serialize};

/// Query parameters describing one page request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: usize,
    pub per_page: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}

impl PageQuery {
    /// Builds the query for a filter state.
    ///
    /// Empty search terms and inactive sorts are omitted.
    #[must_use]
    pub fn from_filters(filters: &FilterState) -> Self {
        let pagination = filters.pagination.clamped();
        let q = Some(filters.search_term.clone()).filter(|term| !term.is_empty());
        let sort_by = filters.active_sort().map(|sort| match sort.direction {
            SortDirection::Desc => format!("-{}", sort.active),
            SortDirection::Asc | SortDirection::None => sort.active.clone(),
        });

        Self {
            page: pagination.index,
            per_page: pagination.size,
            q,
            sort_by,
        }
    }

    /// Filter state described by this query.
    #[must_use]
    pub fn to_filters(&self) -> FilterState {
        let sort = self.sort_by.as_deref().and_then(|raw| {
            let (field, direction) = raw
                .strip_prefix('-')
                .map_or((raw, SortDirection::Asc), |field| (field, SortDirection::Desc));
            Some(Sort::new(field, direction)).filter(|sort| !sort.active.is_empty())
        });

        FilterState {
            search_term: self.q.clone().unwrap_or_default(),
            sort,
            pagination: Pagination::new(self.page, self.per_page),
        }
    }

    /// Ordered `(name, value)` pairs, ready for a URL encoder.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ];
        if let Some(q) = &self.q {
            params.push(("q", q.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            params.push(("sortBy", sort_by.clone()));
        }
        params
    }

    /// Parses decoded `(name, value)` pairs.
    ///
    /// Unknown names are ignored. Missing or unparseable numbers fall back to
    /// the given defaults, and zero values are clamped to 1, so a hand-edited
    /// address bar never produces an invalid state.
    pub fn from_params<'a, I>(params: I, defaults: Pagination) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = Self {
            page: defaults.index,
            per_page: defaults.size,
            q: None,
            sort_by: None,
        };

        for (name, value) in params {
            match name {
                "page" => {
                    if let Ok(page) = value.trim().parse::<usize>() {
                        query.page = page;
                    }
                }
                "perPage" => {
                    if let Ok(size) = value.trim().parse::<usize>() {
                        query.per_page = size;
                    }
                }
                "q" => query.q = Some(value.to_string()).filter(|q| !q.is_empty()),
                "sortBy" => query.sort_by = Some(value.to_string()).filter(|s| !s.is_empty()),
                other => tracing::trace!(param = other, "ignoring unknown query parameter"),
            }
        }

        let clamped = Pagination::new(query.page, query.per_page);
        query.page = clamped.index;
        query.per_page = clamped.size;
        query
    }
}
