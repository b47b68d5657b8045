//! Domain layer: filter state, rows and errors.
//!
//! Everything here is pure data with no timing or I/O concerns.
//!
//! - [`error`]: Error types and result alias
//! - [`filters`]: Filter state, patches and reduction results
//! - [`row`]: Field access over opaque collection records
//!
//! # Examples
//!
//! ```
//! use tableview::domain::{FilterPatch, FilterState};
//!
//! let state = FilterState::default().merged(&FilterPatch::search("fox"));
//! assert_eq!(state.pagination.index, 1);
//! ```

pub mod error;
pub mod filters;
pub mod row;

pub use error::{Result, TableViewError};
pub use filters::{
    FilterPatch, FilterResult, FilterState, Pagination, Sort, SortDirection, DEFAULT_PAGE_SIZE,
};
pub use row::{compare_by_field, FieldValue, Row};
