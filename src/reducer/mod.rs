//! Reduction of a collection to its visible page.
//!
//! - [`collection`]: the pure filter / sort / paginate reducer
//! - [`matcher`]: search policies supplied per list view
//! - [`query`]: filter state as REST / URL query parameters, used by
//!   server-paginated views

pub mod collection;
pub mod matcher;
pub mod query;

pub use collection::compute_visible;
pub use matcher::{FieldSubstring, FuzzyFields, SearchPolicy};
pub use query::PageQuery;
