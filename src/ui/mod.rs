//! Presentation layer.
//!
//! ```text
//! FilterState + FilterResult → TableViewModel → render_table → text
//! ```
//!
//! - [`viewmodel`]: display-ready page data and paginator figures
//! - [`components`]: plain-text renderers for the table, footer and empty state

pub mod components;
pub mod viewmodel;

pub use components::render_table;
pub use viewmodel::{PaginatorInfo, TableViewModel};
