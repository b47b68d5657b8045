//! Timing primitives for coalescing bursts of view events.
//!
//! The controller uses two [`Debouncer`]s: one for the free-text search box
//! and one short window that merges paginator and sort-header events fired
//! together (duplicate top and bottom paginators, for instance).

pub mod debounce;

pub use debounce::Debouncer;

use std::time::Duration;

/// Default quiet period for search input.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Default window merging near-simultaneous control events.
pub const DEFAULT_CONTROL_COALESCE: Duration = Duration::from_millis(100);
