//! Side effects requested by the controller.
//!
//! The controller performs no I/O and owns no timers. After each event it
//! returns a list of [`Action`]s that the host (a UI runtime, the CLI, a test)
//! executes: notify subscribers, fetch a page, or wake the controller later.

use crate::domain::FilterState;
use crate::reducer::PageQuery;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The fully resolved filter state changed.
    ///
    /// Emitted once per effective transition; bursts merged by the debounce
    /// windows produce a single notification.
    FiltersChanged(FilterState),

    /// Server-side views must request this page from the backend and answer
    /// with [`Event::PageLoaded`](crate::app::Event::PageLoaded).
    FetchPage(PageQuery),

    /// Deliver [`Event::Tick`](crate::app::Event::Tick) after this delay.
    ///
    /// Early or duplicate ticks are harmless: the controller only fires
    /// windows whose deadline has passed and asks again for the rest.
    ScheduleWakeup {
        after: Duration,
    },
}
