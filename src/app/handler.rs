//! Event dispatch for the table controller.
//!
//! The view layer translates its three interaction sources (search box, sort
//! headers, paginators) plus data arrivals, timer ticks and teardown into
//! [`Event`]s. [`handle_event`] routes each one to the controller and returns
//! whether the view must re-render together with the actions to execute.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use std::time::{Duration, Instant};
//! use tableview::app::{handle_event, Action, Event, Settings, TableController};
//! use tableview::reducer::FieldSubstring;
//!
//! let items = vec![json!({"name": "fox"}), json!({"name": "wolf"})];
//! let mut controller = TableController::new(items, FieldSubstring::new(["name"]), Settings::default());
//! let start = Instant::now();
//!
//! let (_, actions) = handle_event(&mut controller, Event::SearchInput("wolf".into()), start);
//! assert_eq!(actions, vec![Action::ScheduleWakeup { after: Duration::from_millis(300) }]);
//!
//! let (render, _) = handle_event(&mut controller, Event::Tick, start + Duration::from_millis(300));
//! assert!(render);
//! assert_eq!(controller.result().unpaginated_length, 1);
//! ```

use super::actions::Action;
use super::state::TableController;
use crate::domain::{FilterPatch, Pagination, Row, Sort};
use crate::reducer::SearchPolicy;
use std::time::Instant;

/// Inputs to a table controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<T> {
    /// The search box content changed. Debounced.
    SearchInput(String),
    /// A sort header was clicked. Coalesced.
    SortHeaderClicked(String),
    /// The sort was set explicitly (`None` clears it). Coalesced.
    SortChanged(Option<Sort>),
    /// A paginator changed page index or size. Coalesced.
    PageChanged(Pagination),
    /// Filters patched directly, bypassing the debounce windows.
    FiltersPatched(FilterPatch),
    /// The timer requested through `ScheduleWakeup` went off.
    Tick,
    /// A new client-side collection arrived.
    ItemsLoaded(Vec<T>),
    /// The backend answered a `FetchPage` request.
    PageLoaded {
        rows: Vec<T>,
        total_count: usize,
    },
    /// The view is going away.
    Teardown,
}

/// Processes an event and returns `(needs_render, actions)`.
///
/// `now` is the time the event happened; it drives the debounce windows.
pub fn handle_event<T, P>(
    controller: &mut TableController<T, P>,
    event: Event<T>,
    now: Instant,
) -> (bool, Vec<Action>)
where
    T: Row + Clone,
    P: SearchPolicy<T>,
{
    let _span = tracing::debug_span!("handle_event", event_type = event.kind()).entered();

    match event {
        Event::SearchInput(term) => (false, controller.search_input(term, now)),
        Event::SortHeaderClicked(field) => (false, controller.sort_header_clicked(&field, now)),
        Event::SortChanged(sort) => (false, controller.sort_changed(sort, now)),
        Event::PageChanged(pagination) => (false, controller.page_changed(pagination, now)),
        Event::FiltersPatched(patch) => with_render(controller.on_filters_changed(&patch)),
        Event::Tick => with_render(controller.tick(now)),
        Event::ItemsLoaded(items) => (controller.replace_items(items), vec![]),
        Event::PageLoaded { rows, total_count } => {
            (controller.receive_page(rows, total_count), vec![])
        }
        Event::Teardown => {
            controller.dispose();
            (false, vec![])
        }
    }
}

/// A transition needs a render exactly when it notified a filter change.
fn with_render(actions: Vec<Action>) -> (bool, Vec<Action>) {
    let render = actions
        .iter()
        .any(|action| matches!(action, Action::FiltersChanged(_)));
    (render, actions)
}

impl<T> Event<T> {
    const fn kind(&self) -> &'static str {
        match self {
            Self::SearchInput(_) => "search_input",
            Self::SortHeaderClicked(_) => "sort_header_clicked",
            Self::SortChanged(_) => "sort_changed",
            Self::PageChanged(_) => "page_changed",
            Self::FiltersPatched(_) => "filters_patched",
            Self::Tick => "tick",
            Self::ItemsLoaded(_) => "items_loaded",
            Self::PageLoaded { .. } => "page_loaded",
            Self::Teardown => "teardown",
        }
    }
}
