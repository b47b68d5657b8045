//! The table view-state controller.
//!
//! [`TableController`] owns the filter state of one list view, the collection
//! (or, server-side, the last page received), the search policy and the two
//! debounce windows. It is the single source of truth for what the view shows.
//!
//! # Transitions
//!
//! Every change goes through one path: a [`FilterPatch`] is merged into the
//! current [`FilterState`] (resetting the page index when the search term
//! changes), the visible result is recomputed client-side or a page request
//! is emitted server-side, and a `FiltersChanged` action is returned. A patch
//! that leaves the state unchanged emits nothing.
//!
//! Search input and control events do not transition immediately. They are
//! parked in debounce windows and fire on a later [`tick`](TableController::tick).
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use tableview::app::{Settings, TableController};
//! use tableview::domain::FilterPatch;
//! use tableview::reducer::FieldSubstring;
//!
//! let items = vec![json!({"name": "fox"}), json!({"name": "wolf"})];
//! let mut controller = TableController::new(items, FieldSubstring::new(["name"]), Settings::default());
//!
//! controller.on_filters_changed(&FilterPatch::search("wo"));
//! assert_eq!(controller.result().unpaginated_length, 1);
//! ```

use super::actions::Action;
use super::modes::FilterMode;
use crate::domain::{FilterPatch, FilterResult, FilterState, Pagination, Row, Sort};
use crate::reducer::{compute_visible, FieldSubstring, PageQuery, SearchPolicy};
use crate::scheduler::{Debouncer, DEFAULT_CONTROL_COALESCE, DEFAULT_SEARCH_DEBOUNCE};
use crate::ui::viewmodel::TableViewModel;
use std::time::{Duration, Instant};

/// Per-view controller settings, usually derived from [`crate::Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Quiet period before search input is applied.
    pub search_debounce: Duration,
    /// Window merging paginator and sort events fired together.
    pub control_coalesce: Duration,
    /// Initial page size.
    pub page_size: usize,
    pub mode: FilterMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            control_coalesce: DEFAULT_CONTROL_COALESCE,
            page_size: crate::domain::DEFAULT_PAGE_SIZE,
            mode: FilterMode::Client,
        }
    }
}

/// View-state controller for one list view.
#[derive(Debug)]
pub struct TableController<T, P> {
    filters: FilterState,
    items: Vec<T>,
    policy: P,
    mode: FilterMode,
    result: FilterResult<T>,
    search: Debouncer<String>,
    controls: Debouncer<FilterPatch>,
    disposed: bool,
}

impl<T: Row + Clone> TableController<T, FieldSubstring> {
    /// Creates a server-side controller.
    ///
    /// No search policy is needed since the backend does the matching. The
    /// controller starts empty; the caller fetches the first page using
    /// [`page_query`](Self::page_query).
    #[must_use]
    pub fn server_side(settings: Settings) -> Self {
        let settings = Settings {
            mode: FilterMode::Server,
            ..settings
        };
        Self::new(Vec::new(), FieldSubstring::new(Vec::<String>::new()), settings)
    }
}

impl<T, P> TableController<T, P>
where
    T: Row + Clone,
    P: SearchPolicy<T>,
{
    /// Creates a controller with default filters and, client-side, an
    /// initial reduction of `items`.
    #[must_use]
    pub fn new(items: Vec<T>, policy: P, settings: Settings) -> Self {
        let mut controller = Self {
            filters: FilterState::with_page_size(settings.page_size),
            items,
            policy,
            mode: settings.mode,
            result: FilterResult::default(),
            search: Debouncer::new(settings.search_debounce),
            controls: Debouncer::new(settings.control_coalesce),
            disposed: false,
        };
        if controller.mode == FilterMode::Client {
            controller.recompute();
        }
        controller
    }

    /// Replaces the initial filter state, for instance one restored from the
    /// address bar. Applied without notification.
    #[must_use]
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = FilterState {
            pagination: filters.pagination.clamped(),
            ..filters
        };
        if self.mode == FilterMode::Client {
            self.recompute();
        }
        self
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    #[must_use]
    pub const fn result(&self) -> &FilterResult<T> {
        &self.result
    }

    #[must_use]
    pub const fn mode(&self) -> FilterMode {
        self.mode
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Query describing the current state, for server-side fetches and URL
    /// mirroring.
    #[must_use]
    pub fn page_query(&self) -> PageQuery {
        PageQuery::from_filters(&self.filters)
    }

    /// Merges `patch` into the filter state immediately.
    ///
    /// Absent fields keep their value; a changed search term resets the page
    /// index to 1. Returns `FiltersChanged` (and `FetchPage` server-side)
    /// when the state actually changed, nothing otherwise.
    pub fn on_filters_changed(&mut self, patch: &FilterPatch) -> Vec<Action> {
        if self.disposed {
            tracing::debug!("ignoring filter change after dispose");
            return vec![];
        }

        let next = self.filters.merged(patch);
        if next == self.filters {
            tracing::trace!("filter patch produced no effective change");
            return vec![];
        }

        let _span = tracing::debug_span!(
            "filters_changed",
            search_term = %next.search_term,
            page = next.pagination.index,
            page_size = next.pagination.size,
            sort = ?next.active_sort(),
            mode = ?self.mode,
        )
        .entered();

        self.filters = next;
        let mut actions = vec![Action::FiltersChanged(self.filters.clone())];
        match self.mode {
            FilterMode::Client => self.recompute(),
            FilterMode::Server => actions.push(Action::FetchPage(self.page_query())),
        }
        actions
    }

    /// Records a keystroke in the search box.
    ///
    /// Restarts the search window; the term is applied on the first tick
    /// after the window elapses.
    pub fn search_input(&mut self, term: impl Into<String>, now: Instant) -> Vec<Action> {
        if self.disposed {
            return vec![];
        }
        self.search.push(term.into(), now);
        self.wakeup(now).into_iter().collect()
    }

    /// Records a click on the sort header of `field`.
    ///
    /// The direction cycles relative to the sort the view currently shows,
    /// including clicks still waiting in the coalescing window.
    pub fn sort_header_clicked(&mut self, field: &str, now: Instant) -> Vec<Action> {
        if self.disposed {
            return vec![];
        }
        let shown = self
            .controls
            .peek()
            .map_or_else(|| self.filters.clone(), |pending| self.filters.merged(pending));
        let sort = Sort::toggled(shown.sort.as_ref(), field);
        tracing::debug!(field, direction = sort.direction.as_str(), "sort header clicked");
        self.queue_control(FilterPatch::sort(Some(sort)), now)
    }

    /// Records an explicit sort change (or removal).
    pub fn sort_changed(&mut self, sort: Option<Sort>, now: Instant) -> Vec<Action> {
        if self.disposed {
            return vec![];
        }
        self.queue_control(FilterPatch::sort(sort), now)
    }

    /// Records a paginator change (page index and/or page size).
    pub fn page_changed(&mut self, pagination: Pagination, now: Instant) -> Vec<Action> {
        if self.disposed {
            return vec![];
        }
        self.queue_control(FilterPatch::page(pagination.index, pagination.size), now)
    }

    /// Fires every window whose deadline has passed.
    ///
    /// Search input and control events that fire on the same tick are merged
    /// into a single transition. A wakeup is requested for windows still
    /// pending.
    pub fn tick(&mut self, now: Instant) -> Vec<Action> {
        if self.disposed {
            return vec![];
        }

        let mut patch = FilterPatch::default();
        if let Some(term) = self.search.poll(now) {
            patch.search_term = Some(term);
        }
        if let Some(controls) = self.controls.poll(now) {
            patch.absorb(controls);
        }

        let mut actions = if patch.is_empty() {
            vec![]
        } else {
            self.on_filters_changed(&patch)
        };
        actions.extend(self.wakeup(now));
        actions
    }

    /// Replaces the client-side collection and recomputes the visible page.
    ///
    /// The filter state is untouched, so no `FiltersChanged` is emitted.
    /// Returns whether the view needs re-rendering.
    pub fn replace_items(&mut self, items: Vec<T>) -> bool {
        if self.disposed {
            return false;
        }
        if self.mode == FilterMode::Server {
            tracing::debug!("ignoring collection replacement on server-side controller");
            return false;
        }
        tracing::debug!(count = items.len(), "collection replaced");
        self.items = items;
        self.recompute();
        true
    }

    /// Installs the page returned by the backend for the current query.
    ///
    /// Returns whether the view needs re-rendering.
    pub fn receive_page(&mut self, rows: Vec<T>, total_count: usize) -> bool {
        if self.disposed {
            return false;
        }
        if self.mode == FilterMode::Client {
            tracing::debug!("ignoring backend page on client-side controller");
            return false;
        }
        tracing::debug!(rows = rows.len(), total_count, "backend page received");
        self.items.clone_from(&rows);
        self.result = FilterResult {
            filtered_collection: rows,
            unpaginated_length: total_count,
        };
        true
    }

    /// Tears the controller down.
    ///
    /// Cancels both pending windows and drops the collection and result.
    /// Every later event is ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        let dropped_search = self.search.cancel().is_some();
        let dropped_controls = self.controls.cancel().is_some();
        tracing::debug!(dropped_search, dropped_controls, "controller disposed");

        self.items = Vec::new();
        self.result = FilterResult::default();
        self.disposed = true;
    }

    /// Next time the host must deliver a tick, if any window is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.search.deadline(), self.controls.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Render-ready projection of the current result.
    #[must_use]
    pub fn compute_viewmodel(&self) -> TableViewModel<T> {
        TableViewModel::new(&self.filters, &self.result)
    }

    fn queue_control(&mut self, patch: FilterPatch, now: Instant) -> Vec<Action> {
        self.controls.update(now, |pending| {
            let mut merged = pending.unwrap_or_default();
            merged.absorb(patch);
            merged
        });
        self.wakeup(now).into_iter().collect()
    }

    fn wakeup(&self, now: Instant) -> Option<Action> {
        self.next_deadline().map(|deadline| Action::ScheduleWakeup {
            after: deadline.saturating_duration_since(now),
        })
    }

    fn recompute(&mut self) {
        self.result = compute_visible(&self.items, &self.filters, &self.policy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortDirection;
    use serde_json::{json, Value};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn animals() -> Vec<Value> {
        vec![
            json!({"name": "fox"}),
            json!({"name": "wolf"}),
            json!({"name": "Foxglove"}),
        ]
    }

    fn controller(items: Vec<Value>) -> TableController<Value, FieldSubstring> {
        TableController::new(items, FieldSubstring::new(["name"]), Settings::default())
    }

    fn changes(actions: &[Action]) -> Vec<&FilterState> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::FiltersChanged(state) => Some(state),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn initial_result_is_first_page() {
        let controller = controller(animals());
        assert_eq!(controller.result().unpaginated_length, 3);
        assert_eq!(controller.result().filtered_collection.len(), 3);
    }

    #[test]
    fn immediate_patch_notifies_once() {
        let mut controller = controller(animals());
        let actions = controller.on_filters_changed(&FilterPatch::search("fox"));

        assert_eq!(changes(&actions).len(), 1);
        assert_eq!(controller.result().unpaginated_length, 2);
    }

    #[test]
    fn repeated_patch_is_not_an_effective_change() {
        let mut controller = controller(animals());
        controller.on_filters_changed(&FilterPatch::search("fox"));
        let actions = controller.on_filters_changed(&FilterPatch::search("fox"));
        assert!(actions.is_empty());
    }

    #[test]
    fn search_burst_emits_single_notification() {
        let t0 = Instant::now();
        let mut controller = controller(animals());

        controller.search_input("f", t0);
        controller.search_input("fo", t0 + ms(20));
        let scheduled = controller.search_input("fox", t0 + ms(45));
        assert_eq!(scheduled, vec![Action::ScheduleWakeup { after: ms(300) }]);

        assert!(changes(&controller.tick(t0 + ms(100))).is_empty());

        let fired = controller.tick(t0 + ms(345));
        let states = changes(&fired);
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].search_term, "fox");
        assert!(controller.next_deadline().is_none());
    }

    #[test]
    fn duplicate_paginators_coalesce() {
        let t0 = Instant::now();
        let mut controller = controller((0..30).map(|n| json!({"name": format!("n{n}")})).collect());

        controller.page_changed(Pagination::new(2, 10), t0);
        controller.page_changed(Pagination::new(2, 10), t0 + ms(5));

        let fired = controller.tick(t0 + ms(105));
        assert_eq!(changes(&fired).len(), 1);
        assert_eq!(controller.filters().pagination.index, 2);
    }

    #[test]
    fn search_and_page_on_same_tick_merge_with_reset() {
        let t0 = Instant::now();
        let mut controller = controller(animals());

        controller.search_input("o", t0);
        controller.page_changed(Pagination::new(3, 10), t0 + ms(250));

        let fired = controller.tick(t0 + ms(400));
        let states = changes(&fired);
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].search_term, "o");
        assert_eq!(states[0].pagination.index, 1);
    }

    #[test]
    fn early_tick_reschedules_remaining_window() {
        let t0 = Instant::now();
        let mut controller = controller(animals());
        controller.search_input("fox", t0);

        let actions = controller.tick(t0 + ms(100));
        assert_eq!(actions, vec![Action::ScheduleWakeup { after: ms(200) }]);
    }

    #[test]
    fn sort_clicks_cycle_through_pending_state() {
        let t0 = Instant::now();
        let mut controller = controller(animals());

        controller.sort_header_clicked("name", t0);
        controller.sort_header_clicked("name", t0 + ms(10));
        controller.tick(t0 + ms(200));

        assert_eq!(
            controller.filters().sort.as_ref().map(|s| s.direction),
            Some(SortDirection::Desc)
        );
    }

    #[test]
    fn dispose_cancels_pending_windows() {
        let t0 = Instant::now();
        let mut controller = controller(animals());
        controller.search_input("wolf", t0);

        controller.dispose();

        assert!(controller.is_disposed());
        assert!(controller.next_deadline().is_none());
        assert!(controller.tick(t0 + ms(1_000)).is_empty());
        assert!(controller.on_filters_changed(&FilterPatch::search("x")).is_empty());
        assert!(controller.result().filtered_collection.is_empty());
    }

    #[test]
    fn replacing_items_recomputes_without_notification() {
        let mut controller = controller(animals());
        controller.on_filters_changed(&FilterPatch::search("fox"));

        let mut more = animals();
        more.push(json!({"name": "Arctic fox"}));
        assert!(controller.replace_items(more));

        assert_eq!(controller.result().unpaginated_length, 3);
    }

    #[test]
    fn server_side_emits_fetch_and_takes_page_verbatim() {
        let mut controller: TableController<Value, FieldSubstring> =
            TableController::server_side(Settings::default());

        let actions = controller.on_filters_changed(&FilterPatch::page(2, 5));
        assert!(actions.contains(&Action::FetchPage(PageQuery {
            page: 2,
            per_page: 5,
            q: None,
            sort_by: None,
        })));

        assert!(controller.receive_page(vec![json!({"name": "a"})], 42));
        assert_eq!(controller.result().unpaginated_length, 42);
        assert_eq!(controller.result().filtered_collection.len(), 1);
        assert!(!controller.replace_items(animals()));
    }

    #[test]
    fn server_page_at_huge_index_still_renders() {
        let mut controller: TableController<Value, FieldSubstring> =
            TableController::server_side(Settings::default());

        controller.on_filters_changed(&FilterPatch::page(usize::MAX, 10));
        controller.receive_page(vec![json!({"name": "a"})], 5);
        let vm = controller.compute_viewmodel();

        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.paginator.first_item, usize::MAX);
        assert!(!vm.paginator.has_next);
    }

    #[test]
    fn client_side_ignores_backend_pages() {
        let mut controller = controller(animals());
        assert!(!controller.receive_page(vec![], 0));
        assert_eq!(controller.result().unpaginated_length, 3);
    }

    #[test]
    fn restored_filters_apply_without_notification() {
        let restored = FilterState::default().merged(&FilterPatch::search("wolf"));
        let controller = controller(animals()).with_filters(restored);
        assert_eq!(controller.result().unpaginated_length, 1);
    }
}
