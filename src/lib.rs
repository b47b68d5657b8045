//! Tableview: view-state controller for searchable, sortable, paginated tables.
//!
//! Every list screen of an admin console repeats the same plumbing: a search
//! box, sortable column headers and a paginator feed one combined filter
//! state, which either reduces an in-memory collection or becomes a query for
//! the backend. This crate holds that plumbing once:
//! - Debounced search input and coalesced paginator/sort bursts
//! - Search-reset policy: a new search term always lands on page 1
//! - Pure filter, sort and paginate reduction over any [`Row`] type
//! - Client-side and server-side strategies behind one controller
//! - Plain-text rendering for the bundled `tableview` binary
#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Controller
//! │  - Event handling                                   │
//! │  - Action emission                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Scheduler     │   │ Reducer       │   │ UI Layer      │
//! │ (scheduler/)  │   │ (reducer/)    │   │ (ui/)         │
//! │ - Debounce    │   │ - Search      │   │ - View model  │
//! │ - Deadlines   │   │ - Sort, page  │   │ - Text tables │
//! │               │   │ - Page query  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/)                                   │
//! │  - Filter state, patches, results                   │
//! │  - Row abstraction                                  │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Controller state machine with event/action model
//! - [`domain`]: Filter state, rows and errors
//! - [`reducer`]: Search policies, the visible-subset reducer, page queries
//! - [`scheduler`]: Clock-driven debounce windows
//! - [`ui`]: View models and plain-text rendering
//! - [`observability`]: `tracing` subscriber setup
//!
//! # Configuration
//!
//! ```toml
//! search_debounce_ms = 300
//! control_coalesce_ms = 100
//! default_page_size = 10
//! mode = "client"
//! trace_level = "debug"
//! ```
//!
//! # Time
//!
//! The controller never reads the clock or sleeps. Every event carries the
//! `Instant` it happened at, and pending windows are reported through
//! [`Action::ScheduleWakeup`]; the host answers with [`Event::Tick`]. Tests
//! drive time by hand.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use std::time::{Duration, Instant};
//! use tableview::{handle_event, Action, Config, Event, TableController};
//! use tableview::reducer::FieldSubstring;
//!
//! let items = vec![json!({"name": "fox"}), json!({"name": "wolf"}), json!({"name": "Foxglove"})];
//! let config = Config::default();
//! let mut controller = TableController::new(items, FieldSubstring::new(["name"]), config.settings());
//!
//! let t0 = Instant::now();
//! handle_event(&mut controller, Event::SearchInput("f".into()), t0);
//! handle_event(&mut controller, Event::SearchInput("fo".into()), t0 + Duration::from_millis(20));
//! handle_event(&mut controller, Event::SearchInput("fox".into()), t0 + Duration::from_millis(40));
//!
//! let (render, actions) = handle_event(&mut controller, Event::Tick, t0 + Duration::from_millis(340));
//! assert!(render);
//! assert!(matches!(&actions[0], Action::FiltersChanged(filters) if filters.search_term == "fox"));
//! assert_eq!(controller.result().unpaginated_length, 2);
//! ```

pub mod app;
pub mod domain;
pub mod reducer;
pub mod scheduler;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, FilterMode, Settings, TableController};
pub use domain::{
    FieldValue, FilterPatch, FilterResult, FilterState, Pagination, Result, Row, Sort,
    SortDirection, TableViewError,
};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Controller configuration.
///
/// Read leniently from a string map ([`Config::from_map`]) or strictly from a
/// TOML document ([`Config::from_toml_str`], [`Config::load`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Quiet period before search input is applied. Default: 300
    pub search_debounce_ms: u64,

    /// Window merging paginator and sort events. Default: 100
    pub control_coalesce_ms: u64,

    /// Page size of a fresh view. Default: 10
    pub default_page_size: usize,

    /// Where filtering happens. Default: `client`
    pub mode: FilterMode,

    /// Level for the `tracing` subscriber.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. `RUST_LOG` takes precedence.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
            control_coalesce_ms: 100,
            default_page_size: domain::DEFAULT_PAGE_SIZE,
            mode: FilterMode::Client,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map, such as host-provided options.
    ///
    /// Each key falls back to its default when missing or unparseable, and a
    /// page size of 0 is ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use tableview::{Config, FilterMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("search_debounce_ms".to_string(), "250".to_string());
    /// map.insert("default_page_size".to_string(), "zero".to_string());
    /// map.insert("mode".to_string(), "server".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.search_debounce_ms, 250);
    /// assert_eq!(config.default_page_size, 10);
    /// assert_eq!(config.mode, FilterMode::Server);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let search_debounce_ms = map
            .get("search_debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.search_debounce_ms);

        let control_coalesce_ms = map
            .get("control_coalesce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.control_coalesce_ms);

        let default_page_size = map
            .get("default_page_size")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(defaults.default_page_size);

        let mode = map
            .get("mode")
            .and_then(|s| {
                s.parse::<FilterMode>()
                    .map_err(|e| tracing::debug!(error = %e, "ignoring mode"))
                    .ok()
            })
            .unwrap_or(defaults.mode);

        Self {
            search_debounce_ms,
            control_coalesce_ms,
            default_page_size,
            mode,
            trace_level: map.get("trace_level").cloned(),
        }
    }

    /// Parses a TOML document. Unknown keys and a zero page size are errors.
    ///
    /// # Errors
    ///
    /// Returns [`TableViewError::Toml`] for malformed TOML or unknown keys and
    /// [`TableViewError::Config`] for invalid values.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        if config.default_page_size == 0 {
            return Err(TableViewError::Config(
                "default_page_size must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`TableViewError::Io`] when the file cannot be read, otherwise
    /// as [`Config::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading configuration");
        Self::from_toml_str(&contents)
    }

    /// Controller settings described by this configuration.
    #[must_use]
    pub const fn settings(&self) -> Settings {
        Settings {
            search_debounce: Duration::from_millis(self.search_debounce_ms),
            control_coalesce: Duration::from_millis(self.control_coalesce_ms),
            page_size: self.default_page_size,
            mode: self.mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_map(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn map_accepts_mode_aliases() {
        let map = BTreeMap::from([
            ("mode".to_string(), "server-side".to_string()),
            ("trace_level".to_string(), "debug".to_string()),
        ]);
        let config = Config::from_map(&map);
        assert_eq!(config.mode, FilterMode::Server);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn map_ignores_bad_mode() {
        let map = BTreeMap::from([("mode".to_string(), "hybrid".to_string())]);
        assert_eq!(Config::from_map(&map).mode, FilterMode::Client);
    }

    #[test]
    fn toml_partial_document_keeps_defaults() {
        let config = Config::from_toml_str("default_page_size = 25\nmode = \"server\"\n").unwrap();
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.mode, FilterMode::Server);
        assert_eq!(config.search_debounce_ms, 300);
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        let err = Config::from_toml_str("page_size = 5\n").unwrap_err();
        assert!(matches!(err, TableViewError::Toml(_)));
    }

    #[test]
    fn toml_rejects_zero_page_size() {
        let err = Config::from_toml_str("default_page_size = 0\n").unwrap_err();
        assert!(matches!(err, TableViewError::Config(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "search_debounce_ms = 500").unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.settings().search_debounce, Duration::from_millis(500));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, TableViewError::Io(_)));
    }
}
