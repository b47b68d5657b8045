//! Application layer: the controller, its events and its actions.
//!
//! ```text
//! View input → Event → handle_event → FilterState transition → Actions → Host
//!                 ↑                                                  │
//!                 └──────────── Tick / PageLoaded / ItemsLoaded ─────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects the host executes
//! - [`handler`]: Event routing
//! - [`modes`]: Client-side vs server-side filtering
//! - [`state`]: The controller itself

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::FilterMode;
pub use state::{Settings, TableController};
