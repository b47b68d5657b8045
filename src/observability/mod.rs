//! Logging setup.
//!
//! The crate emits `tracing` spans around every controller transition and
//! reduction, at debug level. Nothing is printed until a subscriber is
//! installed; [`init_tracing`] installs a `tracing-subscriber` fmt subscriber.
//!
//! # Configuration
//!
//! The level is resolved as:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` from [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! Output goes to stderr, or to a log file written through `tracing-appender`.
//!
//! # Usage
//!
//! ```rust
//! use tableview::observability::init_tracing;
//! use tableview::Config;
//!
//! let config = Config::default();
//! init_tracing(&config, None)?;
//!
//! tracing::debug!("controller ready");
//! # Ok::<(), tableview::TableViewError>(())
//! ```

mod init;

pub use init::init_tracing;
