//! Filtering strategy selection.
//!
//! Whether search, sort and pagination run in memory or on the backend varies
//! per screen. Both strategies sit behind the same [`FilterState`] contract:
//!
//! - **`Client`**: the controller holds the whole collection and reduces
//!   it on every transition
//! - **`Server`**: every transition becomes a page request; the page the
//!   backend returns is displayed as-is
//!
//! [`FilterState`]: crate::domain::FilterState

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Where filtering, sorting and pagination happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// In-memory reduction over an already fetched collection.
    #[default]
    #[serde(alias = "client-side")]
    Client,

    /// Backend pagination driven by query parameters.
    #[serde(alias = "server-side")]
    Server,
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "client" | "client-side" => Ok(Self::Client),
            "server" | "server-side" => Ok(Self::Server),
            other => Err(format!("unknown filter mode: {other}")),
        }
    }
}
