//! Error types for the table view-state controller.
//!
//! The controller and the reducer never fail on valid input: out-of-range
//! pages render empty and malformed pagination is clamped. Errors only arise
//! at the edges of the crate, where configuration files and JSON collections
//! are read. All variants are implemented with `thiserror`.

use thiserror::Error;

/// The main error type for tableview operations.
///
/// # Examples
///
/// ```
/// use tableview::TableViewError;
///
/// fn validate_page_size(size: usize) -> Result<(), TableViewError> {
///     if size == 0 {
///         return Err(TableViewError::Config("page size must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum TableViewError {
    /// Configuration is invalid or missing.
    ///
    /// Raised by strict configuration sources (TOML files). The lenient
    /// string-map source falls back to defaults instead.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON collection could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Decoded JSON is not a collection of records.
    #[error("Invalid collection: {0}")]
    Collection(String),

    /// A TOML configuration file could not be decoded.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// A specialized `Result` type for tableview operations.
pub type Result<T> = std::result::Result<T, TableViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.toml")?)
        }

        let err = read_missing().unwrap_err();
        assert!(matches!(err, TableViewError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn config_error_message_carries_detail() {
        let err = TableViewError::Config("page size must be positive".to_string());
        assert_eq!(err.to_string(), "Configuration error: page size must be positive");
    }
}
