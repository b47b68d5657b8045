//! Tracing initialization and subscriber setup.

use crate::domain::{Result, TableViewError};
use crate::Config;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// With `log_file` set, the parent directory is created and events are
/// appended to the file without ANSI colors. Otherwise they go to stderr.
///
/// Idempotent: when a global subscriber is already installed, the call
/// returns `Ok(())` and the existing subscriber stays in place.
///
/// # Errors
///
/// Returns [`TableViewError::Io`] when the log directory cannot be created,
/// and [`TableViewError::Logging`] when `log_file` names a directory or has
/// no file name.
pub fn init_tracing(config: &Config, log_file: Option<&Path>) -> Result<()> {
    let filter = resolve_filter(config.trace_level.as_deref());

    let installed = match log_file {
        Some(path) => {
            if path.is_dir() {
                return Err(TableViewError::Logging(format!(
                    "log file path is a directory: {}",
                    path.display()
                )));
            }
            let file_name = path
                .file_name()
                .ok_or_else(|| TableViewError::Logging(format!("not a file path: {}", path.display())))?;
            let directory = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(directory)?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(appender)
                .with_ansi(false)
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

/// `RUST_LOG`, then the configured level, then `info`.
fn resolve_filter(trace_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        trace_level
            .and_then(|level| EnvFilter::try_new(level).ok())
            .unwrap_or_else(|| EnvFilter::new("info"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("logs").join("tableview.log");

        init_tracing(&Config::default(), Some(&log_file)).unwrap();

        assert!(dir.path().join("logs").is_dir());
    }

    #[test]
    fn second_init_is_ok() {
        init_tracing(&Config::default(), None).unwrap();
        init_tracing(&Config::default(), None).unwrap();
    }

    #[test]
    fn rejects_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = init_tracing(&Config::default(), Some(dir.path())).unwrap_err();
        assert!(matches!(err, TableViewError::Logging(_)));
    }

    #[test]
    fn rejects_path_without_file_name() {
        let err = init_tracing(&Config::default(), Some(Path::new("/"))).unwrap_err();
        assert!(matches!(err, TableViewError::Logging(_)));
    }
}
