//! Diagnostic logging setup.
//!
//! The review console owns the terminal, so logs only go to a file. Without a
//! configured file no subscriber is installed and `tracing` macros are inert.

use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use curator::CatalogError;
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info";

/// Installs a global subscriber writing plain-text logs to `log_file`.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the file cannot be opened and
/// [`CatalogError::Configuration`] when a global subscriber is already set.
pub fn init(log_file: Option<&str>) -> Result<(), CatalogError> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|error| CatalogError::Configuration {
            message: format!("failed to initialise logging: {error}"),
        })
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &str) -> Result<File, CatalogError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| CatalogError::Io {
            message: format!("failed to open log file '{path}': {error}"),
        })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn missing_log_file_is_a_noop() {
        assert!(init(None).is_ok());
    }

    #[rstest]
    fn unopenable_log_file_is_an_io_error() {
        let result = open_log_file("/nonexistent-curator-dir/curator.log");

        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
