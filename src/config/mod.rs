//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.curator.toml` in the current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `CURATOR_BASE_URL`, `CURATOR_PAGE_SIZE`, ...
//! 4. **Command-line arguments** – `--base-url`/`-b`, `--page-size`/`-p`, ...
//!
//! # Configuration File
//!
//! ```toml
//! base_url = "http://localhost:3001"
//! page_size = 8
//! request_timeout_seconds = 10
//! log_file = "curator.log"
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Rows shown per page in the filtered list views.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Per-request timeout for catalog calls.
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Launch the interactive review console.
    ReviewTui,
    /// Print per-status counts and exit.
    Summary,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use curator::CuratorConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = CuratorConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration should be consistent");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "CURATOR",
    discovery(
        dotfile_name = ".curator.toml",
        config_file_name = "curator.toml",
        app_name = "curator"
    )
)]
pub struct CuratorConfig {
    /// Base URL of the catalog backend, without the `/products` suffix.
    ///
    /// Can be provided via:
    /// - CLI: `--base-url <URL>` or `-b <URL>`
    /// - Environment: `CURATOR_BASE_URL`
    /// - Config file: `base_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub base_url: String,

    /// Number of rows per page in the Approved, Rejected, and Review Later
    /// views. Must be at least one.
    ///
    /// Can be provided via:
    /// - CLI: `--page-size <N>` or `-p <N>`
    /// - Environment: `CURATOR_PAGE_SIZE`
    /// - Config file: `page_size = 8`
    #[ortho_config(cli_short = 'p')]
    pub page_size: usize,

    /// Timeout applied to each catalog request, in seconds.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// File receiving diagnostic logs. Logging is disabled when unset because
    /// the terminal belongs to the review console.
    ///
    /// Can be provided via:
    /// - CLI: `--log-file <PATH>`
    /// - Environment: `CURATOR_LOG_FILE`
    /// - Config file: `log_file = "..."`
    #[ortho_config()]
    pub log_file: Option<String>,

    /// Prints per-status counts instead of launching the console.
    ///
    /// Can be provided via:
    /// - CLI: `--summary` / `-s`
    /// - Config file: `summary = true`
    ///
    /// Note: `CURATOR_SUMMARY` is not read because `ortho_config` does not
    /// load boolean values from the environment.
    #[ortho_config(cli_short = 's')]
    pub summary: bool,
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            log_file: None,
            summary: false,
        }
    }
}

impl CuratorConfig {
    /// Validates values that the loaders cannot check on their own.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] when the base URL is blank or
    /// the page size or request timeout is zero.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.base_url.trim().is_empty() {
            return Err(CatalogError::Configuration {
                message: "catalog base URL is required (use --base-url or -b)".to_owned(),
            });
        }
        if self.page_size == 0 {
            return Err(CatalogError::Configuration {
                message: "page size must be at least 1".to_owned(),
            });
        }
        if self.request_timeout_seconds == 0 {
            return Err(CatalogError::Configuration {
                message: "request timeout must be at least 1 second".to_owned(),
            });
        }
        Ok(())
    }

    /// Returns the per-request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Determines the operation mode from the configured flags.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.summary {
            OperationMode::Summary
        } else {
            OperationMode::ReviewTui
        }
    }
}

#[cfg(test)]
mod tests;
