//! Curator CLI entrypoint for the product review console.

use std::io::{self, Write};
use std::process::ExitCode;

use curator::{CatalogError, CuratorConfig, OperationMode};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CatalogError> {
    let config = load_config()?;
    config.validate()?;
    cli::logging::init(config.log_file.as_deref())?;

    match config.operation_mode() {
        OperationMode::Summary => cli::summary::run(&config).await,
        OperationMode::ReviewTui => cli::review_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CatalogError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<CuratorConfig, CatalogError> {
    CuratorConfig::load().map_err(|error| CatalogError::Configuration {
        message: error.to_string(),
    })
}
