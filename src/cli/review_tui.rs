//! TUI mode for reviewing catalog products.
//!
//! This module provides the entry point for the interactive console. The
//! initial product load is issued by `ReviewApp::init()`, so the console
//! appears immediately and shows a loading indicator until the catalog
//! answers.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;
use crossterm::terminal;

use curator::tui::{ReviewApp, ReviewSession, set_initial_terminal_size, set_review_session};
use curator::{CatalogError, CuratorConfig, HttpProductGateway};

/// Runs the review console against the configured catalog.
///
/// # Errors
///
/// Returns an error if:
/// - The base URL is invalid
/// - The HTTP client cannot be configured
/// - The TUI fails to initialise
pub async fn run(config: &CuratorConfig) -> Result<(), CatalogError> {
    let gateway = HttpProductGateway::new(&config.base_url, config.request_timeout())?;
    tracing::info!(url = %gateway.products_url(), page_size = config.page_size, "starting review console");

    // Store the session for Model::init() to retrieve. If already set, the
    // existing session is kept.
    let _ = set_review_session(ReviewSession {
        gateway: Arc::new(gateway),
        page_size: config.page_size,
    });

    if let Ok((width, height)) = terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| CatalogError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `ReviewApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<ReviewApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
