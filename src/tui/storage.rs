//! Startup context storage for the review TUI.
//!
//! bubbletea-rs constructs the model through the static `Model::init()`, so
//! the CLI stores the review session here before the program starts and
//! `ReviewApp::init()` reads it back.

use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::catalog::ProductGateway;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

/// Global storage for the review session.
static REVIEW_SESSION: OnceLock<ReviewSession> = OnceLock::new();

/// Global storage for initial terminal dimensions.
///
/// This is set before the TUI program starts and read by `ReviewApp::new()`
/// so the first frame uses the actual terminal size.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Global storage for telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink to avoid allocations on each call.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Everything the review console needs to talk to the catalog.
#[derive(Clone)]
pub struct ReviewSession {
    /// Gateway used for loads and status updates.
    pub gateway: Arc<dyn ProductGateway>,
    /// Rows per page in the filtered list views.
    pub page_size: usize,
}

impl std::fmt::Debug for ReviewSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewSession")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

/// Sets the review session for the TUI application.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the session was set, `false` if it was already set.
pub fn set_review_session(session: ReviewSession) -> bool {
    REVIEW_SESSION.set(session).is_ok()
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets the review session, if configured.
pub(crate) fn get_review_session() -> Option<ReviewSession> {
    REVIEW_SESSION.get().cloned()
}

/// Gets the telemetry sink, returning a no-op sink if not configured.
pub(crate) fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Gets the initial terminal dimensions from storage.
///
/// Falls back to querying the terminal, then to 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}
