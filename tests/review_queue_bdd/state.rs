//! Scenario state for review queue BDD tests.

use std::sync::Arc;

use curator::catalog::gateway::test_support::InMemoryProductGateway;
use curator::telemetry::test_support::RecordingTelemetrySink;
use curator::tui::app::ReviewApp;
use curator::tui::state::ReviewView;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

use super::runtime::SharedRuntime;

/// State shared across steps in a review queue scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct QueueState {
    /// Runtime used to await the console's commands.
    pub(crate) runtime: Slot<SharedRuntime>,
    /// Catalog backend double shared with the console.
    pub(crate) gateway: Slot<Arc<InMemoryProductGateway>>,
    /// The review console under test.
    pub(crate) app: Slot<ReviewApp>,
    /// Recording telemetry sink attached to the console.
    pub(crate) telemetry_sink: Slot<Arc<RecordingTelemetrySink>>,
}

/// Maps a view label as written in the feature file onto a view.
pub(crate) fn parse_view(label: &str) -> Option<ReviewView> {
    ReviewView::ORDER
        .into_iter()
        .find(|view| view.label() == label.trim())
}
