//! Tests for product list loading and stale-result handling.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::ReviewApp;
use super::test_support::run_command_chain;
use crate::catalog::models::test_support::{create_products, products_with_statuses};
use crate::catalog::{CatalogError, MockProductGateway, ProductId, ProductStatus};
use crate::telemetry::TelemetryEvent;
use crate::telemetry::test_support::RecordingTelemetrySink;
use crate::tui::messages::AppMsg;
use crate::tui::state::ReviewView;

/// An app whose gateway must never be reached; commands are dropped unrun.
#[fixture]
fn idle_app() -> ReviewApp {
    let mut mock = MockProductGateway::new();
    mock.expect_list_products().times(0);
    ReviewApp::new(create_products(3)).with_gateway(Arc::new(mock))
}

fn network_error() -> CatalogError {
    CatalogError::Network {
        message: "connection refused".to_owned(),
    }
}

#[rstest]
#[tokio::test]
async fn reload_replaces_products() {
    let mut mock = MockProductGateway::new();
    mock.expect_list_products()
        .times(1)
        .returning(|| Ok(create_products(5)));
    let mut app = ReviewApp::new(create_products(2)).with_gateway(Arc::new(mock));

    let cmd = app.handle_message(&AppMsg::ReloadRequested);
    assert!(app.is_loading());
    run_command_chain(&mut app, cmd).await;

    assert!(!app.is_loading());
    assert_eq!(app.products().len(), 5);
    assert_eq!(app.selected_index(), Some(0));
    assert!(app.error().is_none());
}

#[rstest]
fn stale_list_is_discarded(mut idle_app: ReviewApp) {
    let _first = idle_app.handle_message(&AppMsg::ReloadRequested);
    let _second = idle_app.handle_message(&AppMsg::ReloadRequested);

    idle_app.handle_message(&AppMsg::ProductsLoaded {
        request: 2,
        products: create_products(4),
    });
    idle_app.handle_message(&AppMsg::ProductsLoaded {
        request: 1,
        products: create_products(1),
    });

    assert_eq!(idle_app.products().len(), 4);
    assert!(!idle_app.is_loading());
}

#[rstest]
fn superseded_list_does_not_end_loading(mut idle_app: ReviewApp) {
    let _first = idle_app.handle_message(&AppMsg::ReloadRequested);
    let _second = idle_app.handle_message(&AppMsg::ReloadRequested);

    idle_app.handle_message(&AppMsg::ProductsLoaded {
        request: 1,
        products: create_products(1),
    });

    assert!(idle_app.is_loading());
    assert_eq!(idle_app.products().len(), 3);
}

#[rstest]
fn stale_failure_is_discarded(mut idle_app: ReviewApp) {
    let _first = idle_app.handle_message(&AppMsg::ReloadRequested);
    let _second = idle_app.handle_message(&AppMsg::ReloadRequested);

    idle_app.handle_message(&AppMsg::LoadFailed {
        request: 1,
        error: network_error(),
    });

    assert!(idle_app.error().is_none());
    assert!(idle_app.is_loading());
}

#[rstest]
fn completion_after_finish_is_discarded(mut idle_app: ReviewApp) {
    let _load = idle_app.handle_message(&AppMsg::ReloadRequested);
    idle_app.handle_message(&AppMsg::ProductsLoaded {
        request: 1,
        products: create_products(2),
    });
    idle_app.handle_message(&AppMsg::ProductsLoaded {
        request: 1,
        products: create_products(6),
    });

    assert_eq!(idle_app.products().len(), 2);
}

#[rstest]
#[tokio::test]
async fn load_failure_keeps_products_and_reports() {
    let mut mock = MockProductGateway::new();
    mock.expect_list_products()
        .times(1)
        .returning(|| Err(network_error()));
    let mut app = ReviewApp::new(create_products(3)).with_gateway(Arc::new(mock));
    app.handle_message(&AppMsg::NextRecord);

    let cmd = app.handle_message(&AppMsg::ReloadRequested);
    run_command_chain(&mut app, cmd).await;

    assert_eq!(app.products().len(), 3);
    assert_eq!(app.selected_index(), Some(1));
    assert!(!app.is_loading());
    assert!(
        app.error()
            .is_some_and(|error| error.starts_with("Failed to load products:"))
    );
}

#[rstest]
fn successful_load_clears_previous_error(mut idle_app: ReviewApp) {
    let _failed = idle_app.handle_message(&AppMsg::ReloadRequested);
    idle_app.handle_message(&AppMsg::LoadFailed {
        request: 1,
        error: network_error(),
    });
    let _retry = idle_app.handle_message(&AppMsg::ReloadRequested);
    idle_app.handle_message(&AppMsg::ProductsLoaded {
        request: 2,
        products: create_products(1),
    });

    assert!(idle_app.error().is_none());
}

#[rstest]
fn reload_clamps_page_counters(mut idle_app: ReviewApp) {
    let approved = products_with_statuses(&vec![ProductStatus::Approved; 10]);
    let _initial = idle_app.handle_message(&AppMsg::ReloadRequested);
    idle_app.handle_message(&AppMsg::ProductsLoaded {
        request: 1,
        products: approved,
    });
    idle_app.handle_message(&AppMsg::SetView(ReviewView::Approved));
    idle_app.handle_message(&AppMsg::NextPage);
    assert_eq!(idle_app.page(ReviewView::Approved), 1);

    let shrunk = products_with_statuses(&vec![ProductStatus::Approved; 3]);
    let _reload = idle_app.handle_message(&AppMsg::ReloadRequested);
    idle_app.handle_message(&AppMsg::ProductsLoaded {
        request: 2,
        products: shrunk,
    });

    assert_eq!(idle_app.page(ReviewView::Approved), 0);
    assert_eq!(idle_app.page_items(ReviewView::Approved).len(), 3);
    assert!(!idle_app.has_previous_page(ReviewView::Approved));
}

#[rstest]
fn reload_resets_selection(mut idle_app: ReviewApp) {
    idle_app.handle_message(&AppMsg::NextRecord);
    idle_app.handle_message(&AppMsg::NextRecord);

    let _load = idle_app.handle_message(&AppMsg::ReloadRequested);
    idle_app.handle_message(&AppMsg::ProductsLoaded {
        request: 1,
        products: create_products(3),
    });

    assert_eq!(idle_app.selected_index(), Some(0));
}

#[rstest]
fn empty_reload_clears_selection(mut idle_app: ReviewApp) {
    let _load = idle_app.handle_message(&AppMsg::ReloadRequested);
    idle_app.handle_message(&AppMsg::ProductsLoaded {
        request: 1,
        products: Vec::new(),
    });

    assert_eq!(idle_app.selected_index(), None);
    assert!(idle_app.selected_product().is_none());
}

#[rstest]
fn applied_load_is_recorded_in_telemetry() {
    let mut mock = MockProductGateway::new();
    mock.expect_list_products().times(0);
    let sink = Arc::new(RecordingTelemetrySink::default());
    let mut app = ReviewApp::empty()
        .with_gateway(Arc::new(mock))
        .with_telemetry(sink.clone());

    let _load = app.handle_message(&AppMsg::ReloadRequested);
    app.handle_message(&AppMsg::ProductsLoaded {
        request: 1,
        products: create_products(2),
    });

    assert!(matches!(
        sink.take().as_slice(),
        [TelemetryEvent::ProductsLoaded {
            product_count: 2,
            ..
        }]
    ));
}

#[rstest]
fn reload_keeps_selection_on_pending_reject_target(mut idle_app: ReviewApp) {
    idle_app.handle_message(&AppMsg::NextRecord);
    idle_app.handle_message(&AppMsg::NextRecord);
    let _load = idle_app.handle_message(&AppMsg::ReloadRequested);
    idle_app.handle_message(&AppMsg::RequestReject);

    idle_app.handle_message(&AppMsg::ProductsLoaded {
        request: 1,
        products: create_products(3),
    });

    let target = ProductId::from(3_u64);
    assert_eq!(idle_app.selected_index(), Some(2));
    assert_eq!(idle_app.reject_prompt().product_id(), Some(&target));
    assert_eq!(
        idle_app.selected_product().map(|product| &product.id),
        Some(&target)
    );
}

#[rstest]
fn reload_closes_prompt_when_reject_target_vanishes(mut idle_app: ReviewApp) {
    idle_app.handle_message(&AppMsg::NextRecord);
    idle_app.handle_message(&AppMsg::NextRecord);
    let _load = idle_app.handle_message(&AppMsg::ReloadRequested);
    idle_app.handle_message(&AppMsg::RequestReject);

    idle_app.handle_message(&AppMsg::ProductsLoaded {
        request: 1,
        products: create_products(2),
    });

    assert!(!idle_app.is_reject_pending());
    assert_eq!(idle_app.selected_index(), Some(0));
}
