//! Product list loading for the review TUI.
//!
//! Every fetch carries a sequence number. Only the completion of the most
//! recently issued fetch is applied; anything older is discarded so a slow
//! response can never overwrite newer data.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::catalog::{CatalogError, Product};
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;

impl ReviewApp {
    /// Dispatches data loading messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ReloadRequested => self.start_load(),
            AppMsg::ProductsLoaded { request, products } => {
                self.handle_products_loaded(*request, products)
            }
            AppMsg::LoadFailed { request, error } => self.handle_load_failed(*request, error),
            _ => {
                // Unreachable: caller filters to data messages.
                None
            }
        }
    }

    /// Issues a fetch of the full product list.
    ///
    /// A fetch started while another is outstanding supersedes it.
    pub(crate) fn start_load(&mut self) -> Option<Cmd> {
        let Some(gateway) = self.gateway.as_ref().map(Arc::clone) else {
            self.error = Some("Catalog gateway not configured".to_owned());
            return None;
        };

        let request = self.loads.begin();
        tracing::debug!(request, "loading products");
        Some(Box::pin(async move {
            let msg = match gateway.list_products().await {
                Ok(products) => AppMsg::ProductsLoaded { request, products },
                Err(error) => AppMsg::LoadFailed { request, error },
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        }))
    }

    fn handle_products_loaded(&mut self, request: u64, products: &[Product]) -> Option<Cmd> {
        if !self.loads.is_current(request) {
            tracing::debug!(request, "discarding stale product list");
            return None;
        }

        let elapsed = self.loads.finish();
        let latency_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.apply_products(products.to_vec());
        self.error = None;

        tracing::info!(
            product_count = self.products.len(),
            latency_ms,
            "products loaded"
        );
        self.telemetry.record(TelemetryEvent::ProductsLoaded {
            product_count: self.products.len(),
            latency_ms,
        });
        None
    }

    fn handle_load_failed(&mut self, request: u64, error: &CatalogError) -> Option<Cmd> {
        if !self.loads.is_current(request) {
            tracing::debug!(request, %error, "discarding stale load failure");
            return None;
        }

        let _elapsed = self.loads.finish();
        tracing::warn!(%error, "failed to load products");
        self.error = Some(format!("Failed to load products: {error}"));
        None
    }
}
