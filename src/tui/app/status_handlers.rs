//! Status transition handlers.
//!
//! Approve and review-later go straight to the backend. Reject is two-phase:
//! the request opens a confirmation and only the confirmation sends the
//! update. Every accepted update is followed by a full reload; a failed one
//! leaves the product list untouched.
//!
//! At most one update is in flight. Requests arriving while one is
//! outstanding are ignored with a notice.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::catalog::{CatalogError, ProductId, TransitionStatus};
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;
use crate::tui::state::RejectPrompt;

const UPDATE_BUSY_NOTICE: &str = "A status update is already in progress";

impl ReviewApp {
    /// Dispatches status transition messages to their handlers.
    pub(super) fn handle_status_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Approve => self.handle_transition(TransitionStatus::Approved),
            AppMsg::ReviewLater => self.handle_transition(TransitionStatus::ReviewLater),
            AppMsg::RequestReject => self.handle_request_reject(),
            AppMsg::ConfirmReject => self.handle_confirm_reject(),
            AppMsg::CancelReject => self.handle_cancel_reject(),
            AppMsg::StatusUpdated { product_id, status } => {
                self.handle_status_updated(product_id, *status)
            }
            AppMsg::StatusUpdateFailed {
                product_id,
                status,
                error,
            } => self.handle_status_update_failed(product_id, *status, error),
            _ => {
                // Unreachable: caller filters to status messages.
                None
            }
        }
    }

    fn selected_product_id(&self) -> Option<ProductId> {
        self.selected_product().map(|product| product.id.clone())
    }

    /// Sends an immediate transition for the selected record.
    fn handle_transition(&mut self, status: TransitionStatus) -> Option<Cmd> {
        let product_id = self.selected_product_id()?;
        self.issue_status_update(product_id, status)
    }

    /// Opens the reject confirmation for the selected record.
    fn handle_request_reject(&mut self) -> Option<Cmd> {
        if self.reject_prompt.is_open() {
            return None;
        }
        let product_id = self.selected_product_id()?;
        if self.update_in_flight.is_some() {
            self.notice = Some(UPDATE_BUSY_NOTICE.to_owned());
            return None;
        }
        self.reject_prompt = RejectPrompt::Pending { product_id };
        None
    }

    /// Sends the rejection; the prompt stays up until the update completes.
    fn handle_confirm_reject(&mut self) -> Option<Cmd> {
        let RejectPrompt::Pending {
            product_id: pending_id,
        } = &self.reject_prompt
        else {
            return None;
        };
        let product_id = pending_id.clone();
        let cmd = self.issue_status_update(product_id.clone(), TransitionStatus::Rejected);
        self.reject_prompt = if cmd.is_some() {
            RejectPrompt::Submitting { product_id }
        } else {
            RejectPrompt::Closed
        };
        cmd
    }

    /// Dismisses a pending confirmation. A confirmed rejection cannot be
    /// cancelled.
    fn handle_cancel_reject(&mut self) -> Option<Cmd> {
        if matches!(self.reject_prompt, RejectPrompt::Pending { .. }) {
            self.reject_prompt = RejectPrompt::Closed;
        }
        None
    }

    /// Starts a status update unless another one is outstanding.
    fn issue_status_update(
        &mut self,
        product_id: ProductId,
        status: TransitionStatus,
    ) -> Option<Cmd> {
        if let Some(pending) = &self.update_in_flight {
            tracing::debug!(%pending, requested = %product_id, "status update already in flight");
            self.notice = Some(UPDATE_BUSY_NOTICE.to_owned());
            return None;
        }
        let Some(gateway) = self.gateway.as_ref().map(Arc::clone) else {
            self.error = Some("Catalog gateway not configured".to_owned());
            return None;
        };

        self.update_in_flight = Some(product_id.clone());
        self.notice = None;
        Some(Box::pin(async move {
            let msg = match gateway.update_status(&product_id, status).await {
                Ok(()) => AppMsg::StatusUpdated { product_id, status },
                Err(error) => AppMsg::StatusUpdateFailed {
                    product_id,
                    status,
                    error,
                },
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        }))
    }

    /// Closes a submitting confirmation once its update has completed.
    fn finish_status_update(&mut self) {
        self.update_in_flight = None;
        if self.reject_prompt.is_submitting() {
            self.reject_prompt = RejectPrompt::Closed;
        }
    }

    fn handle_status_updated(
        &mut self,
        product_id: &ProductId,
        status: TransitionStatus,
    ) -> Option<Cmd> {
        self.finish_status_update();
        tracing::info!(%product_id, %status, "status change applied");
        self.telemetry.record(TelemetryEvent::StatusChangeApplied {
            product_id: product_id.to_string(),
            status: status.to_string(),
        });
        self.error = None;
        self.notice = Some(format!("Product {product_id} {}", status.label()));
        self.start_load()
    }

    fn handle_status_update_failed(
        &mut self,
        product_id: &ProductId,
        status: TransitionStatus,
        error: &CatalogError,
    ) -> Option<Cmd> {
        self.finish_status_update();
        tracing::warn!(%product_id, %status, %error, "status change failed");
        self.error = Some(format!("Failed to update product {product_id}: {error}"));
        None
    }
}
