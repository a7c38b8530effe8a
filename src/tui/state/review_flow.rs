//! Reject confirmation and load sequencing state.

use std::time::{Duration, Instant};

use crate::catalog::ProductId;

/// Lifecycle of the reject confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RejectPrompt {
    /// No confirmation is showing.
    #[default]
    Closed,
    /// Waiting for the operator to confirm or cancel.
    Pending {
        /// Record the rejection is for.
        product_id: ProductId,
    },
    /// Confirmed; the update is in flight and the prompt stays up until it
    /// completes.
    Submitting {
        /// Record the rejection is for.
        product_id: ProductId,
    },
}

impl RejectPrompt {
    /// Returns true while the prompt is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Returns true after confirmation while the update is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    /// Returns the record the prompt refers to.
    #[must_use]
    pub const fn product_id(&self) -> Option<&ProductId> {
        match self {
            Self::Closed => None,
            Self::Pending { product_id } | Self::Submitting { product_id } => Some(product_id),
        }
    }
}

/// Hands out monotonic sequence numbers for list fetches.
///
/// Only the most recently issued load may be applied; earlier completions are
/// stale.
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    latest: u64,
    started_at: Option<Instant>,
}

impl LoadTracker {
    /// Issues the sequence number for a new load.
    pub fn begin(&mut self) -> u64 {
        self.latest = self.latest.saturating_add(1);
        self.started_at = Some(Instant::now());
        self.latest
    }

    /// Returns true when `request` is the latest issued load and it has not
    /// completed yet.
    #[must_use]
    pub const fn is_current(&self, request: u64) -> bool {
        request == self.latest && self.started_at.is_some()
    }

    /// Returns true while the latest load has not completed.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.started_at.is_some()
    }

    /// Marks the latest load complete and returns its elapsed time.
    pub fn finish(&mut self) -> Duration {
        self.started_at
            .take()
            .map_or(Duration::ZERO, |started| started.elapsed())
    }
}
