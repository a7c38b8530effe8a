//! State management for the review console.
//!
//! This module provides the pure state types behind the controller: status
//! views and their derivation, per-view pagination, the reject prompt, and
//! the load sequence tracker.

mod pagination;
mod review_flow;
mod views;

pub use pagination::{PageCounters, has_next_page, has_previous_page, last_page, page_range};
pub use review_flow::{LoadTracker, RejectPrompt};
pub use views::{DerivedViews, ReviewView, derive_views};
