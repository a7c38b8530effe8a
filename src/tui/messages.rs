//! Message types for the TUI update loop.
//!
//! Messages represent operator actions, async command results, and system
//! events. Each message belongs to exactly one category, which the router
//! uses for dispatch and for blocking while the reject prompt is open.

use crate::catalog::{CatalogError, Product, ProductId, TransitionStatus};

use super::state::ReviewView;

/// Messages for the review console.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Record navigation (All view)
    /// Select the next record, wrapping to the first.
    NextRecord,
    /// Select the previous record, wrapping to the last.
    PreviousRecord,

    // Views and pagination
    /// Switch to a specific view.
    SetView(ReviewView),
    /// Switch to the next view in tab order.
    CycleView,
    /// Advance the current list view by one page.
    NextPage,
    /// Go back one page in the current list view.
    PreviousPage,

    // Status transitions
    /// Approve the selected record.
    Approve,
    /// Open the reject confirmation for the selected record.
    RequestReject,
    /// Accept the reject confirmation.
    ConfirmReject,
    /// Dismiss the reject confirmation.
    CancelReject,
    /// Mark the selected record for later review.
    ReviewLater,
    /// The backend accepted a status change.
    StatusUpdated {
        /// Updated record.
        product_id: ProductId,
        /// New status.
        status: TransitionStatus,
    },
    /// The backend rejected a status change or could not be reached.
    StatusUpdateFailed {
        /// Record the change was for.
        product_id: ProductId,
        /// Status that was requested.
        status: TransitionStatus,
        /// Error detail.
        error: CatalogError,
    },

    // Data loading
    /// Fetch the full product list again.
    ReloadRequested,
    /// A product list fetch completed.
    ProductsLoaded {
        /// Sequence number of the load that produced this result.
        request: u64,
        /// Records in backend order.
        products: Vec<Product>,
    },
    /// A product list fetch failed.
    LoadFailed {
        /// Sequence number of the failed load.
        request: u64,
        /// Error detail.
        error: CatalogError,
    },

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for record navigation messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(self, Self::NextRecord | Self::PreviousRecord)
    }

    /// Returns true for view selection and pagination messages.
    #[must_use]
    pub const fn is_view(&self) -> bool {
        matches!(
            self,
            Self::SetView(_) | Self::CycleView | Self::NextPage | Self::PreviousPage
        )
    }

    /// Returns true for status transition requests and their results.
    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(
            self,
            Self::Approve
                | Self::RequestReject
                | Self::ConfirmReject
                | Self::CancelReject
                | Self::ReviewLater
                | Self::StatusUpdated { .. }
                | Self::StatusUpdateFailed { .. }
        )
    }

    /// Returns true for the two reject prompt answers.
    #[must_use]
    pub const fn is_reject_prompt(&self) -> bool {
        matches!(self, Self::ConfirmReject | Self::CancelReject)
    }

    /// Returns true for load requests and their results.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::ReloadRequested | Self::ProductsLoaded { .. } | Self::LoadFailed { .. }
        )
    }

    /// Returns true for messages produced by completed commands rather than
    /// by the operator.
    #[must_use]
    pub const fn is_command_result(&self) -> bool {
        matches!(
            self,
            Self::StatusUpdated { .. }
                | Self::StatusUpdateFailed { .. }
                | Self::ProductsLoaded { .. }
                | Self::LoadFailed { .. }
        )
    }

    /// Returns true for quit, help, and window messages.
    #[must_use]
    pub const fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            Self::Quit | Self::ToggleHelp | Self::WindowResized { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::AppMsg;
    use crate::tui::state::ReviewView;

    #[rstest]
    #[case::next(AppMsg::NextRecord)]
    #[case::previous(AppMsg::PreviousRecord)]
    fn navigation_messages_are_categorised(#[case] msg: AppMsg) {
        assert!(msg.is_navigation());
        assert!(!msg.is_view());
        assert!(!msg.is_status());
        assert!(!msg.is_data());
    }

    #[rstest]
    #[case::set(AppMsg::SetView(ReviewView::Rejected))]
    #[case::cycle(AppMsg::CycleView)]
    #[case::next_page(AppMsg::NextPage)]
    #[case::previous_page(AppMsg::PreviousPage)]
    fn view_messages_are_categorised(#[case] msg: AppMsg) {
        assert!(msg.is_view());
        assert!(!msg.is_navigation());
        assert!(!msg.is_status());
    }

    #[rstest]
    fn reject_answers_are_status_messages() {
        assert!(AppMsg::ConfirmReject.is_reject_prompt());
        assert!(AppMsg::ConfirmReject.is_status());
        assert!(AppMsg::CancelReject.is_reject_prompt());
        assert!(!AppMsg::RequestReject.is_reject_prompt());
    }

    #[rstest]
    #[case::quit(AppMsg::Quit)]
    #[case::help(AppMsg::ToggleHelp)]
    #[case::resize(AppMsg::WindowResized { width: 80, height: 24 })]
    fn lifecycle_messages_are_categorised(#[case] msg: AppMsg) {
        assert!(msg.is_lifecycle());
        assert!(!msg.is_navigation());
        assert!(!msg.is_view());
        assert!(!msg.is_status());
        assert!(!msg.is_data());
        assert!(!msg.is_command_result());
    }

    #[rstest]
    #[case::loaded(AppMsg::ProductsLoaded { request: 1, products: Vec::new() })]
    #[case::reload(AppMsg::ReloadRequested)]
    fn only_results_are_command_results(#[case] msg: AppMsg) {
        assert_eq!(
            msg.is_command_result(),
            matches!(msg, AppMsg::ProductsLoaded { .. })
        );
        assert!(!msg.is_lifecycle());
    }
}
