//! Main TUI application model implementing the MVU pattern.
//!
//! [`ReviewApp`] is the review queue controller. It owns the product list as
//! last fetched, the three status views derived from it, the selected record,
//! per-view page counters, and the reject confirmation. Network work runs in
//! bubbletea-rs commands that report back as [`AppMsg`] values.
//!
//! # Module Structure
//!
//! - `routing`: Message dispatch and reject-prompt blocking
//! - `navigation`: Circular record navigation
//! - `view_handlers`: View switching and pagination
//! - `status_handlers`: Approve, reject, and review-later transitions
//! - `sync_handlers`: Product list loading with stale-response guarding
//! - `rendering`: View rendering methods for terminal output
//! - `model_impl`: The `bubbletea_rs::Model` implementation

use std::fmt;
use std::sync::Arc;

use crate::catalog::{Product, ProductGateway, ProductId};
use crate::config::DEFAULT_PAGE_SIZE;
use crate::telemetry::TelemetrySink;

use super::components::{ProductDetailComponent, ProductListComponent};
use super::state::{
    DerivedViews, LoadTracker, PageCounters, RejectPrompt, ReviewView, derive_views,
    has_next_page, has_previous_page, last_page, page_range,
};

mod model_impl;
mod navigation;
mod rendering;
mod routing;
mod status_handlers;
mod sync_handlers;
mod view_handlers;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Main application model for the review console.
pub struct ReviewApp {
    /// All products in backend order, as last fetched.
    pub(crate) products: Vec<Product>,
    /// Positions of the records in each filtered view.
    views: DerivedViews,
    /// View currently shown.
    pub(crate) current_view: ReviewView,
    /// Position of the selected record in `products`.
    pub(crate) selected_index: Option<usize>,
    /// Page counters for the filtered views.
    pub(crate) pages: PageCounters,
    /// Rows per page in the filtered views.
    page_size: usize,
    /// Reject confirmation state.
    pub(crate) reject_prompt: RejectPrompt,
    /// Record whose status update is outstanding, if any.
    pub(crate) update_in_flight: Option<ProductId>,
    /// Sequence numbers for list fetches.
    loads: LoadTracker,
    /// Current error message, if any.
    pub(crate) error: Option<String>,
    /// Informational message, shown when there is no error.
    pub(crate) notice: Option<String>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    product_list: ProductListComponent,
    product_detail: ProductDetailComponent,
    gateway: Option<Arc<dyn ProductGateway>>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl fmt::Debug for ReviewApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewApp")
            .field("products", &self.products.len())
            .field("current_view", &self.current_view)
            .field("selected_index", &self.selected_index)
            .field("pages", &self.pages)
            .field("reject_prompt", &self.reject_prompt)
            .field("update_in_flight", &self.update_in_flight)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl ReviewApp {
    /// Creates a new application showing the given products.
    ///
    /// No gateway is attached; loads and status changes report an error
    /// until [`ReviewApp::with_gateway`] is used.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let (width, height) = super::get_initial_terminal_size();
        let mut app = Self {
            products: Vec::new(),
            views: DerivedViews::default(),
            current_view: ReviewView::All,
            selected_index: None,
            pages: PageCounters::default(),
            page_size: DEFAULT_PAGE_SIZE,
            reject_prompt: RejectPrompt::Closed,
            update_in_flight: None,
            loads: LoadTracker::default(),
            error: None,
            notice: None,
            width,
            height,
            show_help: false,
            product_list: ProductListComponent::new(),
            product_detail: ProductDetailComponent::new(),
            gateway: None,
            telemetry: super::get_telemetry_sink(),
        };
        app.apply_products(products);
        app
    }

    /// Creates an empty application (for initial loading state).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Attaches the gateway used for loads and status changes.
    #[must_use]
    pub fn with_gateway(mut self, gateway: Arc<dyn ProductGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Sets the number of rows per page; zero is treated as one.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self.pages.clamp(&self.views, self.page_size);
        self
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Sets the terminal dimensions used for rendering.
    #[must_use]
    pub const fn with_dimensions(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns every product in backend order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the position of the selected record, `None` when empty.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Returns the selected record, if any.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_index
            .and_then(|index| self.products.get(index))
    }

    /// Returns the view currently shown.
    #[must_use]
    pub const fn current_view(&self) -> ReviewView {
        self.current_view
    }

    /// Returns the rows per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the records in a view, in backend order.
    #[must_use]
    pub fn view_products(&self, view: ReviewView) -> Vec<&Product> {
        self.views.indices(view).map_or_else(
            || self.products.iter().collect(),
            |indices| self.resolve(indices),
        )
    }

    /// Returns the number of records in a view.
    #[must_use]
    pub fn view_len(&self, view: ReviewView) -> usize {
        self.views
            .indices(view)
            .map_or(self.products.len(), <[usize]>::len)
    }

    /// Returns the current zero-based page of a filtered view.
    #[must_use]
    pub const fn page(&self, view: ReviewView) -> usize {
        self.pages.get(view)
    }

    /// Returns the number of pages in a filtered view, at least one.
    #[must_use]
    pub fn page_count(&self, view: ReviewView) -> usize {
        last_page(self.view_len(view), self.page_size).saturating_add(1)
    }

    /// Returns the records on the current page of a filtered view.
    ///
    /// The All view is not paginated and yields an empty list.
    #[must_use]
    pub fn page_items(&self, view: ReviewView) -> Vec<&Product> {
        self.resolve(self.page_indices(view))
    }

    /// Returns true when the "next page" control is offered for a view.
    #[must_use]
    pub fn has_next_page(&self, view: ReviewView) -> bool {
        view.is_list() && has_next_page(self.view_len(view), self.page(view), self.page_size)
    }

    /// Returns true when the "previous page" control is offered for a view.
    #[must_use]
    pub const fn has_previous_page(&self, view: ReviewView) -> bool {
        view.is_list() && has_previous_page(self.page(view))
    }

    /// Returns the reject confirmation state.
    #[must_use]
    pub const fn reject_prompt(&self) -> &RejectPrompt {
        &self.reject_prompt
    }

    /// Returns true while the reject confirmation is showing.
    #[must_use]
    pub const fn is_reject_pending(&self) -> bool {
        self.reject_prompt.is_open()
    }

    /// Returns true while a status update is outstanding.
    #[must_use]
    pub const fn is_update_in_flight(&self) -> bool {
        self.update_in_flight.is_some()
    }

    /// Returns true while a product list fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loads.is_loading()
    }

    /// Returns the current error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the current notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Positions shown on the current page of a filtered view.
    fn page_indices(&self, view: ReviewView) -> &[usize] {
        let Some(indices) = self.views.indices(view) else {
            return &[];
        };
        let range = page_range(indices.len(), self.page(view), self.page_size);
        indices.get(range).unwrap_or_default()
    }

    fn resolve(&self, indices: &[usize]) -> Vec<&Product> {
        indices
            .iter()
            .filter_map(|&index| self.products.get(index))
            .collect()
    }

    /// Replaces the product list and rebuilds everything derived from it.
    ///
    /// Selection resets to the first record and page counters are clamped to
    /// the new view lengths. An open reject prompt keeps the selection on its
    /// product; a pending prompt whose product vanished is closed.
    pub(crate) fn apply_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.views = derive_views(&self.products);
        self.selected_index = (!self.products.is_empty()).then_some(0);
        self.pages.clamp(&self.views, self.page_size);
        self.follow_reject_prompt();
    }

    fn follow_reject_prompt(&mut self) {
        let Some(target) = self.reject_prompt.product_id() else {
            return;
        };

        if let Some(position) = self.products.iter().position(|product| &product.id == target) {
            self.selected_index = Some(position);
        } else if matches!(self.reject_prompt, RejectPrompt::Pending { .. }) {
            tracing::debug!(product_id = %target, "reject target vanished after reload");
            self.reject_prompt = RejectPrompt::Closed;
        }
    }
}




#[cfg(test)]
#[path = "sync_handlers_tests.rs"]
mod sync_handlers_tests;
