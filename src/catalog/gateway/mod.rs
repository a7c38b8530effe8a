//! Gateways for loading and updating products on the catalog backend.
//!
//! The trait-based design lets the review controller be driven by mocks in
//! tests while [`HttpProductGateway`] performs the real REST calls.

mod http;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use http::HttpProductGateway;

use async_trait::async_trait;

use crate::catalog::error::CatalogError;
use crate::catalog::models::{Product, ProductId, TransitionStatus};

/// Gateway exposing the backend's list and per-record update operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Fetch every product, in backend order.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Move one product into a new review status.
    async fn update_status(
        &self,
        id: &ProductId,
        status: TransitionStatus,
    ) -> Result<(), CatalogError>;
}
