//! In-memory product gateway for behavioural tests.
//!
//! [`InMemoryProductGateway`] behaves like a tiny backend: updates change the
//! stored status and later listings reflect them. Every call is recorded so
//! tests can assert on the exact request sequence.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::ProductGateway;
use crate::catalog::error::CatalogError;
use crate::catalog::models::{Product, ProductId, TransitionStatus};

/// A call observed by [`InMemoryProductGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    /// `GET /products`.
    List,
    /// `PUT /products/{id}`.
    Update {
        /// Product identifier in the request path.
        id: ProductId,
        /// Status sent in the request body.
        status: TransitionStatus,
    },
}

#[derive(Debug, Default)]
struct GatewayState {
    products: Vec<Product>,
    calls: Vec<GatewayCall>,
    fail_updates: bool,
    fail_listing: bool,
}

/// Product gateway backed by an in-memory product list.
#[derive(Debug, Default)]
pub struct InMemoryProductGateway {
    state: Mutex<GatewayState>,
}

impl InMemoryProductGateway {
    /// Creates a gateway serving the given products.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            state: Mutex::new(GatewayState {
                products,
                ..GatewayState::default()
            }),
        }
    }

    /// Makes subsequent update calls fail with a server error.
    pub fn fail_updates(&self, fail: bool) {
        self.lock().fail_updates = fail;
    }

    /// Makes subsequent list calls fail with a network error.
    pub fn fail_listing(&self, fail: bool) {
        self.lock().fail_listing = fail;
    }

    /// Returns every call observed so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.lock().calls.clone()
    }

    /// Returns the stored products.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    fn lock(&self) -> MutexGuard<'_, GatewayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ProductGateway for InMemoryProductGateway {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let mut state = self.lock();
        state.calls.push(GatewayCall::List);
        if state.fail_listing {
            return Err(CatalogError::Network {
                message: "list products failed: connection refused".to_owned(),
            });
        }
        Ok(state.products.clone())
    }

    async fn update_status(
        &self,
        id: &ProductId,
        status: TransitionStatus,
    ) -> Result<(), CatalogError> {
        let mut state = self.lock();
        state.calls.push(GatewayCall::Update {
            id: id.clone(),
            status,
        });
        if state.fail_updates {
            return Err(CatalogError::Api {
                status: 500,
                message: format!("update product {id} failed: internal error"),
            });
        }

        let product = state
            .products
            .iter_mut()
            .find(|product| &product.id == id)
            .ok_or_else(|| CatalogError::Api {
                status: 404,
                message: format!("update product {id} failed: not found"),
            })?;
        product.status = status.into();
        product.updated_at = Some("2025-06-01T09:00:00Z".to_owned());
        Ok(())
    }
}
