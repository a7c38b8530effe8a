//! Catalog client: product models, errors, and the REST gateway.
//!
//! The backend is an external collaborator exposing two operations:
//!
//! - `GET /products` returns every product record.
//! - `PUT /products/{id}` with `{"status": ...}` changes one record's status.

pub mod error;
pub mod gateway;
pub mod models;

pub use error::CatalogError;
pub use gateway::{HttpProductGateway, ProductGateway};
pub use models::{Product, ProductId, ProductStatus, StatusUpdate, TransitionStatus};

#[cfg(test)]
pub use gateway::MockProductGateway;
