//! Curator library crate providing the product review console.
//!
//! The library talks to a catalog backend over REST, partitions the product
//! list into status views, and drives an interactive terminal console where
//! an operator approves, rejects, or defers products one at a time.

pub mod catalog;
pub mod config;
pub mod telemetry;
pub mod tui;

pub use catalog::{
    CatalogError, HttpProductGateway, Product, ProductGateway, ProductId, ProductStatus,
    TransitionStatus,
};
pub use config::{CuratorConfig, OperationMode};
