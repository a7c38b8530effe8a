//! Test helpers for constructing `Product` fixtures.
//!
//! # Examples
//!
//! ```
//! use curator::catalog::models::ProductStatus;
//! use curator::catalog::models::test_support::{product_with_status, products_with_statuses};
//!
//! let product = product_with_status(42, ProductStatus::Approved);
//! assert_eq!(product.id.as_str(), "42");
//!
//! let products = products_with_statuses(&[ProductStatus::Pending, ProductStatus::Rejected]);
//! assert_eq!(products.len(), 2);
//! ```

use super::{Product, ProductId, ProductStatus};

/// Constructs a product with the given id and status and a derived name.
#[must_use]
pub fn product_with_status(id: u64, status: ProductStatus) -> Product {
    Product {
        id: ProductId::from(id),
        status,
        name: Some(format!("Product {id}")),
        product_image_uri: Some(format!("https://images.example.com/{id}.png")),
        updated_at: Some("2025-01-02T10:30:00Z".to_owned()),
        ..Product::default()
    }
}

/// Constructs a pending product with only an id.
#[must_use]
pub fn pending_product(id: u64) -> Product {
    product_with_status(id, ProductStatus::Pending)
}

/// Creates products with sequential ids starting from 1.
#[must_use]
pub fn create_products(count: u64) -> Vec<Product> {
    (1..=count).map(pending_product).collect()
}

/// Creates products with sequential ids starting from 1, one per status.
#[must_use]
pub fn products_with_statuses(statuses: &[ProductStatus]) -> Vec<Product> {
    (1_u64..)
        .zip(statuses)
        .map(|(id, status)| product_with_status(id, status.clone()))
        .collect()
}

/// Builds the 17-product catalog used by the view-partition scenario:
/// 5 approved, 3 rejected, no review-later, and 9 pending products,
/// interleaved.
#[must_use]
pub fn mixed_catalog() -> Vec<Product> {
    let statuses = [
        ProductStatus::Approved,
        ProductStatus::Pending,
        ProductStatus::Rejected,
        ProductStatus::Pending,
        ProductStatus::Approved,
        ProductStatus::Pending,
        ProductStatus::Pending,
        ProductStatus::Rejected,
        ProductStatus::Approved,
        ProductStatus::Pending,
        ProductStatus::Pending,
        ProductStatus::Approved,
        ProductStatus::Pending,
        ProductStatus::Rejected,
        ProductStatus::Pending,
        ProductStatus::Approved,
        ProductStatus::Pending,
    ];
    products_with_statuses(&statuses)
}
