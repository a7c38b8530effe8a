//! UI components for the review console.
//!
//! Each component renders one region of the frame from a borrowed view
//! context and holds no product data of its own.

mod product_detail;
mod product_list;
mod text_truncate;

pub use product_detail::{ProductDetailComponent, ProductDetailViewContext};
pub use product_list::{ProductListComponent, ProductListViewContext};
pub(crate) use text_truncate::truncate_to_display_width_with_ellipsis;
