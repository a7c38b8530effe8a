//! Single-record panel for the All view.
//!
//! Lists every field of the selected product, including the derived
//! "Approved Date".

use crate::catalog::Product;
use crate::catalog::models::display_value;

use super::text_truncate::{truncate_to_display_width_with_ellipsis, truncate_to_height};

const NO_SELECTION_PLACEHOLDER: &str = "  No products to review.";

/// Context for rendering the product detail panel.
#[derive(Debug, Clone)]
pub struct ProductDetailViewContext<'a> {
    /// The selected product, if any.
    pub product: Option<&'a Product>,
    /// Zero-based position of the product in the full list.
    pub position: usize,
    /// Length of the full list.
    pub total: usize,
    /// Available width in columns.
    pub max_width: usize,
    /// Maximum height in lines (0 = unlimited).
    pub max_height: usize,
}

/// Component rendering the selected product's fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductDetailComponent;

impl ProductDetailComponent {
    /// Creates a new product detail component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the detail panel, or a placeholder when nothing is selected.
    #[must_use]
    pub fn view(&self, ctx: &ProductDetailViewContext<'_>) -> String {
        let Some(product) = ctx.product else {
            return format!("{NO_SELECTION_PLACEHOLDER}\n");
        };

        let mut output = format!(
            "  Product Details ({} of {})\n",
            ctx.position.saturating_add(1),
            ctx.total
        );
        output.push_str(&"\u{2500}".repeat(ctx.max_width.saturating_sub(2).min(80)));
        output.push('\n');

        let value_width = ctx.max_width.saturating_sub(LABEL_WIDTH.saturating_add(3));
        for (label, value) in fields(product) {
            let fitted = truncate_to_display_width_with_ellipsis(&value, value_width);
            output.push_str(&format!("  {label:<LABEL_WIDTH$} {fitted}\n"));
        }

        if ctx.max_height > 0 {
            truncate_to_height(&mut output, ctx.max_height);
        }
        output
    }
}

const LABEL_WIDTH: usize = 18;

fn fields(product: &Product) -> [(&'static str, String); 12] {
    let text = |value: Option<&String>| value.cloned().unwrap_or_default();
    let price = display_value(product.price.as_ref());
    [
        ("ID:", product.id.to_string()),
        ("Product ID:", text(product.fdc_product_id.as_ref())),
        ("Name:", text(product.name.as_ref())),
        ("Product Image URI:", text(product.product_image_uri.as_ref())),
        ("Description:", text(product.product_description.as_ref())),
        ("Dimensions:", text(product.product_dimensions.as_ref())),
        ("Created At:", text(product.created_at.as_ref())),
        ("Updated At:", text(product.updated_at.as_ref())),
        (
            "Price:",
            if price.is_empty() {
                price
            } else {
                format!("${price}")
            },
        ),
        ("Quantity:", display_value(product.quantity.as_ref())),
        ("Status:", product.status.to_string()),
        ("Approved Date:", product.approved_on().unwrap_or_default()),
    ]
}
