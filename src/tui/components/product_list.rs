//! Paginated product table for the status views.
//!
//! Shows one page of a filtered view with the image URI, the "Approved On"
//! date, and the product name, followed by the page controls that are
//! currently available.

use crate::catalog::Product;

use super::text_truncate::{pad_to_display_width, truncate_to_display_width_with_ellipsis};

const EMPTY_PLACEHOLDER: &str = "  No products in this view.";
const DATE_COLUMN_WIDTH: usize = 11;
const COLUMN_GAP: &str = "  ";

/// Context for rendering one page of a filtered view.
#[derive(Debug, Clone)]
pub struct ProductListViewContext<'a> {
    /// Full product list in backend order.
    pub products: &'a [Product],
    /// Positions into `products` shown on this page.
    pub page_indices: &'a [usize],
    /// Zero-based page number.
    pub page: usize,
    /// Number of pages in the view, at least one.
    pub page_count: usize,
    /// Whether the "next page" control is offered.
    pub has_next: bool,
    /// Whether the "previous page" control is offered.
    pub has_previous: bool,
    /// Available width in columns.
    pub max_width: usize,
}

/// Component rendering the paginated product table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductListComponent;

impl ProductListComponent {
    /// Creates a new product list component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the table and page controls.
    ///
    /// An empty page renders a placeholder and no controls.
    #[must_use]
    pub fn view(&self, ctx: &ProductListViewContext<'_>) -> String {
        if ctx.page_indices.is_empty() {
            return format!("{EMPTY_PLACEHOLDER}\n");
        }

        let (image_width, name_width) = column_widths(ctx.max_width);
        let mut output = String::new();

        output.push_str(&format_row(
            "Image",
            "Approved On",
            "Name",
            image_width,
            name_width,
        ));
        output.push('\n');

        for product in ctx
            .page_indices
            .iter()
            .filter_map(|&index| ctx.products.get(index))
        {
            let image = product.product_image_uri.as_deref().unwrap_or("-");
            let approved_on = product.approved_on().unwrap_or_default();
            let name = product.name.as_deref().unwrap_or("(unnamed)");
            output.push_str(&format_row(
                image,
                &approved_on,
                name,
                image_width,
                name_width,
            ));
            output.push('\n');
        }

        output.push('\n');
        output.push_str(&render_controls(ctx));
        output.push('\n');
        output
    }
}

/// Splits the width left after the date column between image and name.
fn column_widths(max_width: usize) -> (usize, usize) {
    let fixed = DATE_COLUMN_WIDTH
        .saturating_add(COLUMN_GAP.len().saturating_mul(3))
        .saturating_add(1);
    let flexible = max_width.saturating_sub(fixed).max(8);
    let image = flexible.checked_div(2).unwrap_or(0);
    (image, flexible.saturating_sub(image))
}

fn format_row(image: &str, date: &str, name: &str, image_width: usize, name_width: usize) -> String {
    format!(
        "{COLUMN_GAP}{}{COLUMN_GAP}{}{COLUMN_GAP}{}",
        pad_to_display_width(image, image_width),
        pad_to_display_width(date, DATE_COLUMN_WIDTH),
        truncate_to_display_width_with_ellipsis(name, name_width),
    )
}

fn render_controls(ctx: &ProductListViewContext<'_>) -> String {
    let mut parts = Vec::with_capacity(3);
    if ctx.has_previous {
        parts.push("[ [ Previous page ]".to_owned());
    }
    parts.push(format!(
        "Page {} of {}",
        ctx.page.saturating_add(1),
        ctx.page_count.max(1)
    ));
    if ctx.has_next {
        parts.push("[ Next page ] ]".to_owned());
    }
    format!("{COLUMN_GAP}{}", parts.join("   "))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::catalog::ProductStatus;
    use crate::catalog::models::test_support::products_with_statuses;

    fn context<'a>(
        products: &'a [Product],
        page_indices: &'a [usize],
        has_next: bool,
        has_previous: bool,
    ) -> ProductListViewContext<'a> {
        ProductListViewContext {
            products,
            page_indices,
            page: usize::from(has_previous),
            page_count: 2,
            has_next,
            has_previous,
            max_width: 100,
        }
    }

    #[rstest]
    fn empty_page_renders_placeholder_without_controls() {
        let output = ProductListComponent::new().view(&context(&[], &[], false, false));

        assert!(output.contains("No products in this view."));
        assert!(!output.contains("Page"));
    }

    #[rstest]
    fn rows_show_image_date_and_name() {
        let products = products_with_statuses(&[ProductStatus::Approved]);
        let output = ProductListComponent::new().view(&context(&products, &[0], false, false));

        assert!(output.contains("Approved On"));
        assert!(output.contains("https://images.example.com/1.png"));
        assert!(output.contains("01/02/2025"));
        assert!(output.contains("Product 1"));
    }

    #[rstest]
    #[case::next_only(true, false, true, false)]
    #[case::previous_only(false, true, false, true)]
    #[case::both(true, true, true, true)]
    fn only_offered_controls_are_rendered(
        #[case] has_next: bool,
        #[case] has_previous: bool,
        #[case] shows_next: bool,
        #[case] shows_previous: bool,
    ) {
        let products = products_with_statuses(&[ProductStatus::Rejected]);
        let output =
            ProductListComponent::new().view(&context(&products, &[0], has_next, has_previous));

        assert_eq!(output.contains("Next page"), shows_next);
        assert_eq!(output.contains("Previous page"), shows_previous);
    }

    #[rstest]
    fn page_indices_select_rows() {
        let products = products_with_statuses(&[
            ProductStatus::Approved,
            ProductStatus::Pending,
            ProductStatus::Approved,
        ]);
        let output = ProductListComponent::new().view(&context(&products, &[2], false, false));

        assert!(output.contains("Product 3"));
        assert!(!output.contains("Product 1"));
    }
}
