//! Status views and their derivation from the product list.
//!
//! The three filtered views hold indices into the full product list rather
//! than copies, so they stay cheap to rebuild after every load.

use crate::catalog::{Product, ProductStatus};

/// The four views offered by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReviewView {
    /// Every record, reviewed one at a time.
    #[default]
    All,
    /// Records with status `Approved`.
    Approved,
    /// Records with status `Rejected`.
    Rejected,
    /// Records with status `ReviewLater`.
    ReviewLater,
}

impl ReviewView {
    /// Views in tab order.
    pub const ORDER: [Self; 4] = [Self::All, Self::Approved, Self::Rejected, Self::ReviewLater];

    /// Returns a human-readable label for display in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::ReviewLater => "Review Later",
        }
    }

    /// Returns the digit key that selects this view.
    #[must_use]
    pub const fn shortcut(self) -> char {
        match self {
            Self::All => '1',
            Self::Approved => '2',
            Self::Rejected => '3',
            Self::ReviewLater => '4',
        }
    }

    /// Returns the view after this one in tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Approved,
            Self::Approved => Self::Rejected,
            Self::Rejected => Self::ReviewLater,
            Self::ReviewLater => Self::All,
        }
    }

    /// Returns true for the paginated, status-filtered views.
    #[must_use]
    pub const fn is_list(self) -> bool {
        !matches!(self, Self::All)
    }
}

/// Positions of the records belonging to each filtered view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedViews {
    approved: Vec<usize>,
    rejected: Vec<usize>,
    review_later: Vec<usize>,
}

impl DerivedViews {
    /// Returns the positions for a filtered view, or `None` for
    /// [`ReviewView::All`], which is unfiltered.
    #[must_use]
    pub fn indices(&self, view: ReviewView) -> Option<&[usize]> {
        match view {
            ReviewView::All => None,
            ReviewView::Approved => Some(&self.approved),
            ReviewView::Rejected => Some(&self.rejected),
            ReviewView::ReviewLater => Some(&self.review_later),
        }
    }

    /// Returns the number of records in a filtered view, zero for `All`.
    #[must_use]
    pub fn len(&self, view: ReviewView) -> usize {
        self.indices(view).map_or(0, <[usize]>::len)
    }
}

/// Partitions products into the three filtered views in one pass.
///
/// Order within each view follows the input order. Records whose status is
/// Pending or unknown land in none of them.
#[must_use]
pub fn derive_views(products: &[Product]) -> DerivedViews {
    let mut views = DerivedViews::default();
    for (index, product) in products.iter().enumerate() {
        match product.status {
            ProductStatus::Approved => views.approved.push(index),
            ProductStatus::Rejected => views.rejected.push(index),
            ProductStatus::ReviewLater => views.review_later.push(index),
            ProductStatus::Pending | ProductStatus::Other(_) => {}
        }
    }
    views
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::catalog::models::test_support::{mixed_catalog, products_with_statuses};

    #[rstest]
    fn empty_input_yields_empty_views() {
        let views = derive_views(&[]);
        assert_eq!(views, DerivedViews::default());
    }

    #[rstest]
    fn views_preserve_backend_order() {
        let products = products_with_statuses(&[
            ProductStatus::Approved,
            ProductStatus::Rejected,
            ProductStatus::Approved,
            ProductStatus::ReviewLater,
            ProductStatus::Approved,
        ]);

        let views = derive_views(&products);

        assert_eq!(views.indices(ReviewView::Approved), Some(&[0, 2, 4][..]));
        assert_eq!(views.indices(ReviewView::Rejected), Some(&[1][..]));
        assert_eq!(views.indices(ReviewView::ReviewLater), Some(&[3][..]));
        assert_eq!(views.indices(ReviewView::All), None);
    }

    #[rstest]
    fn every_record_lands_in_at_most_one_view() {
        let mut products = mixed_catalog();
        products.extend(products_with_statuses(&[
            ProductStatus::ReviewLater,
            ProductStatus::Other("Archived".to_owned()),
        ]));

        let views = derive_views(&products);

        for index in 0..products.len() {
            let memberships = [
                ReviewView::Approved,
                ReviewView::Rejected,
                ReviewView::ReviewLater,
            ]
            .iter()
            .filter(|view| {
                views
                    .indices(**view)
                    .is_some_and(|indices| indices.contains(&index))
            })
            .count();
            assert!(memberships <= 1, "record {index} is in {memberships} views");
        }
    }

    #[rstest]
    fn mixed_catalog_counts() {
        let views = derive_views(&mixed_catalog());

        assert_eq!(views.len(ReviewView::Approved), 5);
        assert_eq!(views.len(ReviewView::Rejected), 3);
        assert_eq!(views.len(ReviewView::ReviewLater), 0);
        assert_eq!(views.len(ReviewView::All), 0);
    }

    #[rstest]
    fn unknown_statuses_are_only_visible_in_all() {
        let products = products_with_statuses(&[
            ProductStatus::Pending,
            ProductStatus::Other("approved".to_owned()),
        ]);

        let views = derive_views(&products);

        assert_eq!(views, DerivedViews::default());
    }

    #[rstest]
    fn cycling_visits_every_view_once() {
        let mut view = ReviewView::All;
        let mut visited = Vec::new();
        for _ in 0..ReviewView::ORDER.len() {
            visited.push(view);
            view = view.next();
        }

        assert_eq!(visited, ReviewView::ORDER.to_vec());
        assert_eq!(view, ReviewView::All);
    }

    #[rstest]
    #[case(ReviewView::All, "All", '1', false)]
    #[case(ReviewView::Approved, "Approved", '2', true)]
    #[case(ReviewView::Rejected, "Rejected", '3', true)]
    #[case(ReviewView::ReviewLater, "Review Later", '4', true)]
    fn view_metadata(
        #[case] view: ReviewView,
        #[case] label: &str,
        #[case] shortcut: char,
        #[case] is_list: bool,
    ) {
        assert_eq!(view.label(), label);
        assert_eq!(view.shortcut(), shortcut);
        assert_eq!(view.is_list(), is_list);
    }
}
