//! Per-view page counters for the filtered list views.
//!
//! Counters advance without bound checks. Callers only offer "next" when
//! [`has_next_page`] holds and "previous" when [`has_previous_page`] holds.

use std::ops::Range;

use super::views::{DerivedViews, ReviewView};

/// Returns the slice of positions shown on `page`.
///
/// A page past the end yields an empty range.
#[must_use]
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Returns true when items exist beyond `page`.
#[must_use]
pub const fn has_next_page(len: usize, page: usize, page_size: usize) -> bool {
    page.saturating_add(1).saturating_mul(page_size) < len
}

/// Returns true when `page` is not the first page.
#[must_use]
pub const fn has_previous_page(page: usize) -> bool {
    page > 0
}

/// Returns the last page holding at least one item, zero when empty.
#[must_use]
pub fn last_page(len: usize, page_size: usize) -> usize {
    len.saturating_sub(1).checked_div(page_size).unwrap_or(0)
}

/// Zero-based page counters, one per filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageCounters {
    approved: usize,
    rejected: usize,
    review_later: usize,
}

impl PageCounters {
    /// Returns the page for a view; always zero for [`ReviewView::All`].
    #[must_use]
    pub const fn get(&self, view: ReviewView) -> usize {
        match view {
            ReviewView::All => 0,
            ReviewView::Approved => self.approved,
            ReviewView::Rejected => self.rejected,
            ReviewView::ReviewLater => self.review_later,
        }
    }

    /// Advances a view's counter by one.
    pub const fn next_page(&mut self, view: ReviewView) {
        if let Some(page) = self.slot(view) {
            *page = page.saturating_add(1);
        }
    }

    /// Moves a view's counter back by one, stopping at zero.
    pub const fn previous_page(&mut self, view: ReviewView) {
        if let Some(page) = self.slot(view) {
            *page = page.saturating_sub(1);
        }
    }

    /// Pulls every counter back to the last valid page of its view.
    pub fn clamp(&mut self, views: &DerivedViews, page_size: usize) {
        for view in [
            ReviewView::Approved,
            ReviewView::Rejected,
            ReviewView::ReviewLater,
        ] {
            let last = last_page(views.len(view), page_size);
            if let Some(page) = self.slot(view) {
                *page = (*page).min(last);
            }
        }
    }

    const fn slot(&mut self, view: ReviewView) -> Option<&mut usize> {
        match view {
            ReviewView::All => None,
            ReviewView::Approved => Some(&mut self.approved),
            ReviewView::Rejected => Some(&mut self.rejected),
            ReviewView::ReviewLater => Some(&mut self.review_later),
        }
    }
}
