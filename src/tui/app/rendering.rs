//! Rendering logic for the review TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::ReviewApp;
use crate::tui::components::{
    ProductDetailViewContext, ProductListViewContext, truncate_to_display_width_with_ellipsis,
};
use crate::tui::state::ReviewView;

/// Lines used by the header, tab bar, spacer, and status bar.
const CHROME_HEIGHT: usize = 4;

impl ReviewApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Curator - Product Review";
        let indicator = if self.is_loading() {
            " [Loading...]"
        } else if self.is_update_in_flight() {
            " [Saving...]"
        } else {
            ""
        };
        format!("{title}{indicator}\n")
    }

    /// Renders the view tabs with per-view record counts.
    pub(super) fn render_tab_bar(&self) -> String {
        let tabs: Vec<String> = ReviewView::ORDER
            .iter()
            .map(|&view| {
                let label = format!("{} {} ({})", view.shortcut(), view.label(), self.view_len(view));
                if view == self.current_view {
                    format!("[{label}]")
                } else {
                    format!(" {label} ")
                }
            })
            .collect();
        format!("{}\n", tabs.join(" "))
    }

    /// Renders the body for the current view.
    pub(super) fn render_body(&self, max_height: usize) -> String {
        let max_width = (self.width as usize).max(1);
        if self.current_view == ReviewView::All {
            let ctx = ProductDetailViewContext {
                product: self.selected_product(),
                position: self.selected_index.unwrap_or(0),
                total: self.products.len(),
                max_width,
                max_height,
            };
            return self.product_detail.view(&ctx);
        }

        let view = self.current_view;
        let ctx = ProductListViewContext {
            products: &self.products,
            page_indices: self.page_indices(view),
            page: self.page(view),
            page_count: self.page_count(view),
            has_next: self.has_next_page(view),
            has_previous: self.has_previous_page(view),
            max_width,
        };
        self.product_list.view(&ctx)
    }

    /// Renders the reject confirmation panel, empty when closed.
    pub(super) fn render_reject_prompt(&self) -> String {
        let Some(product_id) = self.reject_prompt.product_id() else {
            return String::new();
        };
        let name = self
            .products
            .iter()
            .find(|product| &product.id == product_id)
            .and_then(|product| product.name.as_deref())
            .unwrap_or("this product");

        let mut output = String::from("\n");
        output.push_str(&format!("  Reject {name} (ID {product_id})?\n"));
        output.push_str("  This action cannot be undone.\n");
        if self.reject_prompt.is_submitting() {
            output.push_str("  Rejecting...\n");
        } else {
            output.push_str("  [y] Reject   [n] Cancel\n");
        }
        output
    }

    /// Renders the status bar: error, then notice, then key hints.
    pub(super) fn render_status_bar(&self) -> String {
        let max_width = (self.width as usize).saturating_sub(1).max(1);
        let line = if let Some(error) = &self.error {
            format!("Error: {error}")
        } else if let Some(notice) = &self.notice {
            notice.clone()
        } else {
            self.status_hints().to_owned()
        };
        format!("{}\n", truncate_to_display_width_with_ellipsis(&line, max_width))
    }

    fn status_hints(&self) -> &'static str {
        if self.reject_prompt.is_open() {
            "y/Enter:reject  n/Esc:cancel  q:quit"
        } else if self.current_view == ReviewView::All {
            "h/l:prev/next  a:approve  x:reject  w:later  1-4/Tab:views  r:reload  ?:help  q:quit"
        } else {
            "[/]:pages  1-4/Tab:views  r:reload  ?:help  q:quit"
        }
    }

    /// Calculates the height available for the body.
    pub(super) fn calculate_body_height(&self, reject_prompt_lines: usize) -> usize {
        (self.height as usize)
            .saturating_sub(CHROME_HEIGHT)
            .saturating_sub(reject_prompt_lines)
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Views:
  1          All products (single-record review)
  2          Approved
  3          Rejected
  4          Review Later
  Tab        Next view

Reviewing (All view):
  l, Right   Next product
  h, Left    Previous product
  a          Approve
  x          Reject (asks for confirmation)
  w          Mark for review later

Lists (Approved, Rejected, Review Later):
  ], PgDn    Next page
  [, PgUp    Previous page

Reject confirmation:
  y, Enter   Reject
  n, Esc     Cancel

Other:
  r          Reload from the catalog
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
