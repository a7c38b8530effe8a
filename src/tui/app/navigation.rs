//! Circular record navigation over the full product list.
//!
//! Both directions wrap around and are no-ops on an empty list.

use bubbletea_rs::Cmd;

use super::ReviewApp;

impl ReviewApp {
    /// Selects the next record, wrapping from the last to the first.
    pub(super) fn handle_next_record(&mut self) -> Option<Cmd> {
        let len = self.products.len();
        if let Some(index) = self.selected_index {
            self.selected_index = index.saturating_add(1).checked_rem(len);
        }
        None
    }

    /// Selects the previous record, wrapping from the first to the last.
    pub(super) fn handle_previous_record(&mut self) -> Option<Cmd> {
        let last = self.products.len().checked_sub(1)?;
        if let Some(index) = self.selected_index {
            self.selected_index = Some(index.checked_sub(1).unwrap_or(last).min(last));
        }
        None
    }
}
