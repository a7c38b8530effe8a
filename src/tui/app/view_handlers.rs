//! View switching and pagination handlers.
//!
//! Switching views is a pure state change. Page moves are only applied when
//! the corresponding control is currently offered.

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::tui::messages::AppMsg;
use crate::tui::state::ReviewView;

impl ReviewApp {
    /// Dispatches view and pagination messages to their handlers.
    pub(super) fn handle_view_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SetView(view) => self.handle_set_view(*view),
            AppMsg::CycleView => self.handle_set_view(self.current_view.next()),
            AppMsg::NextPage => self.handle_next_page(),
            AppMsg::PreviousPage => self.handle_previous_page(),
            _ => {
                // Unreachable: caller filters to view messages.
                None
            }
        }
    }

    const fn handle_set_view(&mut self, view: ReviewView) -> Option<Cmd> {
        self.current_view = view;
        None
    }

    fn handle_next_page(&mut self) -> Option<Cmd> {
        let view = self.current_view;
        if self.has_next_page(view) {
            self.pages.next_page(view);
        }
        None
    }

    fn handle_previous_page(&mut self) -> Option<Cmd> {
        let view = self.current_view;
        if self.has_previous_page(view) {
            self.pages.previous_page(view);
        }
        None
    }
}
