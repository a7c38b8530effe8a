//! Message routing and dispatch logic.
//!
//! While the reject confirmation is open it behaves like a modal: only the
//! prompt answers, command results, and lifecycle messages get through.

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::tui::messages::AppMsg;

impl ReviewApp {
    /// Returns true for operator messages the open reject prompt swallows.
    const fn is_blocked_by_reject_prompt(msg: &AppMsg) -> bool {
        !msg.is_reject_prompt() && !msg.is_command_result() && !msg.is_lifecycle()
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands.
    #[doc(hidden)]
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if self.reject_prompt.is_open() && Self::is_blocked_by_reject_prompt(msg) {
            tracing::debug!(?msg, "ignored while reject confirmation is open");
            return None;
        }
        self.dispatch_by_message_category(msg)
    }

    /// Dispatches messages based on their category.
    fn dispatch_by_message_category(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_view() {
            return self.handle_view_msg(msg);
        }
        if msg.is_status() {
            return self.handle_status_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches navigation messages to their handlers.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::NextRecord => self.handle_next_record(),
            AppMsg::PreviousRecord => self.handle_previous_record(),
            _ => {
                // Unreachable: caller filters to navigation messages.
                None
            }
        }
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }
}
