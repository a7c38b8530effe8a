//! `Model` trait implementation for the review TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `ReviewApp`, handling initialisation, update dispatch, and view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::ReviewApp;
use crate::tui::input::{InputContext, map_key_to_message_with_context};
use crate::tui::messages::AppMsg;

impl Model for ReviewApp {
    fn init() -> (Self, Option<Cmd>) {
        let Some(session) = crate::tui::get_review_session() else {
            let mut model = Self::empty();
            model.error = Some("No catalog session configured".to_owned());
            return (model, None);
        };

        let mut model = Self::empty()
            .with_gateway(session.gateway)
            .with_page_size(session.page_size);
        let cmd = model.start_load();
        (model, cmd)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs with context-aware mapping
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let context = self.input_context();
            let app_msg = map_key_to_message_with_context(key_msg, context);
            if let Some(mapped) = app_msg {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let reject_prompt = self.render_reject_prompt();
        let body_height = self.calculate_body_height(reject_prompt.lines().count());

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_tab_bar());
        output.push('\n');
        output.push_str(&self.render_body(body_height));
        output.push_str(&reject_prompt);
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl ReviewApp {
    /// Returns the current input context for context-aware key mapping.
    pub(crate) const fn input_context(&self) -> InputContext {
        if self.reject_prompt.is_open() {
            InputContext::RejectPrompt
        } else if self.current_view.is_list() {
            InputContext::List
        } else {
            InputContext::Review
        }
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap, and padded with spaces so shorter rows overwrite stale cells
    /// after a resize.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = self.width.max(1) as usize;
        let safe_width = width.saturating_sub(1).max(1);
        let height = self.height.max(1) as usize;

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0_usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if char_width == 0 {
            output.push(ch);
            continue;
        }

        if visible_width.saturating_add(char_width) > width {
            break;
        }

        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible_width)));
    output
}
