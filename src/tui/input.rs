//! Input handling for the TUI application.
//!
//! This module provides context-aware key-to-message mapping. The same key
//! can mean different things depending on what the console is showing, and
//! some keys are only live in one context.

use crossterm::event::KeyCode;

use super::messages::AppMsg;
use super::state::ReviewView;

/// What the console is showing when a key arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Single-record review in the All view.
    Review,
    /// One of the paginated status views.
    List,
    /// The reject confirmation prompt.
    RejectPrompt,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    match context {
        InputContext::RejectPrompt => map_reject_prompt_key(key.key),
        InputContext::Review => map_review_key(key.key).or_else(|| map_global_key(key.key)),
        InputContext::List => map_list_key(key.key).or_else(|| map_global_key(key.key)),
    }
}

const fn map_reject_prompt_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(AppMsg::ConfirmReject),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(AppMsg::CancelReject),
        KeyCode::Char('q') => Some(AppMsg::Quit),
        _ => None,
    }
}

const fn map_review_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Right | KeyCode::Char('l') => Some(AppMsg::NextRecord),
        KeyCode::Left | KeyCode::Char('h') => Some(AppMsg::PreviousRecord),
        KeyCode::Char('a') => Some(AppMsg::Approve),
        KeyCode::Char('x') => Some(AppMsg::RequestReject),
        KeyCode::Char('w') => Some(AppMsg::ReviewLater),
        _ => None,
    }
}

const fn map_list_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char(']') | KeyCode::PageDown => Some(AppMsg::NextPage),
        KeyCode::Char('[') | KeyCode::PageUp => Some(AppMsg::PreviousPage),
        _ => None,
    }
}

const fn map_global_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Char('r') => Some(AppMsg::ReloadRequested),
        KeyCode::Tab => Some(AppMsg::CycleView),
        KeyCode::Char('1') => Some(AppMsg::SetView(ReviewView::All)),
        KeyCode::Char('2') => Some(AppMsg::SetView(ReviewView::Approved)),
        KeyCode::Char('3') => Some(AppMsg::SetView(ReviewView::Rejected)),
        KeyCode::Char('4') => Some(AppMsg::SetView(ReviewView::ReviewLater)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn mapped(code: KeyCode, context: InputContext) -> Option<AppMsg> {
        map_key_to_message_with_context(&key(code), context)
    }

    #[rstest]
    #[case::right(KeyCode::Right, "NextRecord")]
    #[case::l(KeyCode::Char('l'), "NextRecord")]
    #[case::left(KeyCode::Left, "PreviousRecord")]
    #[case::h(KeyCode::Char('h'), "PreviousRecord")]
    #[case::approve(KeyCode::Char('a'), "Approve")]
    #[case::reject(KeyCode::Char('x'), "RequestReject")]
    #[case::later(KeyCode::Char('w'), "ReviewLater")]
    #[case::reload(KeyCode::Char('r'), "ReloadRequested")]
    #[case::tab(KeyCode::Tab, "CycleView")]
    fn review_context_keys(#[case] code: KeyCode, #[case] expected: &str) {
        let msg = mapped(code, InputContext::Review);
        assert_eq!(msg.map(|m| variant_name(&m)), Some(expected));
    }

    #[rstest]
    #[case::bracket(KeyCode::Char(']'), "NextPage")]
    #[case::page_down(KeyCode::PageDown, "NextPage")]
    #[case::open_bracket(KeyCode::Char('['), "PreviousPage")]
    #[case::page_up(KeyCode::PageUp, "PreviousPage")]
    #[case::quit(KeyCode::Char('q'), "Quit")]
    fn list_context_keys(#[case] code: KeyCode, #[case] expected: &str) {
        let msg = mapped(code, InputContext::List);
        assert_eq!(msg.map(|m| variant_name(&m)), Some(expected));
    }

    #[rstest]
    #[case::approve(KeyCode::Char('a'))]
    #[case::reject(KeyCode::Char('x'))]
    #[case::next_record(KeyCode::Right)]
    fn record_keys_are_inactive_in_list_views(#[case] code: KeyCode) {
        assert!(mapped(code, InputContext::List).is_none());
    }

    #[rstest]
    fn page_keys_are_inactive_in_review() {
        assert!(mapped(KeyCode::Char(']'), InputContext::Review).is_none());
    }

    #[rstest]
    #[case::y(KeyCode::Char('y'), "ConfirmReject")]
    #[case::enter(KeyCode::Enter, "ConfirmReject")]
    #[case::n(KeyCode::Char('n'), "CancelReject")]
    #[case::esc(KeyCode::Esc, "CancelReject")]
    fn reject_prompt_keys(#[case] code: KeyCode, #[case] expected: &str) {
        let msg = mapped(code, InputContext::RejectPrompt);
        assert_eq!(msg.map(|m| variant_name(&m)), Some(expected));
    }

    #[rstest]
    #[case::approve(KeyCode::Char('a'))]
    #[case::view(KeyCode::Char('2'))]
    #[case::reload(KeyCode::Char('r'))]
    fn reject_prompt_swallows_other_keys(#[case] code: KeyCode) {
        assert!(mapped(code, InputContext::RejectPrompt).is_none());
    }

    #[rstest]
    #[case('1', ReviewView::All)]
    #[case('2', ReviewView::Approved)]
    #[case('3', ReviewView::Rejected)]
    #[case('4', ReviewView::ReviewLater)]
    fn digits_select_views(#[case] digit: char, #[case] view: ReviewView) {
        let msg = mapped(KeyCode::Char(digit), InputContext::List);
        assert!(
            matches!(msg, Some(AppMsg::SetView(selected)) if selected == view),
            "expected SetView({view:?}), got {msg:?}"
        );
    }

    fn variant_name(msg: &AppMsg) -> &'static str {
        match msg {
            AppMsg::NextRecord => "NextRecord",
            AppMsg::PreviousRecord => "PreviousRecord",
            AppMsg::Approve => "Approve",
            AppMsg::RequestReject => "RequestReject",
            AppMsg::ConfirmReject => "ConfirmReject",
            AppMsg::CancelReject => "CancelReject",
            AppMsg::ReviewLater => "ReviewLater",
            AppMsg::ReloadRequested => "ReloadRequested",
            AppMsg::CycleView => "CycleView",
            AppMsg::NextPage => "NextPage",
            AppMsg::PreviousPage => "PreviousPage",
            AppMsg::Quit => "Quit",
            _ => "other",
        }
    }
}
