//! Text fitting helpers for fixed-size terminal views.
//!
//! Widths are measured in terminal columns, not Unicode scalar count.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates output to a maximum number of lines.
///
/// When `max_height` is non-zero and the output exceeds that number of lines,
/// the content is truncated and an ellipsis line is appended. The final output
/// contains at most `max_height` lines.
pub(crate) fn truncate_to_height(output: &mut String, max_height: usize) {
    if max_height == 0 {
        return;
    }

    let line_count = output.lines().count();
    if line_count <= max_height {
        return;
    }

    let lines_to_keep = max_height.saturating_sub(1);
    let truncate_at = if lines_to_keep == 0 {
        Some(0)
    } else {
        find_nth_newline_position(output, lines_to_keep.saturating_sub(1))
            .map(|pos| pos.saturating_add(1))
    };

    if let Some(pos) = truncate_at {
        output.truncate(pos);
        output.push_str("...\n");
    }
}

/// Finds the byte index of the nth newline character in a string (0-indexed).
fn find_nth_newline_position(s: &str, n: usize) -> Option<usize> {
    s.char_indices()
        .filter(|(_, ch)| *ch == '\n')
        .nth(n)
        .map(|(index, _)| index)
}

/// Truncates text to the provided display width and appends an ellipsis.
pub(crate) fn truncate_to_display_width_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut current_width = 0_usize;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width.saturating_add(char_width) > target_width {
            break;
        }
        truncated.push(ch);
        current_width = current_width.saturating_add(char_width);
    }
    format!("{truncated}...")
}

/// Fits text into exactly `width` columns, truncating with an ellipsis or
/// padding with spaces.
pub(crate) fn pad_to_display_width(text: &str, width: usize) -> String {
    let mut fitted = truncate_to_display_width_with_ellipsis(text, width);
    let missing = width.saturating_sub(fitted.width());
    fitted.push_str(&" ".repeat(missing));
    fitted
}
