//! Escape-aware truncation.

use super::width::{char_width, EscapeState, WidthFn};

/// Longest prefix of `text` whose visible glyphs fit in `max_width` cells.
///
/// Escape sequences pass through uncounted and are never cut, since only visible
/// code points can end the prefix. Text made only of escapes is returned whole.
pub fn truncate_with(text: &str, max_width: usize, width_fn: WidthFn) -> &str {
    let mut escape = EscapeState::default();
    let mut width = 0;
    for (idx, ch) in text.char_indices() {
        if !escape.is_visible(ch) {
            continue;
        }
        let ch_width = width_fn(ch);
        if width + ch_width > max_width {
            return &text[..idx];
        }
        width += ch_width;
    }
    text
}

pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    truncate_with(text, max_width, char_width)
}

/// Title text as shown in the list: first line only, surrounding whitespace trimmed.
pub fn single_line(title: &str) -> &str {
    let first = match title.find(['\r', '\n']) {
        Some(idx) => &title[..idx],
        None => title,
    };
    first.trim()
}
