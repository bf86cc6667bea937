//! Code point width and visible width helpers.

use unicode_width::UnicodeWidthChar;

const ESC: char = '\x1b';

/// Display width capability: terminal cells taken by one code point (0, 1 or 2).
pub type WidthFn = fn(char) -> usize;

/// Default width capability backed by `unicode-width`.
///
/// Control characters report no width of their own, so they count as 0.
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Tracks whether a scan is inside an escape sequence.
///
/// A sequence starts at ESC and ends at the first ASCII letter after it.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct EscapeState {
    in_escape: bool,
}

impl EscapeState {
    /// Feed one code point; returns true when it is visible text.
    pub(crate) fn is_visible(&mut self, ch: char) -> bool {
        if self.in_escape {
            if ch.is_ascii_alphabetic() {
                self.in_escape = false;
            }
            return false;
        }
        if ch == ESC {
            self.in_escape = true;
            return false;
        }
        true
    }
}

/// Width of `input` counting only glyphs outside escape sequences.
pub fn visible_width_with(input: &str, width_fn: WidthFn) -> usize {
    let mut escape = EscapeState::default();
    input
        .chars()
        .filter(|&ch| escape.is_visible(ch))
        .map(width_fn)
        .sum()
}

pub fn visible_width(input: &str) -> usize {
    visible_width_with(input, char_width)
}
