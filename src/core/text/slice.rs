//! Width-limited wrapping for detail content.

use super::utils::truncate_with;
use super::width::WidthFn;

/// Splits a line into successive segments that each fit `max_width` cells.
///
/// Always yields at least one segment, so empty lines still occupy a row.
pub struct WrapSegments<'a> {
    rest: &'a str,
    max_width: usize,
    width_fn: WidthFn,
    started: bool,
}

impl<'a> WrapSegments<'a> {
    pub fn new(text: &'a str, max_width: usize, width_fn: WidthFn) -> Self {
        Self {
            rest: text,
            max_width,
            width_fn,
            started: false,
        }
    }
}

impl<'a> Iterator for WrapSegments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.started && self.rest.is_empty() {
            return None;
        }
        self.started = true;

        let mut segment = truncate_with(self.rest, self.max_width, self.width_fn);
        if segment.is_empty() && !self.rest.is_empty() {
            // A glyph wider than the pane still has to advance.
            let first = self.rest.chars().next().map_or(0, char::len_utf8);
            segment = &self.rest[..first];
        }
        self.rest = &self.rest[segment.len()..];
        Some(segment)
    }
}

pub fn wrap_segments(text: &str, max_width: usize, width_fn: WidthFn) -> WrapSegments<'_> {
    WrapSegments::new(text, max_width, width_fn)
}
