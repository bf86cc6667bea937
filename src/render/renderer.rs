//! Frame renderer: list pane, separator rule, detail pane.
//!
//! Frames are drawn top-down from the current cursor line. Every line ends with an erase
//! so a frame fully overwrites the previous one after the caller moves back up by the
//! returned line count.

use crate::core::output::{OutputGate, PaneCmd};
use crate::core::row::Row;
use crate::core::text::slice::wrap_segments;
use crate::core::text::utils::{single_line, truncate_with};
use crate::core::text::width::WidthFn;
use crate::runtime::viewport::{Geometry, ScrollWindow};

const RULE_CHAR: &str = "=";

/// Draw up to `height` list rows starting at `top`; returns the rows drawn.
///
/// No newline precedes the first row, so the caller decides where the list starts.
pub fn render_list<R: Row>(
    rows: &[R],
    width: usize,
    height: usize,
    top: usize,
    cursor: usize,
    width_fn: WidthFn,
    out: &mut OutputGate,
) -> usize {
    let max_width = width.saturating_sub(1);
    for i in 0..height {
        let index = top + i;
        let Some(row) = rows.get(index) else {
            return i;
        };
        if i > 0 {
            out.push(PaneCmd::Newline);
        }

        let title = row.title();
        let text = truncate_with(single_line(&title), max_width, width_fn);
        let selected = index == cursor;
        if selected {
            out.push(PaneCmd::HighlightOn);
        }
        out.push(PaneCmd::text(text));
        out.push(PaneCmd::EraseLine);
        if selected {
            out.push(PaneCmd::StyleReset);
        }
    }
    height
}

fn render_rule(width: usize, out: &mut OutputGate) {
    out.push(PaneCmd::Newline);
    out.push(PaneCmd::RuleStyle);
    out.push(PaneCmd::text(RULE_CHAR.repeat(width.saturating_sub(1))));
    out.push(PaneCmd::StyleReset);
}

/// Draw a whole frame and return the number of newlines emitted, which is how far the
/// cursor sits below the frame's first line.
///
/// Detail content stops at the bottom of the terminal; overflow is not shown.
pub fn render_frame<R: Row>(
    rows: &[R],
    geometry: &Geometry,
    window: &ScrollWindow,
    width_fn: WidthFn,
    out: &mut OutputGate,
) -> usize {
    let mut y = render_list(
        rows,
        geometry.width,
        geometry.list_height,
        window.top(),
        window.cursor(),
        width_fn,
        out,
    );
    render_rule(geometry.width, out);

    let last_line = geometry.height.saturating_sub(1);
    let max_width = geometry.width.saturating_sub(1);
    if let Some(row) = rows.get(window.cursor()) {
        let contents = row.contents();
        for line in contents.iter() {
            for segment in wrap_segments(line, max_width, width_fn) {
                if y >= last_line {
                    return y;
                }
                out.push(PaneCmd::Newline);
                y += 1;
                out.push(PaneCmd::text(segment));
                out.push(PaneCmd::EraseLine);
            }
        }
    }

    while y < last_line {
        out.push(PaneCmd::Newline);
        out.push(PaneCmd::EraseLine);
        y += 1;
    }
    y
}
