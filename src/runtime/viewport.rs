//! Pane geometry and the scroll window over the list.
//!
//! Keeps the selected row inside the visible window: `top <= cursor < top + height` and
//! `cursor < len` hold after every move.

/// Screen split between the list pane and the detail pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
    pub list_height: usize,
    pub detail_height: usize,
}

impl Geometry {
    /// `detail_height == 0` gives the detail pane half the terminal.
    pub fn new(width: usize, height: usize, detail_height: usize) -> Self {
        let detail_height = if detail_height == 0 {
            height / 2
        } else {
            detail_height.min(height)
        };
        let list_height = height.saturating_sub(detail_height).max(1);
        Self {
            width,
            height,
            list_height,
            detail_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    len: usize,
    height: usize,
    top: usize,
    cursor: usize,
}

impl ScrollWindow {
    pub fn new(len: usize, height: usize) -> Self {
        Self {
            len,
            height: height.max(1),
            top: 0,
            cursor: 0,
        }
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Select the next row, scrolling one line when it leaves the window.
    /// Returns false at the last row.
    pub fn move_down(&mut self) -> bool {
        if self.cursor + 1 >= self.len {
            return false;
        }
        self.cursor += 1;
        if self.cursor >= self.top + self.height {
            self.top += 1;
        }
        true
    }

    /// Select the previous row, scrolling one line when it leaves the window.
    /// Returns false at the first row.
    pub fn move_up(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        if self.cursor < self.top {
            self.top -= 1;
        }
        true
    }
}
