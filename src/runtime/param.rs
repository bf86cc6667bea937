//! Handler parameter for keys the navigator does not bind.

use crate::core::input::KeyReader;
use crate::core::output::PaneCmd;
use crate::core::terminal::Terminal;
use crate::error::PaneError;
use crate::runtime::pane::Screen;
use crate::runtime::viewport::Geometry;

/// Passed to the caller's handler for every unbound key.
///
/// Gives read access to the rows and geometry, and lets the handler read more keys,
/// push one key back for the navigator, or show a one-line status message.
pub struct Param<'a, R> {
    pub(crate) key: String,
    pub(crate) cursor: usize,
    pub(crate) top: usize,
    pub(crate) rows: &'a [R],
    pub(crate) geometry: Geometry,
    pub(crate) reader: &'a mut KeyReader,
    pub(crate) terminal: &'a mut dyn Terminal,
    pub(crate) screen: &'a mut Screen,
}

impl<'a, R> Param<'a, R> {
    /// The key token that triggered the handler.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Index of the selected row.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the first row visible in the list pane.
    pub fn scroll_top(&self) -> usize {
        self.top
    }

    pub fn rows(&self) -> &'a [R] {
        self.rows
    }

    /// The selected row.
    pub fn current(&self) -> &'a R {
        &self.rows[self.cursor]
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Block for another key. A pushed-back key is returned first.
    pub fn get_key(&mut self) -> Result<String, PaneError> {
        self.reader
            .read_key(&mut *self.terminal)
            .map_err(PaneError::Input)
    }

    /// Hand `key` back so the next read (the handler's or the navigator's) returns it.
    pub fn unget_key(&mut self, key: impl Into<String>) {
        self.reader.unread_key(key);
    }

    /// Overwrite the current line with `text`. No newline is written, so the next frame
    /// replaces the message.
    pub fn message(&mut self, text: &str) {
        self.screen.push(PaneCmd::CarriageReturn);
        self.screen.push(PaneCmd::text(text));
        self.screen.push(PaneCmd::EraseLine);
        self.screen.flush();
    }
}
