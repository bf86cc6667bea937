//! Typed terminal output commands and a single output gate.
//!
//! Invariant: all session writes are buffered as `PaneCmd`s and reach the sink only through
//! `OutputGate::flush(..)`.

use std::io::Write;

const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";
const HIGHLIGHT_ON: &str = "\x1b[0;44;37;1m";
const RULE_STYLE: &str = "\x1b[0;34;1m";
const STYLE_RESET: &str = "\x1b[0m";
const ERASE_LINE: &str = "\x1b[0K";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneCmd {
    /// Text written verbatim (may carry the caller's own styling).
    Text(String),
    Newline,
    /// Erase from the cursor to the end of the line.
    EraseLine,

    /// Selected-row style.
    HighlightOn,
    /// Separator rule style.
    RuleStyle,
    StyleReset,

    /// Cursor visibility.
    HideCursor,
    ShowCursor,

    /// Move up N lines and return to column zero.
    CursorUp(usize),
    /// Return to column zero.
    CarriageReturn,
}

impl PaneCmd {
    pub fn text(data: impl Into<String>) -> Self {
        Self::Text(data.into())
    }

    pub fn write_to(&self, buf: &mut String) {
        match self {
            PaneCmd::Text(data) => buf.push_str(data),
            PaneCmd::Newline => buf.push('\n'),
            PaneCmd::EraseLine => buf.push_str(ERASE_LINE),
            PaneCmd::HighlightOn => buf.push_str(HIGHLIGHT_ON),
            PaneCmd::RuleStyle => buf.push_str(RULE_STYLE),
            PaneCmd::StyleReset => buf.push_str(STYLE_RESET),
            PaneCmd::HideCursor => buf.push_str(HIDE_CURSOR),
            PaneCmd::ShowCursor => buf.push_str(SHOW_CURSOR),
            PaneCmd::CursorUp(lines) => {
                buf.push_str(&format!("\x1b[{lines}A\r"));
            }
            PaneCmd::CarriageReturn => buf.push('\r'),
        }
    }
}

#[derive(Debug, Default)]
pub struct OutputGate {
    cmds: Vec<PaneCmd>,
}

impl OutputGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: PaneCmd) {
        self.cmds.push(cmd);
    }

    pub fn extend<I>(&mut self, cmds: I)
    where
        I: IntoIterator<Item = PaneCmd>,
    {
        self.cmds.extend(cmds);
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Drain buffered commands into their wire form.
    pub fn take_bytes(&mut self) -> String {
        let mut buf = String::new();
        for cmd in self.cmds.drain(..) {
            cmd.write_to(&mut buf);
        }
        buf
    }

    /// Flush buffered commands to `sink` and return what was written.
    ///
    /// Write errors are ignored; a failed redraw is not fatal to the session.
    pub fn flush(&mut self, sink: &mut dyn Write) -> String {
        let data = self.take_bytes();
        if !data.is_empty() {
            let _ = sink.write_all(data.as_bytes());
            let _ = sink.flush();
        }
        data
    }
}
