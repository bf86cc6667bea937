//! Split-pane session runtime.
//!
//! One session alternates between drawing a frame and waiting for a key. Frames are drawn
//! in place: after each key the cursor moves back up over the lines just drawn and the next
//! frame overwrites them. The screen is never cleared and no alternate buffer is used.

use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

use crate::config::EnvConfig;
use crate::core::input::KeyReader;
use crate::core::keybindings::PaneAction;
use crate::core::output::{OutputGate, PaneCmd};
use crate::core::row::Row;
use crate::core::terminal::Terminal;
use crate::core::text::width::{char_width, WidthFn};
use crate::error::PaneError;
use crate::logging::{DebugLog, WriteLog};
use crate::render::renderer::render_frame;
use crate::runtime::param::Param;
use crate::runtime::viewport::{Geometry, ScrollWindow};

/// Called for unbound keys. Returning `false` ends the session.
pub type Handler<R> = Box<dyn FnMut(&mut Param<'_, R>) -> bool>;

/// Output sink plus the gate that buffers writes to it.
pub(crate) struct Screen {
    sink: Box<dyn Write>,
    gate: OutputGate,
    write_log: WriteLog,
}

impl Screen {
    pub(crate) fn new(sink: Box<dyn Write>, write_log: WriteLog) -> Self {
        Self {
            sink,
            gate: OutputGate::new(),
            write_log,
        }
    }

    pub(crate) fn push(&mut self, cmd: PaneCmd) {
        self.gate.push(cmd);
    }

    pub(crate) fn gate_mut(&mut self) -> &mut OutputGate {
        &mut self.gate
    }

    pub(crate) fn flush(&mut self) {
        let data = self.gate.flush(&mut *self.sink);
        self.write_log.record(&data);
    }

    fn into_sink(self) -> Box<dyn Write> {
        self.sink
    }
}

/// Hides the cursor for its lifetime and shows it again on drop, whatever ends the session.
struct HiddenCursor<'s> {
    screen: &'s mut Screen,
}

impl<'s> HiddenCursor<'s> {
    fn new(screen: &'s mut Screen) -> Self {
        screen.push(PaneCmd::HideCursor);
        screen.flush();
        Self { screen }
    }
}

impl Deref for HiddenCursor<'_> {
    type Target = Screen;

    fn deref(&self) -> &Screen {
        self.screen
    }
}

impl DerefMut for HiddenCursor<'_> {
    fn deref_mut(&mut self) -> &mut Screen {
        self.screen
    }
}

impl Drop for HiddenCursor<'_> {
    fn drop(&mut self) {
        self.screen.push(PaneCmd::ShowCursor);
        self.screen.flush();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    QuitKey,
    HandlerStop,
}

/// Split-pane navigator options: a list of rows on top, the selected row's contents below.
pub struct TwoPane<R: Row> {
    pub rows: Vec<R>,
    /// Detail pane height in lines; 0 means half the terminal.
    pub detail_height: usize,
    pub handler: Option<Handler<R>>,
    /// Output stream; standard output when unset.
    pub out: Option<Box<dyn Write>>,
    pub width_fn: WidthFn,
}

impl<R: Row> TwoPane<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            rows,
            detail_height: 0,
            handler: None,
            out: None,
            width_fn: char_width,
        }
    }

    pub fn with_detail_height(mut self, detail_height: usize) -> Self {
        self.detail_height = detail_height;
        self
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&mut Param<'_, R>) -> bool + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    pub fn with_output<W: Write + 'static>(mut self, out: W) -> Self {
        self.out = Some(Box::new(out));
        self
    }

    pub fn with_width_fn(mut self, width_fn: WidthFn) -> Self {
        self.width_fn = width_fn;
        self
    }

    /// Run a session on the controlling terminal (`/dev/tty`).
    #[cfg(unix)]
    pub fn run(&mut self) -> Result<(), PaneError> {
        let mut tty = crate::platform::tty::Tty::open().map_err(PaneError::Open)?;
        self.run_on(&mut tty)
    }

    /// Run a session on `terminal` until a quit key, a handler stop, or a read failure.
    ///
    /// The handler and output stream are handed back to `self` afterwards.
    pub fn run_on<T: Terminal>(&mut self, terminal: &mut T) -> Result<(), PaneError> {
        if self.rows.is_empty() {
            return Err(PaneError::NoRows);
        }
        let (width, height) = terminal.size().map_err(PaneError::Size)?;
        let geometry = Geometry::new(width, height, self.detail_height);

        let config = EnvConfig::from_env();
        let debug = DebugLog::from_config(&config);
        debug.log(|| format!("session start {geometry:?} rows={}", self.rows.len()));

        let sink = self
            .out
            .take()
            .unwrap_or_else(|| Box::new(io::stdout()));
        let mut screen = Screen::new(sink, WriteLog::from_config(&config));
        let mut handler = self.handler.take();

        let result = {
            let mut screen = HiddenCursor::new(&mut screen);
            let mut session = Session {
                rows: &self.rows,
                geometry,
                width_fn: self.width_fn,
                window: ScrollWindow::new(self.rows.len(), geometry.list_height),
                reader: KeyReader::new(),
                debug: &debug,
            };
            session.run(terminal, &mut screen, handler.as_mut())
        };

        match &result {
            Ok(exit) => debug.log(|| format!("session end {exit:?}")),
            Err(err) => debug.log(|| format!("session failed: {err}")),
        }

        self.handler = handler;
        self.out = Some(screen.into_sink());
        result.map(|_| ())
    }
}

struct Session<'a, R> {
    rows: &'a [R],
    geometry: Geometry,
    width_fn: WidthFn,
    window: ScrollWindow,
    reader: KeyReader,
    debug: &'a DebugLog,
}

impl<R: Row> Session<'_, R> {
    fn run<T: Terminal>(
        &mut self,
        terminal: &mut T,
        screen: &mut Screen,
        mut handler: Option<&mut Handler<R>>,
    ) -> Result<Exit, PaneError> {
        loop {
            let lines = render_frame(
                self.rows,
                &self.geometry,
                &self.window,
                self.width_fn,
                screen.gate_mut(),
            );
            screen.flush();
            self.debug.log(|| format!("frame lines={lines}"));

            let key = self
                .reader
                .read_key(terminal)
                .map_err(PaneError::Input)?;
            let action = PaneAction::for_key(&key);

            match action {
                PaneAction::CursorDown => {
                    self.window.move_down();
                }
                PaneAction::CursorUp => {
                    self.window.move_up();
                }
                PaneAction::Quit => {
                    self.finish(screen);
                    return Ok(Exit::QuitKey);
                }
                PaneAction::Unbound => {
                    if let Some(handler) = handler.as_deref_mut() {
                        let mut param = Param {
                            key: key.clone(),
                            cursor: self.window.cursor(),
                            top: self.window.top(),
                            rows: self.rows,
                            geometry: self.geometry,
                            reader: &mut self.reader,
                            terminal: &mut *terminal,
                            screen: &mut *screen,
                        };
                        if !handler(&mut param) {
                            self.finish(screen);
                            return Ok(Exit::HandlerStop);
                        }
                    }
                }
            }
            self.debug.log(|| {
                format!(
                    "key {key:?} -> {action:?} cursor={} top={}",
                    self.window.cursor(),
                    self.window.top()
                )
            });

            if lines > 0 {
                screen.push(PaneCmd::CursorUp(lines));
            }
        }
    }

    fn finish(&self, screen: &mut Screen) {
        screen.push(PaneCmd::Newline);
        screen.flush();
    }
}
