//! Terminal capability trait and raw-mode scoping.

use std::io;

/// Minimal terminal interface the navigator needs.
///
/// Output does not go through this trait; the session writes to its own sink.
pub trait Terminal {
    /// Terminal dimensions as `(columns, rows)`.
    fn size(&self) -> io::Result<(usize, usize)>;

    /// Switch input to raw (non-canonical, no echo) mode.
    fn enter_raw(&mut self) -> io::Result<()>;

    /// Restore the input mode saved by [`Terminal::enter_raw`].
    fn restore(&mut self) -> io::Result<()>;

    /// Read one code point, blocking until one arrives.
    ///
    /// `'\0'` means "nothing this call" and is skipped by readers.
    fn read_char(&mut self) -> io::Result<char>;

    /// Whether more input is already available without blocking.
    fn buffered(&self) -> bool;
}

/// RAII guard that restores the terminal input mode on drop.
pub struct RawModeGuard<'a, T: Terminal + ?Sized> {
    terminal: &'a mut T,
}

impl<'a, T: Terminal + ?Sized> RawModeGuard<'a, T> {
    /// Enter raw mode; the guard restores it however the scope is left.
    pub fn enter(terminal: &'a mut T) -> io::Result<Self> {
        terminal.enter_raw()?;
        Ok(Self { terminal })
    }

    /// Access the wrapped terminal.
    pub fn terminal_mut(&mut self) -> &mut T {
        self.terminal
    }
}

impl<T: Terminal + ?Sized> Drop for RawModeGuard<'_, T> {
    fn drop(&mut self) {
        let _ = self.terminal.restore();
    }
}
