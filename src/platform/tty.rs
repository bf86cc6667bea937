//! Controlling-terminal implementation backed by `/dev/tty`.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::io::AsRawFd;

use libc::{self, c_int};

use crate::core::terminal::Terminal;

const TTY_PATH: &str = "/dev/tty";

fn read_winsize(fd: c_int) -> Option<(u16, u16)> {
    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut size) };
    if result == 0 && size.ws_col > 0 && size.ws_row > 0 {
        Some((size.ws_col, size.ws_row))
    } else {
        None
    }
}

fn poll_readable(fd: c_int, timeout_ms: i32) -> bool {
    let mut fds = libc::pollfd {
        fd,
        events: libc::POLLIN,
        revents: 0,
    };
    let result = unsafe { libc::poll(&mut fds, 1, timeout_ms) };
    result > 0 && (fds.revents & libc::POLLIN) != 0
}

fn get_termios(fd: c_int) -> io::Result<libc::termios> {
    let mut termios = unsafe { std::mem::zeroed::<libc::termios>() };
    let result = unsafe { libc::tcgetattr(fd, &mut termios) };
    if result != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(termios)
}

fn set_termios(fd: c_int, termios: &libc::termios) -> io::Result<()> {
    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, termios) };
    if result != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// Raw input settings: no echo, no line buffering, no input translation. Signals and
/// output processing stay on, so Ctrl-C still interrupts and `\n` still returns the carriage.
///
/// This is the flag set go-tty uses for its raw mode, not a full `cfmakeraw`.
fn raw_input(original: &libc::termios) -> libc::termios {
    let mut raw = *original;
    raw.c_iflag &= !(libc::ISTRIP | libc::INLCR | libc::ICRNL | libc::IGNCR | libc::IXOFF);
    raw.c_lflag &= !(libc::ECHO | libc::ICANON);
    raw.c_cc[libc::VMIN] = 1;
    raw.c_cc[libc::VTIME] = 0;
    raw
}

/// Number of bytes in the UTF-8 sequence started by `lead`, or `None` for a stray byte.
fn utf8_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7f => Some(1),
        0xc2..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf4 => Some(4),
        _ => None,
    }
}

fn is_continuation(byte: u8) -> bool {
    (0x80..=0xbf).contains(&byte)
}

pub struct Tty {
    file: File,
    original_termios: Option<libc::termios>,
    /// Byte read while decoding that turned out to start the next code point.
    lookahead: Option<u8>,
}

impl Tty {
    pub fn open() -> io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(TTY_PATH)?;
        Ok(Self {
            file,
            original_termios: None,
            lookahead: None,
        })
    }

    fn fd(&self) -> c_int {
        self.file.as_raw_fd()
    }

    fn read_byte(&mut self) -> io::Result<u8> {
        if let Some(byte) = self.lookahead.take() {
            return Ok(byte);
        }
        let mut byte = 0u8;
        loop {
            let result = unsafe { libc::read(self.fd(), (&mut byte as *mut u8).cast(), 1) };
            if result == 1 {
                return Ok(byte);
            }
            if result == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "terminal input closed",
                ));
            }
            let err = io::Error::last_os_error();
            if err.kind() != io::ErrorKind::Interrupted {
                return Err(err);
            }
        }
    }
}

impl Terminal for Tty {
    fn size(&self) -> io::Result<(usize, usize)> {
        read_winsize(self.fd())
            .map(|(cols, rows)| (cols as usize, rows as usize))
            .ok_or_else(|| io::Error::other("terminal size unavailable"))
    }

    fn enter_raw(&mut self) -> io::Result<()> {
        let original = get_termios(self.fd())?;
        set_termios(self.fd(), &raw_input(&original))?;
        self.original_termios = Some(original);
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        if let Some(original) = self.original_termios.take() {
            set_termios(self.fd(), &original)?;
        }
        Ok(())
    }

    fn read_char(&mut self) -> io::Result<char> {
        let lead = self.read_byte()?;
        let Some(len) = utf8_len(lead) else {
            return Ok(char::REPLACEMENT_CHARACTER);
        };
        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(len).skip(1) {
            let byte = self.read_byte()?;
            if !is_continuation(byte) {
                // Only the bad lead is dropped; the byte after it is still a key.
                self.lookahead = Some(byte);
                return Ok(char::REPLACEMENT_CHARACTER);
            }
            *slot = byte;
        }
        Ok(std::str::from_utf8(&bytes[..len])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn buffered(&self) -> bool {
        self.lookahead.is_some() || poll_readable(self.fd(), 0)
    }
}

impl Drop for Tty {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
