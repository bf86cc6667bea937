//! Key reading: one logical keypress per call.
//!
//! A key token is either a single code point or a whole escape sequence. An ESC is kept
//! open for as long as the terminal already holds more input, which is how multi-byte
//! arrow keys arrive in one token while a lone ESC press is returned right away.

use std::io;

use crate::core::terminal::{RawModeGuard, Terminal};

const ESC: char = '\x1b';

/// Reads key tokens and holds at most one pushed-back token for replay.
#[derive(Debug, Default)]
pub struct KeyReader {
    pending: Option<String>,
}

impl KeyReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next key token. A pushed-back token is returned without touching the terminal.
    ///
    /// Raw mode is held only for the duration of the call.
    pub fn read_key<T: Terminal + ?Sized>(&mut self, terminal: &mut T) -> io::Result<String> {
        if let Some(key) = self.pending.take() {
            return Ok(key);
        }

        let mut raw = RawModeGuard::enter(terminal)?;
        let terminal = raw.terminal_mut();

        let mut token = String::new();
        let mut escape = false;
        loop {
            let ch = terminal.read_char()?;
            if ch == '\0' {
                continue;
            }
            token.push(ch);
            if ch == ESC {
                escape = true;
            }
            if !(escape && terminal.buffered()) {
                return Ok(token);
            }
        }
    }

    /// Queue `key` for the next [`KeyReader::read_key`], replacing any queued key.
    pub fn unread_key(&mut self, key: impl Into<String>) {
        self.pending = Some(key.into());
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::KeyReader;
    use crate::core::terminal::Terminal;
    use std::collections::VecDeque;
    use std::io;

    /// Input arrives in bursts; chars within a burst report as buffered.
    #[derive(Default)]
    struct BurstTerminal {
        bursts: VecDeque<VecDeque<char>>,
        reads: usize,
        raw: bool,
        raw_entries: usize,
    }

    impl BurstTerminal {
        fn with_bursts(bursts: &[&str]) -> Self {
            Self {
                bursts: bursts.iter().map(|b| b.chars().collect()).collect(),
                ..Self::default()
            }
        }
    }

    impl Terminal for BurstTerminal {
        fn size(&self) -> io::Result<(usize, usize)> {
            Ok((80, 24))
        }

        fn enter_raw(&mut self) -> io::Result<()> {
            self.raw = true;
            self.raw_entries += 1;
            Ok(())
        }

        fn restore(&mut self) -> io::Result<()> {
            self.raw = false;
            Ok(())
        }

        fn read_char(&mut self) -> io::Result<char> {
            assert!(self.raw, "read outside raw mode");
            self.reads += 1;
            while let Some(burst) = self.bursts.front_mut() {
                if let Some(ch) = burst.pop_front() {
                    return Ok(ch);
                }
                self.bursts.pop_front();
            }
            Err(io::Error::from(io::ErrorKind::UnexpectedEof))
        }

        fn buffered(&self) -> bool {
            self.bursts.front().is_some_and(|burst| !burst.is_empty())
        }
    }

    #[test]
    fn arrow_sequence_is_one_token() {
        let mut term = BurstTerminal::with_bursts(&["\x1b[B"]);
        let mut reader = KeyReader::new();
        assert_eq!(reader.read_key(&mut term).unwrap(), "\x1b[B");
        assert_eq!(term.reads, 3);
        assert!(!term.raw);
    }

    #[test]
    fn lone_escape_is_not_merged_with_next_key() {
        let mut term = BurstTerminal::with_bursts(&["\x1b", "j"]);
        let mut reader = KeyReader::new();
        assert_eq!(reader.read_key(&mut term).unwrap(), "\x1b");
        assert_eq!(reader.read_key(&mut term).unwrap(), "j");
    }

    #[test]
    fn plain_keys_return_one_at_a_time_even_when_buffered() {
        let mut term = BurstTerminal::with_bursts(&["jk"]);
        let mut reader = KeyReader::new();
        assert_eq!(reader.read_key(&mut term).unwrap(), "j");
        assert_eq!(reader.read_key(&mut term).unwrap(), "k");
    }

    #[test]
    fn nul_reads_are_skipped() {
        let mut term = BurstTerminal::with_bursts(&["\0", "\0x"]);
        let mut reader = KeyReader::new();
        assert_eq!(reader.read_key(&mut term).unwrap(), "x");
    }

    #[test]
    fn multibyte_code_point_is_one_token() {
        let mut term = BurstTerminal::with_bursts(&["é日"]);
        let mut reader = KeyReader::new();
        assert_eq!(reader.read_key(&mut term).unwrap(), "é");
        assert_eq!(reader.read_key(&mut term).unwrap(), "日");
    }

    #[test]
    fn pushed_back_key_replays_without_io() {
        let mut term = BurstTerminal::with_bursts(&["j"]);
        let mut reader = KeyReader::new();
        reader.unread_key("x");
        assert!(reader.has_pending());
        assert_eq!(reader.read_key(&mut term).unwrap(), "x");
        assert_eq!(term.reads, 0);
        assert_eq!(term.raw_entries, 0);

        assert_eq!(reader.read_key(&mut term).unwrap(), "j");
        assert_eq!(term.reads, 1);
    }

    #[test]
    fn push_back_overwrites_previous_pending_key() {
        let mut term = BurstTerminal::default();
        let mut reader = KeyReader::new();
        reader.unread_key("a");
        reader.unread_key("b");
        assert_eq!(reader.read_key(&mut term).unwrap(), "b");
        assert!(!reader.has_pending());
    }

    #[test]
    fn read_failure_propagates_and_restores_mode() {
        let mut term = BurstTerminal::with_bursts(&["\x1b["]);
        // The trailing NUL keeps the sequence open past the end of input.
        term.bursts[0].push_back('\0');
        let mut reader = KeyReader::new();
        let err = reader.read_key(&mut term).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert!(!term.raw);
    }

    #[test]
    fn failure_on_first_read_propagates() {
        let mut term = BurstTerminal::default();
        let mut reader = KeyReader::new();
        assert!(reader.read_key(&mut term).is_err());
        assert!(!term.raw);
    }
}
