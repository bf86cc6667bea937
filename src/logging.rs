//! Write-log and debug-log sinks.
//!
//! Both sinks are configured from [`EnvConfig`] and do nothing when their path is unset.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::config::EnvConfig;

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0))
        .as_millis() as u64
}

fn append(path: &Path, data: &[u8]) -> std::io::Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(data))
}

/// Copies everything the session writes to the terminal into a file.
///
/// Stops after the first failed write.
#[derive(Debug, Default)]
pub struct WriteLog {
    path: Option<PathBuf>,
    failed: bool,
}

impl WriteLog {
    pub fn from_config(config: &EnvConfig) -> Self {
        Self {
            path: config.write_log.as_ref().map(PathBuf::from),
            failed: false,
        }
    }

    pub fn enabled(&self) -> bool {
        self.path.is_some() && !self.failed
    }

    pub fn record(&mut self, data: &str) {
        if self.failed || data.is_empty() {
            return;
        }
        if let Some(path) = self.path.as_ref() {
            if append(path, data.as_bytes()).is_err() {
                self.failed = true;
            }
        }
    }
}

/// Timestamped diagnostic lines.
#[derive(Debug, Default)]
pub struct DebugLog {
    path: Option<PathBuf>,
}

impl DebugLog {
    pub fn from_config(config: &EnvConfig) -> Self {
        Self {
            path: config.debug_log.as_ref().map(PathBuf::from),
        }
    }

    pub fn enabled(&self) -> bool {
        self.path.is_some()
    }

    /// Append one line; `message` is only evaluated when the log is enabled.
    pub fn log<F>(&self, message: F)
    where
        F: FnOnce() -> String,
    {
        let Some(path) = self.path.as_ref() else {
            return;
        };
        let line = format!("[{}] {}\n", now_ms(), message());
        let _ = append(path, line.as_bytes());
    }
}
