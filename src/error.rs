use std::io;

use thiserror::Error;

/// Session failures. Every one of them ends the session.
#[derive(Debug, Error)]
pub enum PaneError {
    #[error("failed to open terminal: {0}")]
    Open(#[source] io::Error),

    #[error("failed to query terminal size: {0}")]
    Size(#[source] io::Error),

    #[error("failed to read key: {0}")]
    Input(#[source] io::Error),

    #[error("no rows to display")]
    NoRows,
}

impl PaneError {
    /// Underlying I/O error, if the failure came from the terminal.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            PaneError::Open(err) | PaneError::Size(err) | PaneError::Input(err) => Some(err),
            PaneError::NoRows => None,
        }
    }
}
