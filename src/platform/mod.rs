//! Platform-specific terminal integrations.

#[cfg(unix)]
pub mod tty;

#[cfg(unix)]
pub use tty::Tty;
