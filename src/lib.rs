//! Inline split-pane navigator for terminals.
//!
//! A scrollable list of rows fills the top of the screen and the selected row's contents
//! fill the bottom. Frames are redrawn in place with relative cursor movement: no alternate
//! screen, no full clears.
//!
//! # Public API Overview
//! - Implement [`Row`] for your items (or use [`TextRow`]) and run a [`TwoPane`].
//! - Bind extra keys with a handler; it receives a [`Param`] that can read more keys,
//!   push one back, or print a status message.
//! - Inject your own [`Terminal`] through [`TwoPane::run_on`]; [`TwoPane::run`] uses
//!   `/dev/tty`.
//! - Use the text helpers for escape-aware truncation and wrapping.

pub mod config;
pub mod error;
pub mod logging;

pub mod core;
pub mod platform;
pub mod render;
pub mod runtime;

/// Session errors.
pub use crate::error::PaneError;

/// Row capability and the owned convenience row.
pub use crate::core::row::{Row, TextRow};

/// Terminal interface, raw-mode scoping, and the `/dev/tty` implementation.
pub use crate::core::terminal::{RawModeGuard, Terminal};
#[cfg(unix)]
pub use crate::platform::Tty;

/// Key reading and the navigation keymap.
pub use crate::core::input::KeyReader;
pub use crate::core::keybindings::{PaneAction, DEFAULT_PANE_KEYBINDINGS};

/// Session runtime types.
pub use crate::runtime::{Geometry, Handler, Param, ScrollWindow, TwoPane};

/// Escape-aware truncation helpers.
pub use crate::core::text::utils::{truncate_to_width, truncate_with};
/// Width-limited wrapping helper.
pub use crate::core::text::slice::wrap_segments;
/// Width capability and visible width helpers that ignore escape sequences.
pub use crate::core::text::width::{char_width, visible_width, WidthFn};
