//! Text helpers (escape-aware width, truncation, wrapping).
//!
//! These helpers are pure (string in, string slice out) and live under `core` so the renderer
//! can depend on them without touching the terminal.

pub mod slice;
pub mod utils;
pub mod width;
