//! Runtime orchestration: the session loop and its handler interface.

pub mod pane;
pub mod param;
pub mod viewport;

pub use pane::{Handler, TwoPane};
pub use param::Param;
pub use viewport::{Geometry, ScrollWindow};
