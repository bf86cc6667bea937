//! Rendering pipeline.

pub mod renderer;

pub use renderer::{render_frame, render_list};
