//! Core interfaces and types.

pub mod input;
pub mod keybindings;
pub mod output;
pub mod row;
pub mod terminal;
pub mod text;
