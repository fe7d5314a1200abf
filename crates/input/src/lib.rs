//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`InputAction`]s and keeps the keyboard
//! [`Cursor`] that stands in for the mouse pointer on the tile grid.

pub mod cursor;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit, InputAction};
