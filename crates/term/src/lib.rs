//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a plain framebuffer that is diffed and flushed to the
//! terminal backend, without any widget/layout framework.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure so layout and hit-testing can be unit-tested
//! - Only repaint the cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Rect, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
