//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Sizes
//!
//! The board is a square grid of `size × size` tiles. The selector offers
//! [`SUPPORTED_SIZES`] (2, 4 and 6); every one of them has an even area so the
//! tiles can be split into pairs.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval of the game loop (~60 FPS) |
//! | `EVAL_DELAY_MS` | 500 | Delay between the second pick and its comparison |
//! | `CLOCK_TICK_MS` | 1000 | Period of the elapsed-time counter |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{format_clock, next_size, Face, DEFAULT_SIZE, PALETTE_LEN};
//!
//! assert_eq!(DEFAULT_SIZE, 4);
//! assert_eq!(next_size(6), 2);
//!
//! // Faces cycle through the palette.
//! assert_eq!(Face::from_slot(PALETTE_LEN + 1), Face::from_slot(1));
//!
//! assert_eq!(format_clock(75), "01:15");
//! ```

/// Board size used on startup.
pub const DEFAULT_SIZE: u8 = 4;

/// Sizes offered by the size selector, in cycling order.
pub const SUPPORTED_SIZES: [u8; 3] = [2, 4, 6];

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay between the second pick of a turn and its comparison.
pub const EVAL_DELAY_MS: u32 = 500;

/// Period of the countup clock (one second).
pub const CLOCK_TICK_MS: u32 = 1000;

/// Number of distinct faces in the palette.
pub const PALETTE_LEN: usize = 18;

/// Face colors, in draw order.
///
/// 18 entries rather than the classic 12: a 6×6 board deals 18 pairs, and a
/// shorter palette would show some faces four times instead of exactly twice.
pub const PALETTE: [(u8, u8, u8); PALETTE_LEN] = [
    (0xe6, 0x39, 0x46),
    (0xf7, 0x7f, 0x00),
    (0xfc, 0xbf, 0x49),
    (0xff, 0xd1, 0x66),
    (0x06, 0xd6, 0xa0),
    (0x11, 0x8a, 0xb2),
    (0x07, 0x3b, 0x4c),
    (0x9b, 0x5d, 0xe5),
    (0xff, 0x6b, 0x6b),
    (0x6a, 0x4c, 0x93),
    (0x00, 0xb4, 0xd8),
    (0x8a, 0xc9, 0x26),
    (0xf1, 0x5b, 0xb5),
    (0x00, 0xf5, 0xd4),
    (0xa0, 0x52, 0x2d),
    (0xc0, 0xc0, 0xc0),
    (0xff, 0x9f, 0x1c),
    (0x3a, 0x86, 0xff),
];

/// One glyph per palette slot, drawn on top of the face color.
pub const GLYPHS: [char; PALETTE_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'M', 'N', 'P', 'R', 'S', 'U', 'W', 'X',
];

/// Hidden face value of a tile: a slot in [`PALETTE`].
///
/// Two tiles form a pair when their faces are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Face(u8);

impl Face {
    /// Face for the `slot`-th pair, cycling through the palette.
    pub const fn from_slot(slot: usize) -> Self {
        Face((slot % PALETTE_LEN) as u8)
    }

    /// Palette index of this face.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        PALETTE[self.0 as usize]
    }

    pub const fn glyph(self) -> char {
        GLYPHS[self.0 as usize]
    }
}

/// Cursor movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Game actions that can be applied to the game controller
///
/// These actions are produced by keyboard and mouse input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Pick the tile at this board index
    Select(usize),
    /// Regenerate the board at the current size and zero the counters
    Restart,
    /// Restart from the win summary (ignored while a game is in progress)
    PlayAgain,
    /// Switch to a `size × size` board
    SetSize(u8),
    /// Switch to the next entry of [`SUPPORTED_SIZES`]
    CycleSize,
}

/// Size that follows `size` in the selector, wrapping around.
///
/// Unknown sizes go back to the first supported one.
pub fn next_size(size: u8) -> u8 {
    match SUPPORTED_SIZES.iter().position(|&s| s == size) {
        Some(i) => SUPPORTED_SIZES[(i + 1) % SUPPORTED_SIZES.len()],
        None => SUPPORTED_SIZES[0],
    }
}

/// Format elapsed seconds as zero-padded `mm:ss`.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
