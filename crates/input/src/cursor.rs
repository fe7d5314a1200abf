//! Keyboard cursor over the tile grid.

use crate::types::{Direction, GameAction};

/// Row-major position on a `size × size` grid.
///
/// Moves wrap around the edges of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    size: u8,
    index: usize,
}

impl Cursor {
    pub fn new(size: u8) -> Self {
        Self { size, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// (column, row) of the cursor.
    pub fn position(&self) -> (usize, usize) {
        let n = (self.size as usize).max(1);
        (self.index % n, self.index / n)
    }

    /// Follow the board size; the cursor goes back to the top-left tile when
    /// the size changes.
    pub fn sync_size(&mut self, size: u8) {
        if self.size != size {
            *self = Self::new(size);
        }
    }

    /// Put the cursor on `index` (e.g. after a mouse click). Out-of-range
    /// indices are ignored.
    pub fn set_index(&mut self, index: usize) {
        let n = self.size as usize;
        if index < n * n {
            self.index = index;
        }
    }

    /// What a flip at the cursor means: pick the tile, or start over from
    /// the win summary.
    pub fn flip_action(&self, won: bool) -> GameAction {
        if won {
            GameAction::PlayAgain
        } else {
            GameAction::Select(self.index)
        }
    }

    pub fn step(&mut self, dir: Direction) {
        let n = self.size as usize;
        if n == 0 {
            return;
        }
        let (x, y) = self.position();
        let (x, y) = match dir {
            Direction::Left => ((x + n - 1) % n, y),
            Direction::Right => ((x + 1) % n, y),
            Direction::Up => (x, (y + n - 1) % n),
            Direction::Down => (x, (y + 1) % n),
        };
        self.index = y * n + x;
    }
}
