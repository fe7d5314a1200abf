use crate::board::{Board, Tile};
use crate::game_state::Phase;

/// Owned, render-ready copy of the game state.
///
/// Cloning is cheap: the board shares its tile storage with the game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub size: u8,
    pub board: Board,
    pub phase: Phase,
    pub moves: u32,
    pub pairs_found: u32,
    pub total_pairs: u32,
    pub elapsed_secs: u32,
    pub running: bool,
    pub won: bool,
    pub input_locked: bool,
    pub generation: u64,
}

impl GameSnapshot {
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.board.get(index)
    }

    /// Whether a click on `index` could currently do something.
    pub fn is_interactive(&self, index: usize) -> bool {
        !self.input_locked && self.tile(index).is_some_and(|t| !t.matched)
    }
}
