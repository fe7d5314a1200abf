//! Board module - tiles and board generation
//!
//! A board is a square grid of `size × size` tiles stored row-major. Boards are
//! immutable snapshots: every update returns a new board and leaves the old one
//! untouched, so a snapshot handed to the renderer never changes under it.

use std::sync::Arc;

use thiserror::Error;

use crate::rng::SimpleRng;
use crate::types::Face;

/// Board generation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The grid cannot be split into pairs.
    #[error("board size {size} gives {cells} cells; an even, non-zero number of cells is required")]
    InvalidSize { size: u8, cells: usize },
}

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Stable index of the tile within its board.
    pub id: usize,
    pub face: Face,
    /// Currently face-up.
    pub revealed: bool,
    /// Permanently resolved. A matched tile is always revealed too.
    pub matched: bool,
}

impl Tile {
    pub fn new(id: usize, face: Face) -> Self {
        Self {
            id,
            face,
            revealed: false,
            matched: false,
        }
    }

    /// Whether the face should be drawn.
    pub fn is_face_up(&self) -> bool {
        self.revealed || self.matched
    }

    /// Whether a pick on this tile can start or complete a turn.
    pub fn is_selectable(&self) -> bool {
        !self.revealed && !self.matched
    }
}

/// An immutable board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    tiles: Arc<[Tile]>,
}

impl Board {
    /// Deal a freshly shuffled board.
    ///
    /// Pairs draw faces from the palette in order (cycling when there are more
    /// pairs than faces), the doubled list is shuffled, and ids are assigned by
    /// final position.
    pub fn generate(size: u8, rng: &mut SimpleRng) -> Result<Self, BoardError> {
        let cells = (size as usize) * (size as usize);
        if cells == 0 || cells % 2 != 0 {
            return Err(BoardError::InvalidSize { size, cells });
        }

        let pairs = cells / 2;
        let mut faces: Vec<Face> = (0..pairs).map(Face::from_slot).collect();
        faces.extend_from_within(..);
        rng.shuffle(&mut faces);

        let tiles = faces
            .into_iter()
            .enumerate()
            .map(|(id, face)| Tile::new(id, face))
            .collect();

        Ok(Self { size, tiles })
    }

    /// Build a board from explicit tiles (row-major).
    ///
    /// Returns `None` unless `tiles.len() == size * size`.
    pub fn from_tiles(size: u8, tiles: Vec<Tile>) -> Option<Self> {
        if tiles.len() != (size as usize) * (size as usize) {
            return None;
        }
        Some(Self {
            size,
            tiles: tiles.into(),
        })
    }

    /// Tiles per row.
    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn total_pairs(&self) -> usize {
        self.tiles.len() / 2
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    pub fn matched_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.matched).count()
    }

    /// New board with the tile at `index` face-up.
    pub fn with_revealed(&self, index: usize) -> Self {
        self.with_tiles(&[index], |t| t.revealed = true)
    }

    /// New board with both tiles turned face-down again.
    pub fn with_hidden(&self, a: usize, b: usize) -> Self {
        self.with_tiles(&[a, b], |t| t.revealed = false)
    }

    /// New board with both tiles permanently matched.
    pub fn with_matched(&self, a: usize, b: usize) -> Self {
        self.with_tiles(&[a, b], |t| {
            t.revealed = true;
            t.matched = true;
        })
    }

    fn with_tiles(&self, indices: &[usize], f: impl Fn(&mut Tile)) -> Self {
        let mut tiles = self.tiles.to_vec();
        for &i in indices {
            if let Some(t) = tiles.get_mut(i) {
                f(t);
            }
        }
        Self {
            size: self.size,
            tiles: tiles.into(),
        }
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PALETTE_LEN;
    use std::collections::HashMap;

    fn face_counts(board: &Board) -> HashMap<Face, usize> {
        let mut counts = HashMap::new();
        for t in board {
            *counts.entry(t.face).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_generate_supported_sizes() {
        let mut rng = SimpleRng::new(1);
        for size in [2u8, 4, 6] {
            let board = Board::generate(size, &mut rng).unwrap();
            assert_eq!(board.len(), (size as usize).pow(2));
            assert_eq!(board.size(), size);
            for (face, n) in face_counts(&board) {
                assert_eq!(n, 2, "face {:?} on size {}", face, size);
            }
        }
    }

    #[test]
    fn test_generate_assigns_sequential_ids() {
        let board = Board::generate(4, &mut SimpleRng::new(5)).unwrap();
        for (i, t) in board.iter().enumerate() {
            assert_eq!(t.id, i);
            assert!(!t.revealed);
            assert!(!t.matched);
        }
    }

    #[test]
    fn test_generate_rejects_odd_area() {
        let mut rng = SimpleRng::new(1);
        for size in [1u8, 3, 5, 7] {
            let err = Board::generate(size, &mut rng).unwrap_err();
            assert_eq!(
                err,
                BoardError::InvalidSize {
                    size,
                    cells: (size as usize).pow(2)
                }
            );
        }
    }

    #[test]
    fn test_generate_rejects_zero() {
        assert!(Board::generate(0, &mut SimpleRng::new(1)).is_err());
    }

    #[test]
    fn test_generate_cycles_palette_on_large_boards() {
        // 8x8 = 32 pairs > palette, so early faces repeat.
        let board = Board::generate(8, &mut SimpleRng::new(3)).unwrap();
        let counts = face_counts(&board);
        assert_eq!(counts.len(), PALETTE_LEN);
        for n in counts.values() {
            assert_eq!(n % 2, 0);
        }
        assert_eq!(counts.values().sum::<usize>(), 64);
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let a = Board::generate(6, &mut SimpleRng::new(77)).unwrap();
        let b = Board::generate(6, &mut SimpleRng::new(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_updates_do_not_touch_original() {
        let board = Board::generate(2, &mut SimpleRng::new(9)).unwrap();
        let revealed = board.with_revealed(0);
        assert!(revealed.get(0).unwrap().revealed);
        assert!(!board.get(0).unwrap().revealed);

        let matched = revealed.with_matched(0, 1);
        assert!(matched.get(1).unwrap().matched);
        assert!(matched.get(1).unwrap().revealed);
        assert_eq!(matched.matched_count(), 2);
        assert_eq!(revealed.matched_count(), 0);

        let hidden = revealed.with_hidden(0, 1);
        assert!(!hidden.get(0).unwrap().revealed);
    }

    #[test]
    fn test_out_of_range_updates_are_ignored() {
        let board = Board::generate(2, &mut SimpleRng::new(9)).unwrap();
        assert_eq!(board.with_revealed(99), board);
    }

    #[test]
    fn test_from_tiles_checks_length() {
        let tiles = vec![Tile::new(0, Face::from_slot(0)), Tile::new(1, Face::from_slot(0))];
        assert!(Board::from_tiles(2, tiles.clone()).is_none());
        assert!(Board::from_tiles(1, tiles).is_none());
    }
}
