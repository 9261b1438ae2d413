//! Board module - the fixed-size tile map.
//!
//! A 15x15 grid where each tile is empty, a solid wall, or breakable.
//! Uses a flat array for cheap copies and cache locality.
//! Walls block player movement (AABB overlap) but never block bomb chains.

use tui_bomber_types::{
    TileKind, GRID_COLS, GRID_ROWS, OPEN_COLS, OPEN_ROWS, PROTECTED_TILES, TILE_SIZE,
    WALL_CHANCE_PERCENT,
};

use crate::rng::SimpleRng;

/// Total number of tiles on the board.
const BOARD_SIZE: usize = GRID_ROWS * GRID_COLS;

/// The tile map, row-major order (row * GRID_COLS + col).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [TileKind; BOARD_SIZE],
}

impl Board {
    /// Create an all-empty board.
    pub fn empty() -> Self {
        Self {
            tiles: [TileKind::Empty; BOARD_SIZE],
        }
    }

    /// Generate a board with random walls.
    ///
    /// Tiles inside the open corner bands (rows and columns around both spawn
    /// points) are guaranteed empty; every other tile has a
    /// [`WALL_CHANCE_PERCENT`] chance of being a wall.
    pub fn generate(rng: &mut SimpleRng) -> Self {
        let mut board = Self::empty();
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let open = OPEN_ROWS.contains(&row) && OPEN_COLS.contains(&col);
                if !open && rng.chance(WALL_CHANCE_PERCENT) {
                    board.set_tile(row, col, TileKind::Wall);
                }
            }
        }
        board
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return None;
        }
        Some(row * GRID_COLS + col)
    }

    /// Get the tile at (row, col). Returns `None` out of bounds.
    pub fn tile(&self, row: usize, col: usize) -> Option<TileKind> {
        Self::index(row, col).map(|i| self.tiles[i])
    }

    /// Set the tile at (row, col). Returns false out of bounds.
    pub fn set_tile(&mut self, row: usize, col: usize, kind: TileKind) -> bool {
        match Self::index(row, col) {
            Some(i) => {
                self.tiles[i] = kind;
                true
            }
            None => false,
        }
    }

    /// Whether (row, col) holds a solid wall.
    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        matches!(self.tile(row, col), Some(kind) if kind.is_solid())
    }

    /// Whether (row, col) is one of the spawn tiles.
    pub fn is_protected(row: usize, col: usize) -> bool {
        PROTECTED_TILES.contains(&(row, col))
    }

    /// Whether an axis-aligned box at pixel position (x, y) overlaps any wall.
    ///
    /// This is the only collision rule in the game; walls are checked per
    /// overlapped tile rather than per wall entity.
    pub fn rect_hits_wall(&self, x: i32, y: i32, w: i32, h: i32) -> bool {
        let first_col = (x.max(0) / TILE_SIZE) as usize;
        let first_row = (y.max(0) / TILE_SIZE) as usize;
        let last_col = ((x + w - 1).max(0) / TILE_SIZE) as usize;
        let last_row = ((y + h - 1).max(0) / TILE_SIZE) as usize;

        for row in first_row..=last_row {
            for col in first_col..=last_col {
                if self.is_wall(row, col) {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
