//! Read-only state exposed to the renderer.

use tui_bomber_types::{BombKind, Position, TileKind, GRID_COLS, GRID_ROWS};

use crate::session::PLAYER_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BombSnapshot {
    pub pos: Position,
    pub kind: BombKind,
    pub turns_remaining: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub pos: Position,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub tiles: [[TileKind; GRID_COLS]; GRID_ROWS],
    pub bombs: Vec<BombSnapshot>,
    pub explosions: Vec<Position>,
    pub players: [PlayerSnapshot; PLAYER_COUNT],
    pub queue_len: usize,
    pub bombs_placed: u32,
}
