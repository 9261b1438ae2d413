//! Game session state.
//!
//! `GameState` is the single owner of the board, the players, the live-bomb
//! collection, the detonation queue, and the explosion markers. Everything is
//! synchronous and frame-stepped: the loop applies input actions, then calls
//! [`GameState::tick`] once per frame.

use tui_bomber_types::{
    GameAction, Position, GRID_COLS, GRID_ROWS, MAX_INITIAL_TURNS, PROTECTED_TILES,
};

use crate::board::Board;
use crate::bomb::{bomb_at, bomb_by_id, Bomb, BombId};
use crate::chain;
use crate::explosion::{update_explosions, Explosion};
use crate::player::Player;
use crate::queue::DetonationQueue;
use crate::rng::SimpleRng;
use crate::snapshot::{BombSnapshot, GameSnapshot, PlayerSnapshot};

/// Number of players in a session.
pub const PLAYER_COUNT: usize = 2;

/// One running game: board, players, bombs, queue, explosions.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    players: [Player; PLAYER_COUNT],
    bombs: Vec<Bomb>,
    queue: DetonationQueue,
    explosions: Vec<Explosion>,
    rng: SimpleRng,
    next_bomb_id: BombId,
    bombs_placed: u32,
}

impl GameState {
    /// New session with a randomly generated wall layout.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Board::generate(&mut rng);
        Self::with_board(board, rng)
    }

    /// New session on a given board. Useful for tests and manual layouts.
    pub fn with_board(board: Board, rng: SimpleRng) -> Self {
        let players = PROTECTED_TILES.map(|(row, col)| Player::new(Position::from_tile(row, col)));
        Self {
            board,
            players,
            bombs: Vec::new(),
            queue: DetonationQueue::new(),
            explosions: Vec::new(),
            rng,
            next_bomb_id: 0,
            bombs_placed: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bombs(&self) -> &[Bomb] {
        &self.bombs
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn bombs_placed(&self) -> u32 {
        self.bombs_placed
    }

    /// Apply one input action for one player.
    pub fn apply_action(&mut self, player: usize, action: GameAction) {
        if player >= PLAYER_COUNT {
            return;
        }
        match action {
            GameAction::DropBomb => {
                let pos = self.players[player].target;
                self.place_player_bomb(pos);
            }
            _ => self.players[player].try_move(action, &self.board),
        }
    }

    /// Place a player bomb at a tile-aligned position.
    ///
    /// Silently ignored if any live bomb already occupies that tile. A
    /// successful placement enters both the live collection and the
    /// detonation queue.
    pub fn place_player_bomb(&mut self, pos: Position) -> bool {
        if bomb_at(&self.bombs, pos).is_some() {
            return false;
        }
        let id = self.alloc_id();
        self.bombs.push(Bomb::player(id, pos));
        self.queue.push(id);
        self.bombs_placed += 1;
        true
    }

    /// Place one Initial bomb on a grid tile.
    ///
    /// Rejected (silently) on protected tiles, walls, occupied tiles, and
    /// out-of-range turn counts.
    pub fn place_initial_bomb(&mut self, row: usize, col: usize, turns: u8) -> bool {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return false;
        }
        if Board::is_protected(row, col) || self.board.is_wall(row, col) {
            return false;
        }
        if turns > MAX_INITIAL_TURNS {
            return false;
        }
        let pos = Position::from_tile(row, col);
        if bomb_at(&self.bombs, pos).is_some() {
            return false;
        }
        let id = self.alloc_id();
        self.bombs.push(Bomb::initial(id, pos, turns));
        true
    }

    /// Place Initial bombs from the manual setup result.
    pub fn place_initial_bombs(&mut self, placements: &[((usize, usize), u8)]) {
        for &((row, col), turns) in placements {
            self.place_initial_bomb(row, col, turns);
        }
    }

    /// Scatter `count` Initial bombs on random open tiles, each with a random
    /// turn count in 1..=[`MAX_INITIAL_TURNS`].
    pub fn scatter_initial_bombs(&mut self, count: usize) {
        let mut candidates: Vec<(usize, usize)> = Vec::new();
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                if Board::is_protected(row, col) || self.board.is_wall(row, col) {
                    continue;
                }
                if bomb_at(&self.bombs, Position::from_tile(row, col)).is_some() {
                    continue;
                }
                candidates.push((row, col));
            }
        }

        self.rng.shuffle(&mut candidates);
        for &(row, col) in candidates.iter().take(count) {
            let turns = 1 + self.rng.next_range(MAX_INITIAL_TURNS as u32) as u8;
            self.place_initial_bomb(row, col, turns);
        }
    }

    /// Advance the session by one frame.
    ///
    /// Glides players toward their targets, pops at most one eligible bomb
    /// off the detonation queue (triggering its chain), and ages explosion
    /// markers. All chain side effects complete within this call.
    pub fn tick(&mut self, dt_ms: u32) {
        for player in self.players.iter_mut() {
            player.glide();
        }

        if let Some(id) = self.queue.pop_eligible(&self.bombs) {
            // pop_eligible only returns live ids.
            if let Some(idx) = bomb_by_id(&self.bombs, id) {
                let pos = self.bombs[idx].pos;
                chain::detonate(pos, &mut self.bombs, &mut self.explosions);
            }
        }

        update_explosions(&mut self.explosions, dt_ms);
    }

    /// Detonate whatever bomb sits at `pos` right now. No-op when the tile is
    /// empty. Returns the number of bombs removed.
    pub fn detonate_at(&mut self, pos: Position) -> usize {
        chain::detonate(pos, &mut self.bombs, &mut self.explosions)
    }

    /// Read-only state for the renderer.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut tiles = [[tui_bomber_types::TileKind::Empty; GRID_COLS]; GRID_ROWS];
        for (row, tiles_row) in tiles.iter_mut().enumerate() {
            for (col, tile) in tiles_row.iter_mut().enumerate() {
                if let Some(kind) = self.board.tile(row, col) {
                    *tile = kind;
                }
            }
        }

        GameSnapshot {
            tiles,
            bombs: self
                .bombs
                .iter()
                .map(|b| BombSnapshot {
                    pos: b.pos,
                    kind: b.kind,
                    turns_remaining: b.turns_remaining,
                })
                .collect(),
            explosions: self.explosions.iter().map(|e| e.pos).collect(),
            players: self.players.map(|p| PlayerSnapshot { pos: p.pos }),
            queue_len: self.queue.len(),
            bombs_placed: self.bombs_placed,
        }
    }

    fn alloc_id(&mut self) -> BombId {
        let id = self.next_bomb_id;
        self.next_bomb_id += 1;
        id
    }
}
