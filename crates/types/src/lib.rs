//! Core types shared across the application.
//! This crate contains pure data types and constants with no external dependencies.

/// Size of one grid tile in pixels. Every placed bomb and every wall sits on a
/// multiple of this in both axes.
pub const TILE_SIZE: i32 = 40;

/// Board dimensions in tiles and pixels.
pub const GRID_ROWS: usize = 15;
pub const GRID_COLS: usize = 15;
pub const WIDTH: i32 = TILE_SIZE * GRID_COLS as i32;
pub const HEIGHT: i32 = TILE_SIZE * GRID_ROWS as i32;

/// Game timing constants (in milliseconds).
pub const TICK_MS: u32 = 16;

/// Player sprite size and glide speed (pixels per tick).
pub const PLAYER_SIZE: i32 = 40;
pub const PLAYER_SPEED: i32 = 5;

/// The detonation queue pops its head once this many Player bombs are pending.
pub const DETONATION_QUEUE_THRESHOLD: usize = 3;

/// Number of Initial bombs scattered when the player declines manual placement.
pub const DEFAULT_INITIAL_BOMBS: usize = 5;

/// Highest turn count an Initial bomb can be assigned.
pub const MAX_INITIAL_TURNS: u8 = 3;

/// Percent chance for a generated tile to be a solid wall.
pub const WALL_CHANCE_PERCENT: u32 = 20;

/// Tiles in the intersection of these rows and columns are always left open,
/// keeping the corner bands around both spawn points walkable.
pub const OPEN_ROWS: [usize; 4] = [0, 1, 13, 14];
pub const OPEN_COLS: [usize; 6] = [0, 1, 2, 12, 13, 14];

/// Spawn tiles. No wall or Initial bomb may ever occupy these.
pub const PROTECTED_TILES: [(usize, usize); 2] = [(0, 0), (GRID_ROWS - 1, GRID_COLS - 1)];

/// How long an explosion marker stays visible.
pub const EXPLOSION_TTL_MS: u32 = 400;

/// A tile-aligned pixel position on the board.
///
/// Doubles as a grid index (divide by [`TILE_SIZE`]) and a draw position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build a position from a (row, col) grid index.
    pub const fn from_tile(row: usize, col: usize) -> Self {
        Self {
            x: col as i32 * TILE_SIZE,
            y: row as i32 * TILE_SIZE,
        }
    }

    /// Grid (row, col) this position sits on.
    pub const fn tile(&self) -> (i32, i32) {
        (self.y / TILE_SIZE, self.x / TILE_SIZE)
    }

    /// The 4 cardinal neighbor positions, one tile away.
    pub const fn neighbors(&self) -> [Position; 4] {
        [
            Position::new(self.x + TILE_SIZE, self.y), // right
            Position::new(self.x - TILE_SIZE, self.y), // left
            Position::new(self.x, self.y + TILE_SIZE), // down
            Position::new(self.x, self.y - TILE_SIZE), // up
        ]
    }

    /// Whether this position lies on the board.
    pub const fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < WIDTH && self.y >= 0 && self.y < HEIGHT
    }
}

/// Bomb kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BombKind {
    /// Dropped by a player; detonates via the queue or chain exposure.
    Player,
    /// Pre-placed obstacle with a turn countdown; detonates only via chain
    /// exposure once its countdown reaches zero.
    Initial,
}

/// Tile kinds on the map.
///
/// `Breakable` exists for map content but currently behaves like `Empty`
/// except for its draw color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Empty,
    Wall,
    Breakable,
}

impl TileKind {
    /// Solid tiles block player movement. They never block chain propagation.
    pub const fn is_solid(&self) -> bool {
        matches!(self, TileKind::Wall)
    }
}

/// Per-player game actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    DropBomb,
}

/// Actions on the pre-game setup screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupAction {
    /// Answer the manual-placement prompt.
    Yes,
    No,
    /// Move the placement cursor.
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Toggle the tile under the cursor.
    Toggle,
    /// Finish tile selection and move on to turn assignment.
    Confirm,
    /// Assign a turn count (1..=3) to the current bomb.
    Assign(u8),
}
