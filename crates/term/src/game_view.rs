//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_bomber_core::GameSnapshot;
use tui_bomber_types::{BombKind, TileKind, GRID_COLS, GRID_ROWS, TILE_SIZE};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Terminal renderer for a game frame.
pub struct GameView {
    /// Board tile width in terminal columns.
    cell_w: u16,
    /// Board tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one snapshot into a framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_w = GRID_COLS as u16 * self.cell_w;
        let board_h = GRID_ROWS as u16 * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + SIDE_PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.draw_border(start_x, start_y, frame_w, frame_h, styles::BORDER);

        // Tiles first, then bombs and explosions on top, players last.
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let (ch, style) = match snap.tiles[row][col] {
                    TileKind::Wall => ('█', styles::WALL),
                    TileKind::Breakable => ('▒', styles::BREAKABLE),
                    TileKind::Empty => ('·', styles::FLOOR),
                };
                self.fill_tile(&mut fb, start_x, start_y, row, col, ch, style);
            }
        }

        for bomb in &snap.bombs {
            let (row, col) = tile_of(bomb.pos.y, bomb.pos.x);
            match bomb.kind {
                BombKind::Player => {
                    self.fill_tile(&mut fb, start_x, start_y, row, col, '●', styles::PLAYER_BOMB);
                }
                BombKind::Initial => {
                    self.fill_tile(&mut fb, start_x, start_y, row, col, '●', styles::INITIAL_BOMB);
                    // Show the remaining countdown in the tile's second column.
                    if self.cell_w >= 2 {
                        let digit = char::from(b'0' + bomb.turns_remaining.min(9));
                        let x = start_x + 1 + col as u16 * self.cell_w + 1;
                        let y = start_y + 1 + row as u16 * self.cell_h;
                        fb.put_char(x, y, digit, styles::INITIAL_BOMB.bold());
                    }
                }
            }
        }

        for pos in &snap.explosions {
            let (row, col) = tile_of(pos.y, pos.x);
            self.fill_tile(&mut fb, start_x, start_y, row, col, '✸', styles::EXPLOSION);
        }

        for (i, player) in snap.players.iter().enumerate() {
            // Mid-glide positions snap to the nearest tile for drawing.
            let (row, col) = tile_of(
                player.pos.y + TILE_SIZE / 2 - 1,
                player.pos.x + TILE_SIZE / 2 - 1,
            );
            let style = if i == 0 { styles::PLAYER_ONE } else { styles::PLAYER_TWO };
            self.fill_tile(&mut fb, start_x, start_y, row, col, '█', style);
        }

        self.draw_side_panel(&mut fb, snap, viewport, start_x, start_y, frame_w);

        fb
    }

    fn fill_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
        ch: char,
        style: CellStyle,
    ) {
        let x = start_x + 1 + col as u16 * self.cell_w;
        let y = start_y + 1 + row as u16 * self.cell_h;
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x + 8 >= viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let mut y = start_y;
        for (name, amount) in [
            ("BOMBS", snap.bombs.len()),
            ("QUEUE", snap.queue_len),
            ("PLACED", snap.bombs_placed as usize),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y.saturating_add(1), &format!("{}", amount), value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "P1 ←↑↓→ ␣", value);
        fb.put_str(panel_x, y.saturating_add(1), "P2 wasd e", value);
        fb.put_str(panel_x, y.saturating_add(2), "q quit", value);
    }
}

const SIDE_PANEL_W: u16 = 12;

fn tile_of(y_px: i32, x_px: i32) -> (usize, usize) {
    let row = (y_px / TILE_SIZE).clamp(0, GRID_ROWS as i32 - 1) as usize;
    let col = (x_px / TILE_SIZE).clamp(0, GRID_COLS as i32 - 1) as usize;
    (row, col)
}

mod styles {
    use super::{CellStyle, Rgb};

    const FLOOR_BG: Rgb = Rgb::new(25, 25, 35);

    pub const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
    pub const FLOOR: CellStyle = CellStyle::new(Rgb::new(70, 70, 85), FLOOR_BG);
    pub const WALL: CellStyle = CellStyle::new(Rgb::new(19, 17, 26), Rgb::new(60, 60, 70));
    pub const BREAKABLE: CellStyle = CellStyle::new(Rgb::new(150, 75, 0), FLOOR_BG);
    pub const PLAYER_BOMB: CellStyle = CellStyle::new(Rgb::new(230, 230, 230), FLOOR_BG);
    pub const INITIAL_BOMB: CellStyle = CellStyle::new(Rgb::new(255, 180, 60), FLOOR_BG);
    pub const EXPLOSION: CellStyle = CellStyle::new(Rgb::new(255, 60, 60), FLOOR_BG);
    pub const PLAYER_ONE: CellStyle = CellStyle::new(Rgb::new(60, 120, 220), FLOOR_BG);
    pub const PLAYER_TWO: CellStyle = CellStyle::new(Rgb::new(70, 200, 120), FLOOR_BG);
}
