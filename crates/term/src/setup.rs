//! Pre-game setup screens.
//!
//! A yes/no prompt for manual bomb placement, a cursor-driven tile selection
//! screen, and a per-bomb turn assignment screen. The flow is a pure state
//! machine ([`SetupScreen`]) so it can be unit-tested without a terminal; the
//! binary feeds it [`SetupAction`]s and renders it between events.

use tui_bomber_core::Board;
use tui_bomber_types::{SetupAction, GRID_COLS, GRID_ROWS, MAX_INITIAL_TURNS};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;

/// Which screen the setup flow is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStage {
    /// "Do you want to manually place bombs? (y/n)"
    Prompt,
    /// Cursor-driven tile selection.
    Placement,
    /// Digit-key turn assignment, one selected tile at a time.
    TurnAssign,
    Done,
}

/// Outcome of the setup flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupChoice {
    /// Scatter the default number of Initial bombs randomly.
    Random,
    /// Place exactly these bombs: ((row, col), turns).
    Manual(Vec<((usize, usize), u8)>),
}

/// Setup flow state machine.
#[derive(Debug, Clone)]
pub struct SetupScreen {
    stage: SetupStage,
    cursor: (usize, usize),
    /// Selected tiles in selection order, no duplicates.
    selected: Vec<(usize, usize)>,
    /// Turn counts assigned so far, parallel to `selected`.
    turns: Vec<u8>,
    /// Set when the prompt was answered "no".
    was_random: bool,
}

impl SetupScreen {
    pub fn new() -> Self {
        Self {
            stage: SetupStage::Prompt,
            cursor: (GRID_ROWS / 2, GRID_COLS / 2),
            selected: Vec::new(),
            turns: Vec::new(),
            was_random: false,
        }
    }

    pub fn stage(&self) -> SetupStage {
        self.stage
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn selected(&self) -> &[(usize, usize)] {
        &self.selected
    }

    /// The finished choice, once the flow reaches [`SetupStage::Done`].
    pub fn choice(&self) -> Option<SetupChoice> {
        if self.stage != SetupStage::Done {
            return None;
        }
        if self.was_random {
            return Some(SetupChoice::Random);
        }
        Some(SetupChoice::Manual(
            self.selected
                .iter()
                .copied()
                .zip(self.turns.iter().copied())
                .collect(),
        ))
    }

    /// Feed one action into the flow. Invalid actions for the current stage
    /// are ignored.
    pub fn handle(&mut self, action: SetupAction, board: &Board) {
        match self.stage {
            SetupStage::Prompt => match action {
                SetupAction::Yes => self.stage = SetupStage::Placement,
                SetupAction::No => {
                    self.was_random = true;
                    self.stage = SetupStage::Done;
                }
                _ => {}
            },
            SetupStage::Placement => match action {
                SetupAction::MoveUp => self.cursor.0 = self.cursor.0.saturating_sub(1),
                SetupAction::MoveDown => self.cursor.0 = (self.cursor.0 + 1).min(GRID_ROWS - 1),
                SetupAction::MoveLeft => self.cursor.1 = self.cursor.1.saturating_sub(1),
                SetupAction::MoveRight => self.cursor.1 = (self.cursor.1 + 1).min(GRID_COLS - 1),
                SetupAction::Toggle => self.toggle(board),
                SetupAction::Confirm => {
                    if self.selected.is_empty() {
                        // No tiles selected: an empty manual placement.
                        self.stage = SetupStage::Done;
                    } else {
                        self.stage = SetupStage::TurnAssign;
                    }
                }
                _ => {}
            },
            SetupStage::TurnAssign => {
                if let SetupAction::Assign(turns) = action {
                    if (1..=MAX_INITIAL_TURNS).contains(&turns) {
                        self.turns.push(turns);
                        // Every placed bomb needs a turn count before the
                        // flow may finish.
                        if self.turns.len() == self.selected.len() {
                            self.stage = SetupStage::Done;
                        }
                    }
                }
            }
            SetupStage::Done => {}
        }
    }

    fn toggle(&mut self, board: &Board) {
        let (row, col) = self.cursor;
        if Board::is_protected(row, col) || board.is_wall(row, col) {
            return;
        }
        if let Some(i) = self.selected.iter().position(|&t| t == (row, col)) {
            self.selected.remove(i);
        } else {
            self.selected.push((row, col));
        }
    }

    /// Render the current stage.
    pub fn render(&self, board: &Board, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        match self.stage {
            SetupStage::Prompt => self.render_prompt(&mut fb),
            SetupStage::Placement | SetupStage::TurnAssign | SetupStage::Done => {
                self.render_grid(board, &mut fb)
            }
        }
        fb
    }

    fn render_prompt(&self, fb: &mut FrameBuffer) {
        let text = "Do you want to manually place bombs? (y/n)";
        let x = fb.width().saturating_sub(text.chars().count() as u16) / 2;
        let y = fb.height() / 2;
        fb.put_str(x, y, text, CellStyle::default().bold());
    }

    fn render_grid(&self, board: &Board, fb: &mut FrameBuffer) {
        let cell_w: u16 = 2;
        let frame_w = GRID_COLS as u16 * cell_w + 2;
        let frame_h = GRID_ROWS as u16 + 2;
        let start_x = fb.width().saturating_sub(frame_w) / 2;
        let start_y = fb.height().saturating_sub(frame_h + 2) / 2;

        fb.draw_border(start_x, start_y, frame_w, frame_h, CellStyle::default());

        let floor = CellStyle::new(Rgb::new(70, 70, 85), Rgb::new(25, 25, 35));
        let wall = CellStyle::new(Rgb::new(19, 17, 26), Rgb::new(60, 60, 70));
        let protected = CellStyle::new(Rgb::new(60, 120, 220), Rgb::new(25, 25, 35));
        let picked = CellStyle::new(Rgb::new(255, 180, 60), Rgb::new(25, 25, 35)).bold();
        let cursor = CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(230, 230, 230)).bold();

        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let mut ch = '·';
                let mut style = floor;
                if board.is_wall(row, col) {
                    ch = '█';
                    style = wall;
                } else if Board::is_protected(row, col) {
                    ch = '▣';
                    style = protected;
                }
                if let Some(i) = self.selected.iter().position(|&t| t == (row, col)) {
                    style = picked;
                    ch = match self.turns.get(i) {
                        Some(turns) => char::from(b'0' + turns),
                        None => '◆',
                    };
                }
                if self.stage == SetupStage::Placement && self.cursor == (row, col) {
                    style = cursor;
                } else if self.stage == SetupStage::TurnAssign
                    && self.selected.get(self.turns.len()) == Some(&(row, col))
                {
                    style = cursor;
                }

                let x = start_x + 1 + col as u16 * cell_w;
                let y = start_y + 1 + row as u16;
                fb.fill_rect(x, y, cell_w, 1, ch, style);
            }
        }

        let hint = match self.stage {
            SetupStage::Placement => "arrows move  space toggle  enter done",
            SetupStage::TurnAssign => "press 1-3 to set turns for the marked bomb",
            _ => "",
        };
        let hx = fb.width().saturating_sub(hint.chars().count() as u16) / 2;
        fb.put_str(hx, start_y + frame_h + 1, hint, CellStyle::default());
    }
}

impl Default for SetupScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirm(screen: &mut SetupScreen, board: &Board, actions: &[SetupAction]) {
        for &a in actions {
            screen.handle(a, board);
        }
    }

    #[test]
    fn test_decline_means_random() {
        let board = Board::empty();
        let mut screen = SetupScreen::new();
        screen.handle(SetupAction::No, &board);

        assert_eq!(screen.stage(), SetupStage::Done);
        assert_eq!(screen.choice(), Some(SetupChoice::Random));
    }

    #[test]
    fn test_manual_flow_produces_placements() {
        let board = Board::empty();
        let mut screen = SetupScreen::new();
        confirm(
            &mut screen,
            &board,
            &[
                SetupAction::Yes,
                SetupAction::Toggle,
                SetupAction::MoveRight,
                SetupAction::Toggle,
                SetupAction::Confirm,
                SetupAction::Assign(2),
                SetupAction::Assign(1),
            ],
        );

        let center = (GRID_ROWS / 2, GRID_COLS / 2);
        assert_eq!(screen.stage(), SetupStage::Done);
        assert_eq!(
            screen.choice(),
            Some(SetupChoice::Manual(vec![
                (center, 2),
                ((center.0, center.1 + 1), 1),
            ]))
        );
    }

    #[test]
    fn test_protected_and_wall_tiles_not_selectable() {
        let mut board = Board::empty();
        let center = (GRID_ROWS / 2, GRID_COLS / 2);
        board.set_tile(center.0, center.1, tui_bomber_types::TileKind::Wall);

        let mut screen = SetupScreen::new();
        screen.handle(SetupAction::Yes, &board);
        // Cursor starts on the walled center tile.
        screen.handle(SetupAction::Toggle, &board);
        assert!(screen.selected().is_empty());

        // Walk to the protected corner and try there.
        for _ in 0..GRID_ROWS {
            screen.handle(SetupAction::MoveUp, &board);
            screen.handle(SetupAction::MoveLeft, &board);
        }
        assert_eq!(screen.cursor(), (0, 0));
        screen.handle(SetupAction::Toggle, &board);
        assert!(screen.selected().is_empty());
    }

    #[test]
    fn test_toggle_twice_deselects() {
        let board = Board::empty();
        let mut screen = SetupScreen::new();
        confirm(
            &mut screen,
            &board,
            &[SetupAction::Yes, SetupAction::Toggle, SetupAction::Toggle],
        );
        assert!(screen.selected().is_empty());
    }

    #[test]
    fn test_all_turns_required_before_done() {
        let board = Board::empty();
        let mut screen = SetupScreen::new();
        confirm(
            &mut screen,
            &board,
            &[
                SetupAction::Yes,
                SetupAction::Toggle,
                SetupAction::MoveDown,
                SetupAction::Toggle,
                SetupAction::Confirm,
                SetupAction::Assign(3),
            ],
        );

        // One of two bombs assigned: not done yet, no choice available.
        assert_eq!(screen.stage(), SetupStage::TurnAssign);
        assert_eq!(screen.choice(), None);

        // Out-of-range digits are ignored.
        screen.handle(SetupAction::Assign(MAX_INITIAL_TURNS + 1), &board);
        assert_eq!(screen.stage(), SetupStage::TurnAssign);

        screen.handle(SetupAction::Assign(1), &board);
        assert_eq!(screen.stage(), SetupStage::Done);
    }

    #[test]
    fn test_cursor_clamps_to_grid() {
        let board = Board::empty();
        let mut screen = SetupScreen::new();
        screen.handle(SetupAction::Yes, &board);
        for _ in 0..GRID_ROWS * 2 {
            screen.handle(SetupAction::MoveDown, &board);
            screen.handle(SetupAction::MoveRight, &board);
        }
        assert_eq!(screen.cursor(), (GRID_ROWS - 1, GRID_COLS - 1));
    }

    #[test]
    fn test_empty_manual_selection_is_empty_placement() {
        let board = Board::empty();
        let mut screen = SetupScreen::new();
        confirm(&mut screen, &board, &[SetupAction::Yes, SetupAction::Confirm]);
        assert_eq!(screen.choice(), Some(SetupChoice::Manual(vec![])));
    }

    #[test]
    fn test_prompt_renders_question() {
        let board = Board::empty();
        let screen = SetupScreen::new();
        let fb = screen.render(&board, Viewport::new(60, 20));
        let row: String = (0..fb.width())
            .filter_map(|x| fb.get(x, fb.height() / 2).map(|c| c.ch))
            .collect();
        assert!(row.contains("manually place bombs"));
    }
}
