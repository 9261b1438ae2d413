//! Player movement.
//!
//! Players move one tile at a time: an accepted move sets a new tile-aligned
//! target, and the sprite glides toward it a few pixels per tick. New input is
//! only accepted while the player rests on its target.

use tui_bomber_types::{GameAction, Position, HEIGHT, PLAYER_SIZE, PLAYER_SPEED, TILE_SIZE, WIDTH};

use crate::board::Board;

/// One player on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    /// Current pixel position (mid-glide values are not tile-aligned).
    pub pos: Position,
    /// Tile-aligned destination.
    pub target: Position,
}

impl Player {
    pub fn new(start: Position) -> Self {
        Self {
            pos: start,
            target: start,
        }
    }

    /// Whether the player is resting on its target tile.
    pub fn at_target(&self) -> bool {
        self.pos == self.target
    }

    /// Try to accept a movement action.
    ///
    /// Ignored while mid-glide. The new target must stay on the board and its
    /// bounding box must not overlap a wall; rejected moves are silent no-ops.
    pub fn try_move(&mut self, action: GameAction, board: &Board) {
        if !self.at_target() {
            return;
        }

        let mut target = self.target;
        match action {
            GameAction::MoveLeft if target.x > 0 => target.x -= TILE_SIZE,
            GameAction::MoveRight if target.x < WIDTH - TILE_SIZE => target.x += TILE_SIZE,
            GameAction::MoveUp if target.y > 0 => target.y -= TILE_SIZE,
            GameAction::MoveDown if target.y < HEIGHT - TILE_SIZE => target.y += TILE_SIZE,
            _ => return,
        }

        if board.rect_hits_wall(target.x, target.y, PLAYER_SIZE, PLAYER_SIZE) {
            return;
        }
        self.target = target;
    }

    /// Glide toward the target by up to [`PLAYER_SPEED`] pixels on each axis.
    pub fn glide(&mut self) {
        self.pos.x = step_toward(self.pos.x, self.target.x);
        self.pos.y = step_toward(self.pos.y, self.target.y);
    }
}

fn step_toward(current: i32, target: i32) -> i32 {
    if current < target {
        (current + PLAYER_SPEED).min(target)
    } else if current > target {
        (current - PLAYER_SPEED).max(target)
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_bomber_types::TileKind;

    #[test]
    fn test_move_sets_target_and_glide_reaches_it() {
        let board = Board::empty();
        let mut player = Player::new(Position::new(0, 0));

        player.try_move(GameAction::MoveRight, &board);
        assert_eq!(player.target, Position::new(TILE_SIZE, 0));
        assert!(!player.at_target());

        // TILE_SIZE / PLAYER_SPEED ticks to arrive.
        for _ in 0..(TILE_SIZE / PLAYER_SPEED) {
            player.glide();
        }
        assert!(player.at_target());
        assert_eq!(player.pos, Position::new(TILE_SIZE, 0));
    }

    #[test]
    fn test_no_new_target_while_gliding() {
        let board = Board::empty();
        let mut player = Player::new(Position::new(0, 0));

        player.try_move(GameAction::MoveRight, &board);
        player.glide();
        player.try_move(GameAction::MoveDown, &board);
        assert_eq!(player.target, Position::new(TILE_SIZE, 0));
    }

    #[test]
    fn test_walls_block_movement() {
        let mut board = Board::empty();
        board.set_tile(0, 1, TileKind::Wall);
        let mut player = Player::new(Position::new(0, 0));

        player.try_move(GameAction::MoveRight, &board);
        assert_eq!(player.target, Position::new(0, 0));
    }

    #[test]
    fn test_board_edges_clamp() {
        let board = Board::empty();
        let mut player = Player::new(Position::new(0, 0));

        player.try_move(GameAction::MoveLeft, &board);
        player.try_move(GameAction::MoveUp, &board);
        assert_eq!(player.target, Position::new(0, 0));

        let mut far = Player::new(Position::new(WIDTH - TILE_SIZE, HEIGHT - TILE_SIZE));
        far.try_move(GameAction::MoveRight, &board);
        far.try_move(GameAction::MoveDown, &board);
        assert_eq!(far.target, Position::new(WIDTH - TILE_SIZE, HEIGHT - TILE_SIZE));
    }
}
