//! Bomb entity and live-collection lookups.

use tui_bomber_types::{BombKind, Position};

/// Identifies a bomb for the lifetime of the session.
///
/// Detonation-queue entries are keyed by id rather than position so that a
/// tile reused after a chain removal can never satisfy a stale entry.
pub type BombId = u32;

/// One live bomb on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bomb {
    pub id: BombId,
    /// Tile-aligned pixel position.
    pub pos: Position,
    pub kind: BombKind,
    /// Chain hits this bomb absorbs before it becomes a live detonator.
    /// Only meaningful for `Initial` bombs; always 0 for `Player` bombs.
    pub turns_remaining: u8,
}

impl Bomb {
    /// A bomb dropped by a player action.
    pub fn player(id: BombId, pos: Position) -> Self {
        Self {
            id,
            pos,
            kind: BombKind::Player,
            turns_remaining: 0,
        }
    }

    /// A pre-placed obstacle bomb with a turn countdown.
    pub fn initial(id: BombId, pos: Position, turns: u8) -> Self {
        Self {
            id,
            pos,
            kind: BombKind::Initial,
            turns_remaining: turns,
        }
    }
}

/// Index of the live bomb at `pos`, if any.
///
/// At most one bomb ever occupies a tile, so the first hit is the only hit.
pub fn bomb_at(bombs: &[Bomb], pos: Position) -> Option<usize> {
    bombs.iter().position(|b| b.pos == pos)
}

/// Index of the live bomb with the given id, if still live.
pub fn bomb_by_id(bombs: &[Bomb], id: BombId) -> Option<usize> {
    bombs.iter().position(|b| b.id == id)
}

/// Whether any live bomb sits exactly one tile away (cardinal) from `pos`.
///
/// Used by the chain propagator to decide whether a decremented Initial bomb
/// catches the chain; always evaluated over the live set as currently mutated.
pub fn has_neighboring_bomb(pos: Position, bombs: &[Bomb]) -> bool {
    pos.neighbors()
        .iter()
        .any(|n| bombs.iter().any(|b| b.pos == *n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_bomber_types::TILE_SIZE;

    #[test]
    fn test_bomb_at() {
        let bombs = vec![
            Bomb::player(1, Position::new(0, 0)),
            Bomb::initial(2, Position::new(TILE_SIZE, 0), 2),
        ];
        assert_eq!(bomb_at(&bombs, Position::new(0, 0)), Some(0));
        assert_eq!(bomb_at(&bombs, Position::new(TILE_SIZE, 0)), Some(1));
        assert_eq!(bomb_at(&bombs, Position::new(0, TILE_SIZE)), None);
    }

    #[test]
    fn test_has_neighboring_bomb_cardinal_only() {
        let center = Position::new(5 * TILE_SIZE, 5 * TILE_SIZE);
        let right = Position::new(6 * TILE_SIZE, 5 * TILE_SIZE);
        let diagonal = Position::new(6 * TILE_SIZE, 6 * TILE_SIZE);
        let far = Position::new(7 * TILE_SIZE, 5 * TILE_SIZE);

        assert!(has_neighboring_bomb(center, &[Bomb::player(1, right)]));
        assert!(!has_neighboring_bomb(center, &[Bomb::player(1, diagonal)]));
        assert!(!has_neighboring_bomb(center, &[Bomb::player(1, far)]));
    }

    #[test]
    fn test_has_neighboring_bomb_does_not_count_self() {
        let pos = Position::new(0, 0);
        assert!(!has_neighboring_bomb(pos, &[Bomb::player(1, pos)]));
    }
}
