//! Explosion markers.
//!
//! Ephemeral records created at each detonated position. They carry no
//! behavior beyond a TTL; the renderer draws them while they last.

use tui_bomber_types::{Position, EXPLOSION_TTL_MS};

/// One visible explosion at a detonated tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explosion {
    pub pos: Position,
    ttl_ms: i32,
}

impl Explosion {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            ttl_ms: EXPLOSION_TTL_MS as i32,
        }
    }

    pub fn expired(&self) -> bool {
        self.ttl_ms <= 0
    }
}

/// Age all markers by `dt_ms` and drop the expired ones.
pub fn update_explosions(explosions: &mut Vec<Explosion>, dt_ms: u32) {
    for e in explosions.iter_mut() {
        e.ttl_ms -= dt_ms as i32;
    }
    explosions.retain(|e| !e.expired());
}
