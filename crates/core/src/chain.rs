//! Chain-reaction propagator.
//!
//! Detonating a bomb computes the full connected set of bombs that go up in
//! the same chain: a breadth-first traversal over bomb positions with a work
//! queue and a processed-set keyed by position. Walls are irrelevant here;
//! only bomb-to-bomb grid adjacency matters.

use std::collections::{HashSet, VecDeque};

use arrayvec::ArrayVec;

use tui_bomber_types::{BombKind, Position};

use crate::bomb::{bomb_at, has_neighboring_bomb, Bomb};
use crate::explosion::Explosion;

/// Detonate the bomb at `origin`, cascading into neighbors.
///
/// Removes every detonated bomb from `bombs` and appends one explosion marker
/// per detonated position to `explosions`, in removal order. Returns the
/// number of bombs removed. Detonating a position holding no live bomb is a
/// no-op.
///
/// Per-kind rules while traversing:
/// - A `Player` neighbor detonates outright and relays the chain.
/// - An `Initial` neighbor with turns left absorbs the hit: its countdown is
///   decremented first, and only then, if it still has a live neighbor, is it
///   marked processed so it cannot absorb a second hit in this call. It stays
///   live and never relays the chain.
/// - An `Initial` neighbor out of turns detonates like a `Player` bomb.
///
/// Only positions of bombs that actually detonated are expanded, so the chain
/// can never skip past a surviving bomb to reach something behind it. The
/// traversal terminates because the processed-set only grows and no position
/// is expanded twice.
pub fn detonate(
    origin: Position,
    bombs: &mut Vec<Bomb>,
    explosions: &mut Vec<Explosion>,
) -> usize {
    let Some(idx) = bomb_at(bombs, origin) else {
        return 0;
    };
    bombs.swap_remove(idx);
    explosions.push(Explosion::new(origin));
    let mut removed = 1;

    let mut work: VecDeque<Position> = VecDeque::new();
    let mut processed: HashSet<Position> = HashSet::new();
    work.push_back(origin);
    processed.insert(origin);

    while let Some(pos) = work.pop_front() {
        // Snapshot the neighbor hits first; the live set mutates as we go.
        let hits: ArrayVec<Position, 4> = pos
            .neighbors()
            .into_iter()
            .filter(|n| !processed.contains(n))
            .collect();

        for neighbor in hits {
            let Some(idx) = bomb_at(bombs, neighbor) else {
                continue;
            };

            match bombs[idx].kind {
                BombKind::Player => {
                    bombs.swap_remove(idx);
                    explosions.push(Explosion::new(neighbor));
                    removed += 1;
                    processed.insert(neighbor);
                    work.push_back(neighbor);
                }
                BombKind::Initial => {
                    if bombs[idx].turns_remaining > 0 {
                        // Decrement first, then test adjacency over the live
                        // set as currently mutated. A survivor with a live
                        // neighbor has caught the chain and is marked so it
                        // is not decremented again this call; one without a
                        // neighbor stays unmarked and may absorb another hit
                        // via a different path.
                        bombs[idx].turns_remaining -= 1;
                        if has_neighboring_bomb(neighbor, bombs) {
                            processed.insert(neighbor);
                        }
                    } else {
                        bombs.swap_remove(idx);
                        explosions.push(Explosion::new(neighbor));
                        removed += 1;
                        processed.insert(neighbor);
                        work.push_back(neighbor);
                    }
                }
            }
        }
    }

    removed
}
