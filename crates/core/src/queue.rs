//! Detonation queue - turn-based pacing for player bombs.
//!
//! Decouples "bomb is placed" from "bomb detonates" by a count threshold
//! rather than wall-clock timing: once at least
//! [`DETONATION_QUEUE_THRESHOLD`] player bombs are pending, the oldest one
//! detonates, producing a rolling delay regardless of frame rate.

use std::collections::VecDeque;

use tui_bomber_types::DETONATION_QUEUE_THRESHOLD;

use crate::bomb::{bomb_by_id, Bomb, BombId};

/// FIFO of live player-bomb ids in placement order.
///
/// A bomb appears at most once. Entries whose bomb was already removed by a
/// chain reaction are stale; they are pruned rather than detonated, and they
/// do not count toward the threshold.
#[derive(Debug, Clone, Default)]
pub struct DetonationQueue {
    entries: VecDeque<BombId>,
}

impl DetonationQueue {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Append a freshly placed player bomb.
    pub fn push(&mut self, id: BombId) {
        debug_assert!(!self.entries.contains(&id));
        self.entries.push_back(id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop entries whose bomb is no longer live.
    pub fn prune_stale(&mut self, bombs: &[Bomb]) {
        self.entries.retain(|id| bomb_by_id(bombs, *id).is_some());
    }

    /// Pop the oldest pending bomb if the threshold is met.
    ///
    /// Stale entries are pruned first so the threshold counts only live
    /// bombs. Returns the id of the bomb to detonate, at most one per call.
    pub fn pop_eligible(&mut self, bombs: &[Bomb]) -> Option<BombId> {
        self.prune_stale(bombs);
        if self.entries.len() >= DETONATION_QUEUE_THRESHOLD {
            self.entries.pop_front()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_bomber_types::Position;

    fn player_bombs(count: u32) -> Vec<Bomb> {
        (0..count)
            .map(|i| Bomb::player(i, Position::from_tile(0, i as usize)))
            .collect()
    }

    #[test]
    fn test_below_threshold_pops_nothing() {
        let bombs = player_bombs(2);
        let mut queue = DetonationQueue::new();
        queue.push(0);
        queue.push(1);

        assert_eq!(queue.pop_eligible(&bombs), None);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_threshold_pops_oldest_only() {
        let bombs = player_bombs(3);
        let mut queue = DetonationQueue::new();
        for id in 0..3 {
            queue.push(id);
        }

        assert_eq!(queue.pop_eligible(&bombs), Some(0));
        // Exactly one per call; the rest stay queued.
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop_eligible(&bombs), None);
    }

    #[test]
    fn test_stale_entries_do_not_count_or_detonate() {
        // Bomb 1 was chain-removed; only 0 and 2 are live.
        let mut bombs = player_bombs(3);
        bombs.remove(1);

        let mut queue = DetonationQueue::new();
        for id in 0..3 {
            queue.push(id);
        }

        // Two live pending bombs: below threshold, and the stale entry is gone.
        assert_eq!(queue.pop_eligible(&bombs), None);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_stale_head_skipped() {
        let mut bombs = player_bombs(4);
        bombs.remove(0);

        let mut queue = DetonationQueue::new();
        for id in 0..4 {
            queue.push(id);
        }

        // Head (id 0) is stale; the three live bombs meet the threshold and
        // the oldest live one pops.
        assert_eq!(queue.pop_eligible(&bombs), Some(1));
    }
}
