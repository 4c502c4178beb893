//! Trailing-edge position debouncing keyed by node id.
//!
//! DESIGN
//! ======
//! Every drag emits a stream of position events per node. Persisting each one
//! would flood the API, so writes coalesce: each event records the latest
//! coordinates and bumps a per-node generation counter. A timer armed at event
//! time settles only if its generation is still current when it fires, which
//! makes every earlier timer for the same node a no-op. The net effect is one
//! remote write per node per quiet period, carrying only the final position.
//!
//! The structure itself is pure bookkeeping; arming the timer and issuing the
//! write happen at the call site, which keeps this natively testable.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::collections::HashMap;

/// Quiet period before a node's latest position is persisted.
pub const POSITION_DEBOUNCE_MS: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingPosition {
    generation: u64,
    x: f64,
    y: f64,
}

/// Last-value-wins pending position per node id.
#[derive(Clone, Debug, Default)]
pub struct PositionDebouncer {
    pending: HashMap<String, PendingPosition>,
}

impl PositionDebouncer {
    /// Record the latest coordinates for `node_id` and return the generation
    /// the caller's timer must present back to [`Self::settle`].
    pub fn push(&mut self, node_id: &str, x: f64, y: f64) -> u64 {
        let generation = self.pending.get(node_id).map_or(0, |p| p.generation) + 1;
        self.pending
            .insert(node_id.to_owned(), PendingPosition { generation, x, y });
        generation
    }

    /// Claim the pending position for `node_id` if `generation` is still the
    /// latest one. Superseded timers get `None` and must do nothing.
    pub fn settle(&mut self, node_id: &str, generation: u64) -> Option<(f64, f64)> {
        match self.pending.get(node_id) {
            Some(p) if p.generation == generation => {
                let coords = (p.x, p.y);
                self.pending.remove(node_id);
                Some(coords)
            }
            _ => None,
        }
    }

    /// Drop every pending write. Used when the canvas view closes.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Nodes with a write still waiting out the quiet period.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
