//! Slot layout for screens added through the batch dialog.
//!
//! DESIGN
//! ======
//! New pages line up along a fixed horizontal offset pattern from the current
//! node count, so each batch lands to the right of everything already on the
//! canvas instead of stacking at the origin. Files come first, then blank
//! placeholders, matching the order the batch is persisted in.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// X coordinate of slot 0.
pub const BATCH_BASE_X: f64 = 100.0;

/// Horizontal spacing between consecutive slots.
pub const BATCH_SLOT_SPACING: f64 = 60.0;

/// Y coordinate shared by every batch-created node.
pub const BATCH_ROW_Y: f64 = 100.0;

/// One page the batch will create, in creation order.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedScreen {
    pub title: String,
    pub order: i64,
    pub x: f64,
    pub y: f64,
}

/// Canvas position of the `slot`-th node counted across the whole canvas.
#[must_use]
pub fn slot_position(slot: usize) -> (f64, f64) {
    #[allow(clippy::cast_precision_loss)]
    let x = BATCH_BASE_X + BATCH_SLOT_SPACING * slot as f64;
    (x, BATCH_ROW_Y)
}

/// Lay out a batch of uploads plus blank placeholders after `existing_nodes`
/// already-placed nodes. Blank titles are numbered by their canvas-wide slot,
/// continuing the sequence from the uploads before them.
#[must_use]
pub fn plan_screens(file_names: &[String], blank_count: usize, existing_nodes: usize) -> Vec<PlannedScreen> {
    let mut planned = Vec::with_capacity(file_names.len() + blank_count);

    for name in file_names {
        let slot = existing_nodes + planned.len();
        let (x, y) = slot_position(slot);
        planned.push(PlannedScreen {
            title: name.clone(),
            order: next_order(slot),
            x,
            y,
        });
    }
    for _ in 0..blank_count {
        let slot = existing_nodes + planned.len();
        let (x, y) = slot_position(slot);
        planned.push(PlannedScreen {
            title: format!("Blank Screen {}", slot + 1),
            order: next_order(slot),
            x,
            y,
        });
    }
    planned
}

#[allow(clippy::cast_possible_wrap)]
fn next_order(slot: usize) -> i64 {
    slot as i64 + 1
}
