//! Cellular-automaton smoothing turning raw fill noise into contiguous shapes
//!
//! Each pass recomputes every cell from its 8-neighbor wall count in the
//! pre-pass state: more than 4 walls encloses the cell, fewer than 4 opens it,
//! exactly 4 leaves it unchanged. Out-of-bounds neighbors count as walls, so
//! the rule biases toward enclosure at the grid edge.

use crate::grid::state::{Cell, GridState};

/// Apply a fixed number of smoothing passes to the grid in place
pub fn apply_smoothing(grid: &mut GridState, passes: usize) {
    for _ in 0..passes {
        smooth_pass(grid);
    }
}

/// Apply one simultaneous smoothing pass
///
/// Reads neighbor counts from a snapshot of the pre-pass state, so a cell's
/// transition is never influenced by cells already updated in the same pass.
pub fn smooth_pass(grid: &mut GridState) {
    let snapshot = grid.clone();

    for x in 0..grid.width() as i32 {
        for y in 0..grid.height() as i32 {
            let walls = snapshot.wall_neighbors([x, y]);
            if walls > 4 {
                grid.set([x, y], Cell::Wall);
            } else if walls < 4 {
                grid.set([x, y], Cell::Open);
            }
        }
    }
}
