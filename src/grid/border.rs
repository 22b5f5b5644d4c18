//! Final framing stage wrapping the generated grid in a one-cell wall border

use crate::grid::state::{Cell, GridState};

/// Produce a `(width + 2, height + 2)` grid with the input copied into the
/// interior and every cell of the outer ring set to `Wall`
///
/// This is the last pipeline stage; its output is the generation result.
/// Interior coordinates shift by one in each axis, so positions recorded
/// against the unframed grid must be translated with [`into_framed`].
pub fn frame_with_border(grid: &GridState) -> GridState {
    let mut framed = GridState::new(grid.width() + 2, grid.height() + 2);

    for x in 0..grid.width() as i32 {
        for y in 0..grid.height() as i32 {
            if let Some(cell) = grid.get([x, y]) {
                if cell == Cell::Open {
                    framed.set(into_framed([x, y]), Cell::Open);
                }
            }
        }
    }

    framed
}

/// Translate a position from the unframed grid into the bordered frame
pub const fn into_framed(pos: [i32; 2]) -> [i32; 2] {
    [pos[0] + 1, pos[1] + 1]
}
