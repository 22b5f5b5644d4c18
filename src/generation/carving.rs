//! Clearing placement and probabilistic flood-fill carving
//!
//! Clearing centers are chosen through a coarse 5x5 occupancy partition of the
//! map, keeping clearings spatially separated. Each placed clearing is carved
//! by a layered breadth-first traversal whose open probability decays with
//! distance from the center, producing a guaranteed solid core with a fraying
//! probabilistic edge.

use crate::grid::cellset::CellSet;
use crate::grid::state::{Cell, GridState};
use crate::io::configuration::{PLACEMENT_ATTEMPTS, PLACEMENT_DIVISIONS};
use ndarray::Array2;
use rand::Rng;
use rand::rngs::StdRng;
use std::collections::VecDeque;

/// Coarse occupancy mask partitioning the map into placement cells
///
/// Invariant: each coarse cell hosts at most one clearing center.
#[derive(Debug, Clone)]
pub struct PlacementGrid {
    occupied: Array2<bool>,
}

impl Default for PlacementGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementGrid {
    /// Create an empty placement grid
    pub fn new() -> Self {
        Self {
            occupied: Array2::from_elem((PLACEMENT_DIVISIONS, PLACEMENT_DIVISIONS), false),
        }
    }

    /// Test whether a coarse cell already hosts a clearing
    pub fn is_occupied(&self, coarse: [usize; 2]) -> bool {
        self.occupied.get(coarse).copied().unwrap_or(true)
    }

    /// Mark a coarse cell as hosting a clearing
    pub fn mark_occupied(&mut self, coarse: [usize; 2]) {
        if let Some(slot) = self.occupied.get_mut(coarse) {
            *slot = true;
        }
    }

    /// Test whether a coarse cell and all its Chebyshev-distance-1 neighbors
    /// are unoccupied
    pub fn is_isolated(&self, coarse: [usize; 2]) -> bool {
        for dx in -1..=1_i32 {
            for dy in -1..=1_i32 {
                let x = coarse[0] as i32 + dx;
                let y = coarse[1] as i32 + dy;
                if x < 0 || y < 0 {
                    continue;
                }
                let inside = (x as usize) < PLACEMENT_DIVISIONS && (y as usize) < PLACEMENT_DIVISIONS;
                if inside && self.is_occupied([x as usize, y as usize]) {
                    return false;
                }
            }
        }
        true
    }

    /// Find any unoccupied coarse cell, scanning in row-major order
    pub fn first_vacant(&self) -> Option<[usize; 2]> {
        self.occupied
            .indexed_iter()
            .find(|&(_, &taken)| !taken)
            .map(|((x, y), _)| [x, y])
    }
}

/// Parameters of the probabilistic flood-fill carve
#[derive(Debug, Clone, Copy)]
pub struct CarveParams {
    /// BFS layers that are always carved open
    pub guaranteed_layers: usize,
    /// Per-layer multiplier applied to the open probability past the
    /// guaranteed zone, in `[0, 1]`
    pub probability_decay_rate: f64,
    /// Layer beyond which the traversal stops expanding
    pub max_layer: usize,
}

/// Midpoint of a coarse placement cell in fine-grid coordinates
pub const fn coarse_cell_center(coarse: [usize; 2], width: usize, height: usize) -> [i32; 2] {
    let cell_width = width / PLACEMENT_DIVISIONS;
    let cell_height = height / PLACEMENT_DIVISIONS;
    [
        (coarse[0] * cell_width + cell_width / 2) as i32,
        (coarse[1] * cell_height + cell_height / 2) as i32,
    ]
}

/// Coarse placement cell containing a fine-grid position
pub const fn coarse_cell_of(pos: [i32; 2], width: usize, height: usize) -> [usize; 2] {
    let cell_width = width / PLACEMENT_DIVISIONS;
    let cell_height = height / PLACEMENT_DIVISIONS;
    let mut x = pos[0] as usize / cell_width;
    let mut y = pos[1] as usize / cell_height;
    if x >= PLACEMENT_DIVISIONS {
        x = PLACEMENT_DIVISIONS - 1;
    }
    if y >= PLACEMENT_DIVISIONS {
        y = PLACEMENT_DIVISIONS - 1;
    }
    [x, y]
}

/// Outcome of the clearing placement search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A coarse cell satisfying the adjacency constraint was found
    Isolated([i32; 2]),
    /// The attempt budget ran out; an arbitrary unoccupied cell was taken
    /// regardless of adjacency
    Relaxed([i32; 2]),
    /// No coarse cell remains unoccupied; the clearing cannot be placed
    Exhausted,
}

/// Select and occupy a coarse cell for a new clearing
///
/// Makes up to [`PLACEMENT_ATTEMPTS`] randomized draws for a cell that is not
/// Chebyshev-adjacent to any occupied cell; if none succeeds, falls back to an
/// arbitrary unoccupied cell regardless of adjacency. Exhaustion is a soft
/// failure reported to the caller, not a fatal condition.
pub fn find_clearing_location(
    placement: &mut PlacementGrid,
    grid: &GridState,
    rng: &mut StdRng,
) -> Placement {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let coarse = [
            rng.random_range(0..PLACEMENT_DIVISIONS),
            rng.random_range(0..PLACEMENT_DIVISIONS),
        ];
        if placement.is_isolated(coarse) {
            placement.mark_occupied(coarse);
            return Placement::Isolated(coarse_cell_center(coarse, grid.width(), grid.height()));
        }
    }

    let Some(coarse) = placement.first_vacant() else {
        return Placement::Exhausted;
    };
    placement.mark_occupied(coarse);
    Placement::Relaxed(coarse_cell_center(coarse, grid.width(), grid.height()))
}

/// Carve a clearing by probabilistic breadth-first flood fill
///
/// Cells within `guaranteed_layers` BFS layers of the center are forced open;
/// beyond that each visited cell opens with a probability that decays by
/// `probability_decay_rate` per layer. The traversal stops expanding past
/// `max_layer` and never crosses the outermost one-cell frame, so a margin
/// remains for later bordering. Visited-set membership bounds the traversal
/// regardless of grid size.
pub fn carve_clearing(
    grid: &mut GridState,
    center: [i32; 2],
    params: &CarveParams,
    rng: &mut StdRng,
) {
    let mut visited = CellSet::new(grid.width(), grid.height());
    let mut queue = VecDeque::new();

    visited.insert(center);
    queue.push_back((center, 0_usize));

    while let Some((cell, layer)) = queue.pop_front() {
        let open = if layer <= params.guaranteed_layers {
            true
        } else {
            let decayed = params
                .probability_decay_rate
                .powi((layer - params.guaranteed_layers) as i32);
            rng.random::<f64>() < decayed
        };
        if open && grid.in_interior(cell) {
            grid.set(cell, Cell::Open);
        }

        if layer >= params.max_layer {
            continue;
        }

        for offset in [[0, 1], [1, 0], [0, -1], [-1, 0]] {
            let neighbor = [cell[0] + offset[0], cell[1] + offset[1]];
            if grid.in_interior(neighbor) && !visited.contains(neighbor) {
                visited.insert(neighbor);
                queue.push_back((neighbor, layer + 1));
            }
        }
    }
}
