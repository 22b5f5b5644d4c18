//! Grid state management for the generation pipeline
//!
//! Owns the 2D cell array every later stage mutates. Coordinates are `[x, y]`
//! pairs with `0 <= x < width` and `0 <= y < height`; out-of-range access
//! through the accessors is a no-op rather than a panic.

use ndarray::Array2;
use rand::Rng;
use rand::rngs::StdRng;

/// State of a single grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Solid, non-traversable cell
    Wall,
    /// Carved, traversable cell
    Open,
}

/// Rectangular grid of cell states owned by one generation run
///
/// All pipeline stages mutate this structure in place; the border framing
/// stage produces a fresh, larger grid as the final output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    cells: Array2<Cell>,
    dimensions: (usize, usize),
}

impl GridState {
    /// Create a grid of the given dimensions with every cell set to `Wall`
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((width, height), Cell::Wall),
            dimensions: (width, height),
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.dimensions.0
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.dimensions.1
    }

    /// Check whether a position lies inside the grid
    pub const fn in_bounds(&self, pos: [i32; 2]) -> bool {
        pos[0] >= 0
            && pos[0] < self.dimensions.0 as i32
            && pos[1] >= 0
            && pos[1] < self.dimensions.1 as i32
    }

    /// Check whether a position lies inside the interior, excluding the
    /// outermost one-cell frame reserved for later bordering
    pub const fn in_interior(&self, pos: [i32; 2]) -> bool {
        pos[0] >= 1
            && pos[0] < self.dimensions.0 as i32 - 1
            && pos[1] >= 1
            && pos[1] < self.dimensions.1 as i32 - 1
    }

    /// Read the cell at a position, or `None` when out of bounds
    pub fn get(&self, pos: [i32; 2]) -> Option<Cell> {
        if self.in_bounds(pos) {
            self.cells.get([pos[0] as usize, pos[1] as usize]).copied()
        } else {
            None
        }
    }

    /// Test whether the cell at a position is `Open`
    ///
    /// Out-of-bounds positions read as not open.
    pub fn is_open(&self, pos: [i32; 2]) -> bool {
        self.get(pos) == Some(Cell::Open)
    }

    /// Write the cell at a position; out-of-bounds writes are ignored
    pub fn set(&mut self, pos: [i32; 2], cell: Cell) {
        if self.in_bounds(pos) {
            if let Some(slot) = self.cells.get_mut([pos[0] as usize, pos[1] as usize]) {
                *slot = cell;
            }
        }
    }

    /// Count walls among the 8 neighbors of a position
    ///
    /// Out-of-bounds neighbors count as walls, biasing the smoothing rule
    /// toward enclosure at the grid edge.
    pub fn wall_neighbors(&self, pos: [i32; 2]) -> u32 {
        let mut count = 0;
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                match self.get([pos[0] + dx, pos[1] + dy]) {
                    Some(Cell::Open) => {}
                    Some(Cell::Wall) | None => count += 1,
                }
            }
        }
        count
    }

    /// Fill the grid from a baseline wall ratio
    ///
    /// The outermost ring is always `Wall`; each interior cell becomes `Wall`
    /// with probability `fill_percent`/100 and `Open` otherwise.
    pub fn random_fill(&mut self, fill_percent: u8, rng: &mut StdRng) {
        let (width, height) = self.dimensions;
        for x in 0..width {
            for y in 0..height {
                let on_edge = x == 0 || x == width - 1 || y == 0 || y == height - 1;
                let cell = if on_edge || rng.random_range(0..100) < u32::from(fill_percent) {
                    Cell::Wall
                } else {
                    Cell::Open
                };
                if let Some(slot) = self.cells.get_mut([x, y]) {
                    *slot = cell;
                }
            }
        }
    }

    /// Carve a filled disk of `Open` cells around a center position
    ///
    /// Includes every cell within `radius` squared Euclidean distance,
    /// clipped to the grid bounds.
    pub fn carve_disk(&mut self, center: [i32; 2], radius: i32) {
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.set([center[0] + dx, center[1] + dy], Cell::Open);
                }
            }
        }
    }

    /// Collect the positions of all `Open` cells
    ///
    /// Exposed for placement collaborators that sample spawn positions from
    /// the finished grid.
    pub fn open_cells(&self) -> Vec<[i32; 2]> {
        let mut open = Vec::new();
        for ((x, y), cell) in self.cells.indexed_iter() {
            if *cell == Cell::Open {
                open.push([x as i32, y as i32]);
            }
        }
        open
    }
}
