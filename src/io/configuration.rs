//! Generation constants and runtime configuration defaults

// Placement grid settings
/// Number of coarse placement divisions per axis
pub const PLACEMENT_DIVISIONS: usize = 5;
/// Randomized attempts before the placement search falls back to any
/// unoccupied coarse cell
pub const PLACEMENT_ATTEMPTS: usize = 100;

// Structural limits
/// Minimum interior dimension; below this the 5x5 placement grid degenerates
pub const MIN_MAP_DIMENSION: usize = 10;

// Spiral synthesis settings
/// Radial increment per spiral step, in cells
pub const SPIRAL_RADIUS_STEP: f64 = 1.0;

// Fallback path settings
/// Sample count per cubic Bezier segment of a fallback path
pub const PATH_SAMPLES_PER_SEGMENT: usize = 20;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: &str = "glade";
/// Default interior width
pub const DEFAULT_WIDTH: usize = 50;
/// Default interior height
pub const DEFAULT_HEIGHT: usize = 50;
/// Default baseline wall percentage before smoothing
pub const DEFAULT_FILL_PERCENT: u8 = 48;
/// Default number of cellular-automaton passes
pub const DEFAULT_SMOOTHING_PASSES: usize = 3;
/// Default number of BFS layers carved unconditionally
pub const DEFAULT_GUARANTEED_LAYERS: usize = 8;
/// Default per-layer open-probability multiplier
pub const DEFAULT_PROBABILITY_DECAY_RATE: f64 = 0.7;
/// Default carving layer limit
pub const DEFAULT_MAX_LAYER: usize = 15;
/// Default number of secondary clearings beyond the primary one
pub const DEFAULT_REGION_COUNT: usize = 4;
/// Default inclusive spiral count range per clearing
pub const DEFAULT_SPIRAL_COUNT_RANGE: (usize, usize) = (3, 6);
/// Default inclusive spiral length range, in steps
pub const DEFAULT_SPIRAL_LENGTH_RANGE: (usize, usize) = (12, 30);
/// Default angular growth factor of the spiral walk
pub const DEFAULT_GROWTH_FACTOR: f64 = 0.035;
/// Default handle scaling of fallback path smoothing
pub const DEFAULT_PATH_CURVINESS: f64 = 0.5;
/// Default fallback path disk radius, in cells
pub const DEFAULT_PATH_THICKNESS: i32 = 2;

// PNG export palette
/// RGBA color of wall cells
pub const WALL_COLOR: [u8; 4] = [44, 66, 37, 255];
/// RGBA color of open cells
pub const OPEN_COLOR: [u8; 4] = [205, 192, 155, 255];
/// RGBA color marking clearing centers
pub const CLEARING_MARKER_COLOR: [u8; 4] = [168, 54, 40, 255];
