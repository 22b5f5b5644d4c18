//! Pipeline orchestration: per-run configuration, seeding, and stage ordering
//!
//! One generation run owns its entire state: the grid, the placement mask,
//! the clearing list, and a single seeded random sequence threaded through
//! every stage. Re-triggering generation builds everything fresh rather than
//! updating a previous run.

use crate::generation::carving::{self, CarveParams, Placement, PlacementGrid};
use crate::generation::connectivity::{self, PathParams};
use crate::generation::smoothing;
use crate::generation::spirals::{self, SpiralParams};
use crate::grid::border;
use crate::grid::state::GridState;
use crate::io::configuration::{
    DEFAULT_FILL_PERCENT, DEFAULT_GROWTH_FACTOR, DEFAULT_GUARANTEED_LAYERS, DEFAULT_HEIGHT,
    DEFAULT_MAX_LAYER, DEFAULT_PATH_CURVINESS, DEFAULT_PATH_THICKNESS,
    DEFAULT_PROBABILITY_DECAY_RATE, DEFAULT_REGION_COUNT, DEFAULT_SEED, DEFAULT_SMOOTHING_PASSES,
    DEFAULT_SPIRAL_COUNT_RANGE, DEFAULT_SPIRAL_LENGTH_RANGE, DEFAULT_WIDTH, MIN_MAP_DIMENSION,
    PLACEMENT_DIVISIONS,
};
use crate::io::error::{GenerationWarning, Result, invalid_parameter};
use rand::{SeedableRng, rngs::StdRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Parameters of one generation request
///
/// Width and height describe the interior grid; the one-cell border is added
/// on top, so the finished map measures `(width + 2, height + 2)`.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Interior grid width
    pub width: usize,
    /// Interior grid height
    pub height: usize,
    /// Seed string folded into the random sequence state
    pub seed: String,
    /// Replace the seed with a time-derived value before each run
    pub use_random_seed: bool,
    /// Baseline wall percentage before smoothing, 0-100
    pub fill_percent: u8,
    /// Number of cellular-automaton smoothing passes
    pub smoothing_passes: usize,
    /// BFS layers carved unconditionally around each clearing center
    pub guaranteed_layers: usize,
    /// Per-layer open-probability multiplier past the guaranteed zone, 0-1
    pub probability_decay_rate: f64,
    /// Carving layer limit; must be at least `guaranteed_layers`
    pub max_layer: usize,
    /// Number of secondary clearings beyond the primary one
    pub region_count: usize,
    /// Inclusive spiral count range per clearing
    pub spiral_count_range: (usize, usize),
    /// Inclusive spiral length range, in steps
    pub spiral_length_range: (usize, usize),
    /// Angular growth factor of the spiral walk
    pub growth_factor: f64,
    /// Handle scaling of fallback path smoothing
    pub path_curviness: f64,
    /// Fallback path disk radius, in cells
    pub path_thickness: i32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: DEFAULT_SEED.to_string(),
            use_random_seed: false,
            fill_percent: DEFAULT_FILL_PERCENT,
            smoothing_passes: DEFAULT_SMOOTHING_PASSES,
            guaranteed_layers: DEFAULT_GUARANTEED_LAYERS,
            probability_decay_rate: DEFAULT_PROBABILITY_DECAY_RATE,
            max_layer: DEFAULT_MAX_LAYER,
            region_count: DEFAULT_REGION_COUNT,
            spiral_count_range: DEFAULT_SPIRAL_COUNT_RANGE,
            spiral_length_range: DEFAULT_SPIRAL_LENGTH_RANGE,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            path_curviness: DEFAULT_PATH_CURVINESS,
            path_thickness: DEFAULT_PATH_THICKNESS,
        }
    }
}

impl GenerationConfig {
    /// Validate all parameters up front
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is below [`MIN_MAP_DIMENSION`],
    /// `fill_percent` exceeds 100, `probability_decay_rate` is outside
    /// `[0, 1]`, `max_layer` is below `guaranteed_layers`, a range is
    /// inverted, or the spiral count range admits zero spirals
    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_MAP_DIMENSION {
            return Err(invalid_parameter(
                "width",
                &self.width,
                &format!("must be at least {MIN_MAP_DIMENSION}"),
            ));
        }
        if self.height < MIN_MAP_DIMENSION {
            return Err(invalid_parameter(
                "height",
                &self.height,
                &format!("must be at least {MIN_MAP_DIMENSION}"),
            ));
        }
        if self.fill_percent > 100 {
            return Err(invalid_parameter(
                "fill_percent",
                &self.fill_percent,
                &"must be between 0 and 100",
            ));
        }
        if !(0.0..=1.0).contains(&self.probability_decay_rate) {
            return Err(invalid_parameter(
                "probability_decay_rate",
                &self.probability_decay_rate,
                &"must be between 0 and 1",
            ));
        }
        if self.max_layer < self.guaranteed_layers {
            return Err(invalid_parameter(
                "max_layer",
                &self.max_layer,
                &format!(
                    "must be at least guaranteed_layers ({})",
                    self.guaranteed_layers
                ),
            ));
        }
        if self.spiral_count_range.0 > self.spiral_count_range.1 {
            return Err(invalid_parameter(
                "spiral_count_range",
                &format!("{:?}", self.spiral_count_range),
                &"minimum exceeds maximum",
            ));
        }
        if self.spiral_count_range.0 == 0 && self.spiral_count_range.1 == 0 {
            return Err(invalid_parameter(
                "spiral_count_range",
                &format!("{:?}", self.spiral_count_range),
                &"must admit at least one spiral",
            ));
        }
        if self.spiral_length_range.0 > self.spiral_length_range.1 {
            return Err(invalid_parameter(
                "spiral_length_range",
                &format!("{:?}", self.spiral_length_range),
                &"minimum exceeds maximum",
            ));
        }
        if self.path_thickness < 1 {
            return Err(invalid_parameter(
                "path_thickness",
                &self.path_thickness,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Finished output of one generation run
///
/// Both the grid and the clearing list are read-only snapshots for external
/// collaborators; clearing coordinates index into the bordered grid, with the
/// primary clearing first.
#[derive(Debug, Clone)]
pub struct GeneratedLevel {
    /// Bordered `(width + 2, height + 2)` tile grid
    pub grid: GridState,
    /// Ordered clearing center coordinates in the bordered frame
    pub clearings: Vec<[i32; 2]>,
    /// Non-fatal diagnostics accumulated during the run
    pub warnings: Vec<GenerationWarning>,
}

/// Generation pipeline executor
///
/// Holds the validated configuration; each [`generate`](Self::generate) call
/// runs the full pipeline to completion with freshly created per-run state.
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    config: GenerationConfig,
}

impl LevelGenerator {
    /// Create an executor from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Access the run configuration
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Run the full pipeline: fill, smooth, carve, spiral, connect, frame
    ///
    /// Synchronous and single-threaded; all loops are bounded by structural
    /// limits, so the run always terminates without external deadlines.
    pub fn generate(&self) -> GeneratedLevel {
        let mut rng = StdRng::seed_from_u64(self.resolve_seed());
        let mut warnings = Vec::new();

        let mut grid = GridState::new(self.config.width, self.config.height);
        grid.random_fill(self.config.fill_percent, &mut rng);
        smoothing::apply_smoothing(&mut grid, self.config.smoothing_passes);

        let clearings = self.carve_regions(&mut grid, &mut rng, &mut warnings);

        let spiral_params = SpiralParams {
            count_range: self.config.spiral_count_range,
            length_range: self.config.spiral_length_range,
            growth_factor: self.config.growth_factor,
        };
        for &center in &clearings {
            spirals::carve_spirals(&mut grid, center, &spiral_params, &mut rng);
        }

        let path_params = PathParams {
            curviness: self.config.path_curviness,
            thickness: self.config.path_thickness,
        };
        connectivity::connect_clearings(&mut grid, &clearings, &path_params, &mut rng);

        GeneratedLevel {
            grid: border::frame_with_border(&grid),
            clearings: clearings.iter().map(|&c| border::into_framed(c)).collect(),
            warnings,
        }
    }

    /// Place and carve the primary clearing followed by the secondary ones
    fn carve_regions(
        &self,
        grid: &mut GridState,
        rng: &mut StdRng,
        warnings: &mut Vec<GenerationWarning>,
    ) -> Vec<[i32; 2]> {
        let capacity = PLACEMENT_DIVISIONS * PLACEMENT_DIVISIONS;
        let requested = self.config.region_count + 1;
        if requested > capacity {
            warnings.push(GenerationWarning::RegionCapacityExceeded {
                requested,
                capacity,
            });
        }

        let carve_params = CarveParams {
            guaranteed_layers: self.config.guaranteed_layers,
            probability_decay_rate: self.config.probability_decay_rate,
            max_layer: self.config.max_layer,
        };

        let mut placement = PlacementGrid::new();
        let mut clearings = Vec::with_capacity(requested.min(capacity));

        for index in 0..requested {
            let center = match carving::find_clearing_location(&mut placement, grid, rng) {
                Placement::Isolated(center) => center,
                Placement::Relaxed(center) => {
                    warnings.push(GenerationWarning::PlacementRelaxed { index });
                    center
                }
                Placement::Exhausted => {
                    warnings.push(GenerationWarning::ClearingSkipped { index });
                    continue;
                }
            };
            carving::carve_clearing(grid, center, &carve_params, rng);
            clearings.push(center);
        }

        clearings
    }

    /// Resolve the seed value for this run
    ///
    /// A time-derived value replaces the configured seed string when
    /// `use_random_seed` is set; otherwise the string folds deterministically.
    fn resolve_seed(&self) -> u64 {
        if self.config.use_random_seed {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0x5eed_0000_0000_0000, |elapsed| elapsed.as_nanos() as u64)
        } else {
            fold_seed(&self.config.seed)
        }
    }
}

/// Fold a seed string into a 64-bit seed value
///
/// FNV-1a over the UTF-8 bytes: the same string maps to the same sequence on
/// every platform and toolchain, which keeps generation reproducible across
/// builds.
pub fn fold_seed(seed: &str) -> u64 {
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET_BASIS;
    for byte in seed.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
