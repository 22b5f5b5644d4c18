//! Command-line interface for batch map generation

use crate::generation::executor::{GenerationConfig, LevelGenerator};
use crate::io::configuration::{
    DEFAULT_FILL_PERCENT, DEFAULT_GUARANTEED_LAYERS, DEFAULT_HEIGHT, DEFAULT_MAX_LAYER,
    DEFAULT_PROBABILITY_DECAY_RATE, DEFAULT_REGION_COUNT, DEFAULT_SEED, DEFAULT_SMOOTHING_PASSES,
    DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_level_as_png;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glademap")]
#[command(
    author,
    version,
    about = "Generate glade maps with cellular automata and spiral carving"
)]
/// Command-line arguments for the map generation tool
pub struct Cli {
    /// Interior map width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Interior map height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Seed string for reproducible generation
    #[arg(short, long, default_value = DEFAULT_SEED)]
    pub seed: String,

    /// Replace the seed with a time-derived value per run
    #[arg(long)]
    pub random_seed: bool,

    /// Baseline wall percentage before smoothing (0-100)
    #[arg(short, long, default_value_t = DEFAULT_FILL_PERCENT)]
    pub fill_percent: u8,

    /// Number of cellular-automaton smoothing passes
    #[arg(long, default_value_t = DEFAULT_SMOOTHING_PASSES)]
    pub smoothing_passes: usize,

    /// Number of secondary clearings beyond the primary one
    #[arg(short, long, default_value_t = DEFAULT_REGION_COUNT)]
    pub regions: usize,

    /// BFS layers carved unconditionally around each clearing
    #[arg(long, default_value_t = DEFAULT_GUARANTEED_LAYERS)]
    pub guaranteed_layers: usize,

    /// Per-layer open-probability multiplier past the guaranteed zone
    #[arg(long, default_value_t = DEFAULT_PROBABILITY_DECAY_RATE)]
    pub decay_rate: f64,

    /// Carving layer limit
    #[arg(long, default_value_t = DEFAULT_MAX_LAYER)]
    pub max_layer: usize,

    /// Output PNG path; batch runs append an index to the stem
    #[arg(short, long, default_value = "glade.png")]
    pub output: PathBuf,

    /// Number of maps to generate, each with a derived seed
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Suppress progress output and warnings
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.count > 1
    }
}

/// Orchestrates batch generation runs with progress tracking
pub struct MapBatch {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl MapBatch {
    /// Create a batch runner from the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Generate and export all requested maps
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation or PNG export fails
    // Allow print for surfacing non-fatal generation warnings
    #[allow(clippy::print_stderr)]
    pub fn process(&mut self) -> Result<()> {
        if let Some(ref mut progress) = self.progress {
            progress.initialize(self.cli.count);
        }

        for index in 0..self.cli.count {
            let seed = self.map_seed(index);
            if let Some(ref progress) = self.progress {
                progress.start_map(&seed);
            }

            let config = GenerationConfig {
                width: self.cli.width,
                height: self.cli.height,
                seed,
                use_random_seed: self.cli.random_seed,
                fill_percent: self.cli.fill_percent,
                smoothing_passes: self.cli.smoothing_passes,
                guaranteed_layers: self.cli.guaranteed_layers,
                probability_decay_rate: self.cli.decay_rate,
                max_layer: self.cli.max_layer,
                region_count: self.cli.regions,
                ..GenerationConfig::default()
            };

            let generator = LevelGenerator::new(config)?;
            let level = generator.generate();

            if !self.cli.quiet {
                for warning in &level.warnings {
                    eprintln!("Warning: {warning}");
                }
            }

            let output_path = self.output_path(index);
            let path_str = output_path
                .to_str()
                .ok_or_else(|| invalid_parameter("output", &output_path.display(), &"not UTF-8"))?;
            export_level_as_png(&level, path_str)?;

            if let Some(ref progress) = self.progress {
                progress.complete_map();
            }
        }

        if let Some(ref progress) = self.progress {
            progress.finish();
        }

        Ok(())
    }

    /// Seed for the map at a batch index
    ///
    /// Single runs use the configured seed verbatim; batch runs derive one
    /// seed per map so outputs differ but remain reproducible.
    fn map_seed(&self, index: usize) -> String {
        if self.cli.count == 1 {
            self.cli.seed.clone()
        } else {
            format!("{}-{}", self.cli.seed, index + 1)
        }
    }

    fn output_path(&self, index: usize) -> PathBuf {
        if self.cli.count == 1 {
            return self.cli.output.clone();
        }

        let stem = self.cli.output.file_stem().unwrap_or_default();
        let extension = self.cli.output.extension().unwrap_or_default();
        let name = format!(
            "{}_{}.{}",
            stem.to_string_lossy(),
            index + 1,
            extension.to_string_lossy()
        );

        self.cli
            .output
            .parent()
            .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
    }
}
