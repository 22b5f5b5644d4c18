//! Progress display for batch map generation

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Maps: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch generation runs
///
/// A single bar advances once per finished map; the message shows the seed of
/// the map currently generating.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active display
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Initialize the progress bar for the given map count
    pub fn initialize(&mut self, map_count: usize) {
        let bar = ProgressBar::new(map_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Report the seed of the map currently generating
    pub fn start_map(&self, seed: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(seed.to_string());
        }
    }

    /// Mark one map as finished
    pub fn complete_map(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All maps generated");
        }
    }
}
