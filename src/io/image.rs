//! PNG export of finished maps

use crate::generation::executor::GeneratedLevel;
use crate::grid::state::Cell;
use crate::io::configuration::{CLEARING_MARKER_COLOR, OPEN_COLOR, WALL_COLOR};
use crate::io::error::{GenerationError, Result};
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Export a finished map as a PNG image, one pixel per cell
///
/// Walls and open cells use the configured palette; clearing centers are
/// overdrawn with a marker color so points of interest are visible at a
/// glance.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_level_as_png(level: &GeneratedLevel, output_path: &str) -> Result<()> {
    let width = level.grid.width() as u32;
    let height = level.grid.height() as u32;

    let mut img = ImageBuffer::new(width, height);

    for x in 0..width {
        for y in 0..height {
            let rgba = match level.grid.get([x as i32, y as i32]) {
                Some(Cell::Open) => OPEN_COLOR,
                Some(Cell::Wall) | None => WALL_COLOR,
            };
            img.put_pixel(x, y, Rgba(rgba));
        }
    }

    for &center in &level.clearings {
        if center[0] >= 0 && center[0] < width as i32 && center[1] >= 0 && center[1] < height as i32
        {
            img.put_pixel(center[0] as u32, center[1] as u32, Rgba(CLEARING_MARKER_COLOR));
        }
    }

    if let Some(parent) = Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
