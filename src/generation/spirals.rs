//! Spiral corridor synthesis around clearing centers
//!
//! Walks parametric Euler-spiral approximations outward from each clearing:
//! the radius grows by a fixed increment per step and the angle advances
//! proportionally to the accumulated radial distance, so curvature grows with
//! arc length. Each floating-point step is rounded to a grid cell and joined
//! to the previous one with integer line rasterization, carving wall-bounded
//! radial corridors.

use crate::grid::state::{Cell, GridState};
use crate::io::configuration::SPIRAL_RADIUS_STEP;
use crate::math::raster::bresenham_line;
use rand::Rng;
use rand::rngs::StdRng;
use std::f64::consts::TAU;

/// Parameters of the spiral synthesis around one clearing
#[derive(Debug, Clone, Copy)]
pub struct SpiralParams {
    /// Inclusive range for the number of spirals per clearing
    pub count_range: (usize, usize),
    /// Inclusive range for the number of steps per spiral
    pub length_range: (usize, usize),
    /// Factor coupling angular advance to accumulated radius
    pub growth_factor: f64,
}

/// Carve a randomized set of spirals branching from a clearing center
///
/// The spiral count is drawn from `count_range`; starting angles are evenly
/// distributed so `k` spirals are offset by `2*pi/k` from each other.
pub fn carve_spirals(
    grid: &mut GridState,
    center: [i32; 2],
    params: &SpiralParams,
    rng: &mut StdRng,
) {
    let count = rng.random_range(params.count_range.0..=params.count_range.1);
    if count == 0 {
        return;
    }
    let angular_offset = TAU / count as f64;

    for index in 0..count {
        let length = rng.random_range(params.length_range.0..=params.length_range.1);
        let start_angle = index as f64 * angular_offset;
        carve_one_spiral(grid, center, start_angle, length, params.growth_factor);
    }
}

/// Walk one spiral outward, carving the rasterized trail
///
/// Terminates early when a step would leave the interior bounds, keeping the
/// outer one-cell margin untouched.
fn carve_one_spiral(
    grid: &mut GridState,
    center: [i32; 2],
    start_angle: f64,
    length: usize,
    growth_factor: f64,
) {
    let mut angle = start_angle;
    let mut radius = 0.0;
    let mut previous = center;

    for _ in 0..length {
        radius += SPIRAL_RADIUS_STEP;
        angle += radius * growth_factor;

        let next = [
            (center[0] as f64 + radius * angle.cos()).round() as i32,
            (center[1] as f64 + radius * angle.sin()).round() as i32,
        ];
        if !grid.in_interior(next) {
            break;
        }

        for cell in bresenham_line(previous, next) {
            if grid.in_interior(cell) {
                grid.set(cell, Cell::Open);
            }
        }
        previous = next;
    }
}
