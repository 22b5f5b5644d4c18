//! Clearing connectivity: MST topology, reachability checks, fallback paths
//!
//! A minimum spanning tree over clearing centers (Manhattan weights) fixes the
//! connectivity topology. Each MST edge is verified by a plain breadth-first
//! search over open cells; edges the existing open space does not already
//! connect are carved with a jittered, curve-smoothed fallback path stamped at
//! nonzero width.

use crate::grid::cellset::CellSet;
use crate::grid::state::GridState;
use crate::io::configuration::PATH_SAMPLES_PER_SEGMENT;
use crate::math::curves::sample_smoothed_path;
use crate::math::raster::bresenham_line;
use rand::Rng;
use rand::rngs::StdRng;
use std::collections::VecDeque;

/// Unordered clearing pair with its Manhattan-distance weight
///
/// Indices refer into the clearing list handed to the solver; edges exist
/// only during MST construction and are not persisted afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Index of the clearing already inside the tree
    pub a: usize,
    /// Index of the clearing the edge attaches
    pub b: usize,
    /// Manhattan distance between the two centers
    pub weight: i32,
}

/// Parameters of fallback path construction
#[derive(Debug, Clone, Copy)]
pub struct PathParams {
    /// Handle scaling factor for the Bezier smoothing, in `[0, 1]`
    pub curviness: f64,
    /// Disk radius stamped around each sampled path point
    pub thickness: i32,
}

const fn manhattan(a: [i32; 2], b: [i32; 2]) -> i32 {
    (a[0] - b[0]).abs() + (a[1] - b[1]).abs()
}

/// Build a minimum spanning tree over clearing centers
///
/// Prim's-style greedy growth from the first clearing, repeatedly taking the
/// lowest-weight edge connecting a visited clearing to an unvisited one.
/// Weight ties resolve to the first edge found in scan order, which is not
/// semantically significant. Fewer than two centers yield an empty edge set.
pub fn minimum_spanning_tree(centers: &[[i32; 2]]) -> Vec<Edge> {
    if centers.len() < 2 {
        return Vec::new();
    }

    let mut in_tree = vec![false; centers.len()];
    if let Some(first) = in_tree.first_mut() {
        *first = true;
    }

    let mut edges = Vec::with_capacity(centers.len() - 1);

    for _ in 1..centers.len() {
        let mut best: Option<Edge> = None;

        for (a, &from) in centers.iter().enumerate() {
            if !in_tree.get(a).copied().unwrap_or(false) {
                continue;
            }
            for (b, &to) in centers.iter().enumerate() {
                if in_tree.get(b).copied().unwrap_or(true) {
                    continue;
                }
                let weight = manhattan(from, to);
                if best.is_none_or(|edge| weight < edge.weight) {
                    best = Some(Edge { a, b, weight });
                }
            }
        }

        let Some(edge) = best else {
            break;
        };
        if let Some(flag) = in_tree.get_mut(edge.b) {
            *flag = true;
        }
        edges.push(edge);
    }

    edges
}

/// Test whether two positions are joined by existing open space
///
/// Plain breadth-first search over `Open` cells with 4-directional adjacency.
pub fn are_connected(grid: &GridState, start: [i32; 2], goal: [i32; 2]) -> bool {
    if start == goal {
        return true;
    }
    if !grid.is_open(start) || !grid.is_open(goal) {
        return false;
    }

    let mut visited = CellSet::new(grid.width(), grid.height());
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        for offset in [[0, 1], [1, 0], [0, -1], [-1, 0]] {
            let neighbor = [cell[0] + offset[0], cell[1] + offset[1]];
            if neighbor == goal {
                return true;
            }
            if grid.is_open(neighbor) && !visited.contains(neighbor) {
                visited.insert(neighbor);
                queue.push_back(neighbor);
            }
        }
    }

    false
}

/// Connect all clearings into a single traversable graph
///
/// Computes the MST, verifies each edge through the open-cell graph, and
/// carves a smoothed fallback path for each unreachable pair. The fallback
/// always succeeds geometrically, so connectivity is guaranteed at the cost
/// of potentially redundant carving.
pub fn connect_clearings(
    grid: &mut GridState,
    centers: &[[i32; 2]],
    params: &PathParams,
    rng: &mut StdRng,
) {
    for edge in minimum_spanning_tree(centers) {
        let (Some(&from), Some(&to)) = (centers.get(edge.a), centers.get(edge.b)) else {
            continue;
        };
        if are_connected(grid, from, to) {
            continue;
        }
        carve_fallback_path(grid, from, to, params, rng);
    }
}

/// Carve a curve-smoothed connector between two clearing centers
///
/// Builds the 3-point control path (start, jittered midpoint, end), smooths
/// it into cubic Bezier segments, and stamps a filled disk of `thickness`
/// around every cell on the rasterized line between consecutive samples,
/// clipped to the grid bounds. Rasterizing between samples keeps the corridor
/// contiguous even when the span is large relative to the sampling density.
fn carve_fallback_path(
    grid: &mut GridState,
    from: [i32; 2],
    to: [i32; 2],
    params: &PathParams,
    rng: &mut StdRng,
) {
    let control = fallback_control_points(grid, from, to, rng);
    let samples = sample_smoothed_path(&control, params.curviness, PATH_SAMPLES_PER_SEGMENT);

    let mut previous = from;
    for point in samples {
        let cell = [point[0].round() as i32, point[1].round() as i32];
        for step in bresenham_line(previous, cell) {
            grid.carve_disk(step, params.thickness);
        }
        previous = cell;
    }
}

/// Start, jittered midpoint, and end of a fallback path
///
/// The midpoint offset is bounded by `max(5, min(width, height) / 10)` per
/// axis and clamped back into the interior.
fn fallback_control_points(
    grid: &GridState,
    from: [i32; 2],
    to: [i32; 2],
    rng: &mut StdRng,
) -> Vec<[f64; 2]> {
    let jitter_bound = 5.max(grid.width().min(grid.height()) as i32 / 10);

    let midpoint = [
        i32::midpoint(from[0], to[0]) + rng.random_range(-jitter_bound..=jitter_bound),
        i32::midpoint(from[1], to[1]) + rng.random_range(-jitter_bound..=jitter_bound),
    ];
    let clamped = [
        midpoint[0].clamp(1, grid.width() as i32 - 2),
        midpoint[1].clamp(1, grid.height() as i32 - 2),
    ];

    vec![
        [from[0] as f64, from[1] as f64],
        [clamped[0] as f64, clamped[1] as f64],
        [to[0] as f64, to[1] as f64],
    ]
}
