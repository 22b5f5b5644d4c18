//! Procedural generation of 2D glade maps: cave-like open space carved out of
//! walls, decorated with spiral corridors and connected into a single
//! traversable graph
//!
//! The pipeline fills a grid at a baseline wall ratio, smooths it with cellular
//! automaton passes, carves non-overlapping clearings via probabilistic flood
//! fill, rasterizes spiral corridors around each clearing, guarantees mutual
//! reachability with a minimum spanning tree over clearing centers, and frames
//! the result in a one-cell wall border.

#![forbid(unsafe_code)]

/// Core generation pipeline: smoothing, carving, spirals, and connectivity
pub mod generation;
/// Grid substrate: cell states, visited-set masks, and border framing
pub mod grid;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for curve sampling and rasterization
pub mod math;

pub use generation::executor::{GeneratedLevel, GenerationConfig, LevelGenerator};
pub use io::error::{GenerationError, Result};
