//! Spatial data structures and grid manipulation
//!
//! This module contains the substrate every pipeline stage mutates:
//! - Cell states and the owned grid array
//! - Per-cell membership masks for traversal bookkeeping
//! - Border framing producing the final output grid

/// One-cell wall border framing
pub mod border;
/// Bitset-backed per-cell membership masks
pub mod cellset;
/// Cell states and grid state management
pub mod state;

pub use cellset::CellSet;
pub use state::{Cell, GridState};
