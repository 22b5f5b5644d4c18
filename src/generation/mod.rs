//! Core generation pipeline
//!
//! Stages are pure functions over [`crate::grid::GridState`] orchestrated by
//! the executor: cellular-automaton smoothing, clearing placement and carving,
//! spiral corridor synthesis, and clearing connectivity.

/// Clearing placement and probabilistic flood-fill carving
pub mod carving;
/// Minimum spanning tree connectivity with smoothed fallback paths
pub mod connectivity;
/// Pipeline orchestration and per-run configuration
pub mod executor;
/// Cellular-automaton smoothing passes
pub mod smoothing;
/// Euler-spiral corridor rasterization
pub mod spirals;
