//! Mathematical utilities for the generation pipeline

/// Catmull-Rom-style handle derivation and cubic Bezier sampling
pub mod curves;
/// Integer line rasterization
pub mod raster;
