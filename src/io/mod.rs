//! Input/output operations and error handling
//!
//! Hosts everything outside the generation core: the error taxonomy and
//! warning diagnostics, default constants, PNG export of finished maps, and
//! the batch CLI that drives generation runs.

/// Command-line interface for batch map generation
pub mod cli;
/// Default constants and runtime configuration values
pub mod configuration;
/// Error types and non-fatal warning diagnostics
pub mod error;
/// PNG export of finished maps
pub mod image;
/// Progress display for batch runs
pub mod progress;
