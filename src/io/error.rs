//! Error types and warning diagnostics for generation runs

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save an exported map to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. } => None,
        }
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Non-fatal conditions surfaced to the caller alongside the finished map
///
/// Generation always completes; these record where the run degraded from the
/// requested parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationWarning {
    /// The requested region count exceeds the coarse placement capacity;
    /// generation proceeded with as many regions as fit
    RegionCapacityExceeded {
        /// Number of clearings requested, including the primary one
        requested: usize,
        /// Number of coarse placement cells available
        capacity: usize,
    },

    /// The placement search exhausted its attempt budget and fell back to an
    /// unoccupied coarse cell without the adjacency constraint
    PlacementRelaxed {
        /// Creation-order index of the affected clearing
        index: usize,
    },

    /// No coarse cell remained unoccupied for this clearing, so it was
    /// skipped and the region count silently reduced
    ClearingSkipped {
        /// Creation-order index of the skipped clearing
        index: usize,
    },
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegionCapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "Requested {requested} clearings but only {capacity} placement cells exist"
                )
            }
            Self::PlacementRelaxed { index } => {
                write!(
                    f,
                    "Clearing {index} placed without the adjacency constraint"
                )
            }
            Self::ClearingSkipped { index } => {
                write!(f, "Clearing {index} skipped: placement grid exhausted")
            }
        }
    }
}
