//! Error types for layout construction, queries and rendering

use std::fmt;
use std::path::PathBuf;

use crate::spatial::coordinate::Orientation;

/// Main error type for all knotwork operations
#[derive(Debug)]
pub enum KnotError {
    /// A block's endpoints do not resolve to matching anchor nodes
    ///
    /// Raised when a block is constructed directly or derived through a
    /// transform (invert, offset, fold, repeat) or placed into a pattern
    /// whose lanes cannot hold it.
    InvalidBlock {
        /// Axis the block's lane runs along
        orientation: Orientation,
        /// Lane index (row for horizontal, column for vertical)
        lane: i32,
        /// First position along the lane
        start: i32,
        /// Last position along the lane
        end: i32,
        /// Explanation of the violated constraint
        reason: String,
    },

    /// Patterns cannot be combined into the requested shape
    InvalidComposition {
        /// Description of the incompatibility
        reason: String,
    },

    /// A query coordinate lies outside the composite grid
    OutOfBounds {
        /// Offending coordinate as (column, row)
        coordinate: [i32; 2],
        /// Composite grid dimensions as (width, height)
        dimensions: (usize, usize),
    },

    /// Configuration or command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered image to disk
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

impl fmt::Display for KnotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBlock {
                orientation,
                lane,
                start,
                end,
                reason,
            } => {
                write!(
                    f,
                    "Invalid {orientation} block on lane {lane} spanning {start}..={end}: {reason}"
                )
            }
            Self::InvalidComposition { reason } => {
                write!(f, "Invalid pattern composition: {reason}")
            }
            Self::OutOfBounds {
                coordinate,
                dimensions,
            } => {
                write!(
                    f,
                    "Coordinate ({}, {}) is outside the {}x{} grid",
                    coordinate[0], coordinate[1], dimensions.0, dimensions.1
                )
            }
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

impl std::error::Error for KnotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for knotwork results
pub type Result<T> = std::result::Result<T, KnotError>;

impl From<image::ImageError> for KnotError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for KnotError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> KnotError {
    KnotError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid composition error
pub fn invalid_composition(reason: &impl ToString) -> KnotError {
    KnotError::InvalidComposition {
        reason: reason.to_string(),
    }
}
