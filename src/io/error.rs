//! Error types for shape construction, parsing and file processing

use std::fmt;
use std::path::PathBuf;

/// Main error type for all shape operations
#[derive(Debug)]
pub enum ShapeError {
    /// Requested grid holds more cells than the fixed bit capacity
    CapacityExceeded {
        /// Requested width in cells
        width: usize,
        /// Requested height in cells
        height: usize,
        /// Maximum number of cells a shape can hold
        capacity: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
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

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                width,
                height,
                capacity,
            } => {
                write!(
                    f,
                    "Shape {width}x{height} needs {} cells but capacity is {capacity}",
                    width.saturating_mul(*height)
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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

impl std::error::Error for ShapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for shape results
pub type Result<T> = std::result::Result<T, ShapeError>;

impl From<std::io::Error> for ShapeError {
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
) -> ShapeError {
    ShapeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for a known path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> ShapeError {
    ShapeError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}

/// Create an error for an unusable target path
pub fn io_error(msg: &str) -> ShapeError {
    ShapeError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
