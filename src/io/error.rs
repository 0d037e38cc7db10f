//! Error types for board construction, verification and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
///
/// Running out of placements is not an error; see
/// [`SearchOutcome::Exhausted`](crate::search::backtrack::SearchOutcome::Exhausted).
#[derive(Debug)]
pub enum SolverError {
    /// Board layout violates a structural requirement
    InvalidBoard {
        /// Description of what's wrong with the layout
        reason: String,
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

    /// A completed assignment failed re-verification
    ///
    /// Raised before anything is printed, so a defective solution never
    /// reaches the output.
    InvalidSolution {
        /// Index of the offending triangle in cell order
        index: usize,
        /// What the triangle violates
        reason: String,
    },

    /// Writing results or diagnostics failed
    Output {
        /// Description of what was being written
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a rendered board image
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

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoard { reason } => {
                write!(f, "Invalid board: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSolution { index, reason } => {
                write!(f, "Solution rejected at triangle {index}: {reason}")
            }
            Self::Output { operation, source } => {
                write!(f, "Failed to write {operation}: {source}")
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

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::Output { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            operation: "output",
            source: err,
        }
    }
}

/// Create an invalid board error
pub fn invalid_board(reason: &impl ToString) -> SolverError {
    SolverError::InvalidBoard {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach an operation name to an I/O failure while writing output
///
/// # Errors
///
/// Propagates the original error as [`SolverError::Output`]
pub fn output_context<T>(result: std::io::Result<T>, operation: &'static str) -> Result<T> {
    result.map_err(|source| SolverError::Output { operation, source })
}
