//! Error types for simulation, history, and image operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all simulation operations
#[derive(Debug)]
pub enum SimulationError {
    /// Failed to decode a seed image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Decoded image cannot seed the board
    ///
    /// Raised for images below 32 bits per pixel and for images too small
    /// to give every cell at least one whole pixel.
    UnsuitableImage {
        /// Description of what makes the image unusable
        reason: String,
    },

    /// Session parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A record was requested while the ledger is not recording
    RecordingDisabled,

    /// Recording would duplicate or reorder history
    ///
    /// The ledger refuses to append when it already holds more records than
    /// the board has applied turns.
    HistoryOutOfOrder {
        /// Turns recorded so far
        recorded: u32,
        /// The board's current turn counter
        board_turn: u32,
    },

    /// History navigation stepped past the recorded range
    NavigationOutOfRange {
        /// Current cursor position
        cursor: usize,
        /// Number of recorded turns
        recorded: usize,
    },

    /// Failed to save the board image to disk
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

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::UnsuitableImage { reason } => {
                write!(f, "Unsuitable seed image: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::RecordingDisabled => {
                write!(f, "History recording is disabled")
            }
            Self::HistoryOutOfOrder {
                recorded,
                board_turn,
            } => {
                write!(
                    f,
                    "History holds {recorded} records but the board is only at turn {board_turn}"
                )
            }
            Self::NavigationOutOfRange { cursor, recorded } => {
                write!(
                    f,
                    "History navigation out of range (cursor {cursor} of {recorded} records)"
                )
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

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for simulation results
pub type Result<T> = std::result::Result<T, SimulationError>;

impl From<image::ImageError> for SimulationError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SimulationError {
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
) -> SimulationError {
    SimulationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
