//! Error types for unistroke-recog

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during recognition operations
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] unistroke_core::Error),

    /// Normalization error
    #[error("transform error: {0}")]
    Transform(#[from] unistroke_transform::TransformError),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Point sequences compared point by point have different lengths
    #[error("length mismatch: expected {expected} points, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Template directory or file could not be written or listed
    #[error("persistence error at '{}': {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RecogError {
    /// Whether the error means the input stroke is degenerate (fewer than
    /// two points, zero path length, or one-dimensional).
    pub fn is_degenerate_input(&self) -> bool {
        match self {
            Self::Transform(e) => e.is_degenerate(),
            Self::Core(unistroke_core::Error::DegenerateStroke(_)) => true,
            _ => false,
        }
    }
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
