//! Error types for unistroke-transform

use thiserror::Error;

/// Errors that can occur while normalizing strokes
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] unistroke_core::Error),

    /// Input cannot be normalized without dividing by zero
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// Invalid transformation parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

impl TransformError {
    /// Whether the error reports a degenerate stroke rather than bad options.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Self::DegenerateInput(_) | Self::Core(unistroke_core::Error::DegenerateStroke(_))
        )
    }
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
