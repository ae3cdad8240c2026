//! Error types for unistroke-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Unistroke core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Stroke that cannot be normalized (too few points or zero length)
    #[error("degenerate stroke: {0}")]
    DegenerateStroke(String),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Gesture file could not be parsed
    #[error("parse error{}: {message}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    ParseError {
        line: Option<usize>,
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            line: None,
            message: message.into(),
        }
    }

    pub(crate) fn parse_at(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line: Some(line),
            message: message.into(),
        }
    }
}

/// Result type alias for unistroke operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse_at(3, "missing X");
        assert_eq!(err.to_string(), "parse error at line 3: missing X");

        let err = Error::parse("empty input");
        assert_eq!(err.to_string(), "parse error: empty input");
    }
}
