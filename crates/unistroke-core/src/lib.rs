//! Unistroke Core - Basic data structures for gesture recognition
//!
//! This crate provides the fundamental data structures used throughout
//! the unistroke workspace:
//!
//! - [`Point`] - A single 2D sample
//! - [`Stroke`] - An ordered point sequence in drawing order
//! - [`GestureRecord`] - One stroke plus the metadata of a gesture file
//! - [`StrokeBuilder`] - Press / drag / release state machine producing
//!   finished strokes

pub mod error;
pub mod point;
pub mod stroke;

pub use error::{Error, Result};
pub use point::Point;
pub use stroke::serial::GESTURE_FILE_EXTENSION;
pub use stroke::{GestureRecord, Stroke, StrokeBuilder, StrokeIter, StrokeState};
