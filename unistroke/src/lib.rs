//! unistroke - Single-stroke gesture recognition for Rust
//!
//! An implementation of the $1 unistroke recognizer: strokes are
//! normalized (resampled, rotated, scaled, translated) and matched against
//! named templates with a golden-section search over rotation.
//!
//! # Overview
//!
//! - Stroke data structures and the gesture file format
//! - Normalization pipeline
//! - Template library, recognition and directory persistence
//!
//! # Example
//!
//! ```
//! use unistroke::Stroke;
//! use unistroke::recog::{Recognizer, RecognizerOptions};
//!
//! let mut recognizer = Recognizer::new(RecognizerOptions::default()).unwrap();
//! let square: Stroke = [(0.0, 0.0), (80.0, 0.0), (80.0, 80.0), (0.0, 80.0), (0.0, 0.0)]
//!     .into_iter()
//!     .collect();
//! let caret: Stroke = [(0.0, 80.0), (40.0, 0.0), (80.0, 80.0)].into_iter().collect();
//! recognizer.add_template("square", &square).unwrap();
//! recognizer.add_template("caret", &caret).unwrap();
//!
//! let drawn: Stroke = [(200.0, 300.0), (226.0, 250.0), (251.0, 302.0)].into_iter().collect();
//! let result = recognizer.recognize(&drawn).unwrap();
//! assert_eq!(result.name.as_deref(), Some("caret"));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use unistroke_core::*;

// Re-export the other crates as modules
pub use unistroke_recog as recog;
pub use unistroke_transform as transform;
