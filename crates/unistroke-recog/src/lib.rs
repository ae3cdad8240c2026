//! unistroke-recog - Template matching for single-stroke gestures
//!
//! This crate provides the recognition side of the $1 gesture recognizer:
//!
//! - **Template store**: named, normalized templates in insertion order
//! - **Matcher**: golden-section search over rotation for the smallest
//!   average point distance, turned into a score in `[0, 1]`
//! - **Persistence**: one gesture file per template, exported to and
//!   imported from a directory
//!
//! # Quick Start
//!
//! ```
//! use unistroke_core::Stroke;
//! use unistroke_recog::{Recognizer, RecognizerOptions};
//!
//! let mut recognizer = Recognizer::new(RecognizerOptions::default()).unwrap();
//!
//! let v: Stroke = [(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)].into_iter().collect();
//! recognizer.add_template("v", &v).unwrap();
//!
//! let drawn: Stroke = [(10.0, 5.0), (58.0, 110.0), (112.0, 8.0)].into_iter().collect();
//! let result = recognizer.recognize(&drawn).unwrap();
//! assert_eq!(result.name.as_deref(), Some("v"));
//! assert!(result.score > 0.8);
//! ```
//!
//! # Modules
//!
//! - [`recog`]: recognizer, matcher and template persistence

mod error;
pub mod recog;

pub use error::{RecogError, RecogResult};

// Re-export commonly used types
pub use recog::{
    ImportReport, RecognitionResult, Recognizer, RecognizerOptions, SkippedFile, Template,
    distance_at_angle, distance_at_best_angle, path_distance,
};

// Re-export core for convenience
pub use unistroke_core;
