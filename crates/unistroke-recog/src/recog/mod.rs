//! Template matching
//!
//! A [`Recognizer`] keeps a library of named, normalized templates and
//! matches candidate strokes against it.
//!
//! - [`types`]: options, templates and results
//! - `train`: building the library
//! - `ident`: matching and the rotation search
//! - `serial`: exporting and importing gesture files

mod ident;
mod serial;
mod train;
pub mod types;

pub use ident::{distance_at_angle, distance_at_best_angle, path_distance};
pub use types::{
    DEFAULT_ANGLE_PRECISION, DEFAULT_ANGLE_RANGE, DEFAULT_SUBJECT, ImportReport,
    RecognitionResult, Recognizer, RecognizerOptions, SkippedFile, Template,
};
