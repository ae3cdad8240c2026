//! Type definitions for gesture recognition
//!
//! This module contains the core data structures for template-based
//! stroke recognition.

use std::path::PathBuf;
use unistroke_core::{Point, Stroke};
use unistroke_transform::{NormalizeOptions, NormalizedStroke};

use crate::error::{RecogError, RecogResult};

/// Default half-width of the rotation search window, in degrees
pub const DEFAULT_ANGLE_RANGE: f64 = 45.0;

/// Default bracket width at which the rotation search stops, in degrees
pub const DEFAULT_ANGLE_PRECISION: f64 = 2.0;

/// Default `Subject` written into exported gesture files
pub const DEFAULT_SUBJECT: &str = "user";

/// Options for a [`Recognizer`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizerOptions {
    /// Normalization applied to templates and candidates
    pub normalize: NormalizeOptions,

    /// Half the rotation search window in degrees (default: 45.0)
    /// The search covers ±angle_range degrees
    pub angle_range: f64,

    /// Search stops once the bracket is this narrow, in degrees (default: 2.0)
    pub angle_precision: f64,

    /// `Subject` attribute for exported templates (default: "user")
    pub subject: String,
}

impl Default for RecognizerOptions {
    fn default() -> Self {
        Self {
            normalize: NormalizeOptions::default(),
            angle_range: DEFAULT_ANGLE_RANGE,
            angle_precision: DEFAULT_ANGLE_PRECISION,
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }
}

impl RecognizerOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resample target
    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.normalize.num_points = num_points;
        self
    }

    /// Set the reference bounding-box size
    pub fn with_size(mut self, size: f64) -> Self {
        self.normalize.size = size;
        self
    }

    /// Set the centroid target
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.normalize.origin = origin;
        self
    }

    /// Set the rotation search half-width in degrees
    pub fn with_angle_range(mut self, degrees: f64) -> Self {
        self.angle_range = degrees;
        self
    }

    /// Set the rotation search precision in degrees
    pub fn with_angle_precision(mut self, degrees: f64) -> Self {
        self.angle_precision = degrees;
        self
    }

    /// Set the subject recorded in exported files
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        self.normalize.validate()?;
        if !(self.angle_range > 0.0 && self.angle_range.is_finite()) {
            return Err(RecogError::InvalidParameter(
                "angle_range must be positive".to_string(),
            ));
        }
        if !(self.angle_precision > 0.0 && self.angle_precision.is_finite()) {
            return Err(RecogError::InvalidParameter(
                "angle_precision must be positive".to_string(),
            ));
        }
        if self.angle_precision > 2.0 * self.angle_range {
            return Err(RecogError::InvalidParameter(
                "angle_precision must not exceed the search window".to_string(),
            ));
        }
        Ok(())
    }
}

/// A named, normalized gesture.
///
/// Names need not be unique; several recordings of the same gesture are
/// kept as separate templates.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// Gesture name
    pub name: String,
    /// Normalized points
    pub points: NormalizedStroke,
    /// Stroke as passed to `add_template`; this is what gets exported
    pub source: Stroke,
}

/// Outcome of [`Recognizer::recognize`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    /// Name of the closest template.
    ///
    /// `None` when the library is empty, or when no template comes closer
    /// than half the reference diagonal. Check it before trusting `score`.
    pub name: Option<String>,

    /// `1 - distance / half_diagonal`; higher is better, 1.0 is a perfect
    /// match.
    ///
    /// Stays within `[0, 1]` because only templates closer than the half
    /// diagonal are accepted. Callers should still compare scores only
    /// relative to each other and to thresholds, not assume a bound.
    pub score: f64,

    /// Average point distance to the closest template, or the half
    /// diagonal when nothing matched
    pub distance: f64,

    /// Index of the closest template in insertion order
    pub template_index: Option<usize>,
}

impl RecognitionResult {
    /// Whether a template was matched.
    pub fn is_match(&self) -> bool {
        self.name.is_some()
    }
}

/// A template file that [`Recognizer::import_templates`] left out.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    /// File that was skipped
    pub path: PathBuf,
    /// Human-readable reason
    pub reason: String,
}

/// Summary of a directory import.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    /// Number of templates added
    pub loaded: usize,
    /// Files that were not added, in the order they were examined
    pub skipped: Vec<SkippedFile>,
}

/// Gesture recognizer
///
/// Holds the template library and the options used to normalize and match
/// strokes. Templates are scanned linearly on every call, which is cheap
/// for the tens of templates a gesture set usually has.
///
/// # Concurrency
///
/// All operations are synchronous. `Recognizer` has no internal locking:
/// callers that capture strokes on one thread and recognize on another
/// must serialize `add_template`, `recognize`, `import_templates` and
/// `export_templates` themselves (one owning thread, or a `Mutex`).
#[derive(Debug, Clone)]
pub struct Recognizer {
    pub(crate) options: RecognizerOptions,
    pub(crate) templates: Vec<Template>,
}
