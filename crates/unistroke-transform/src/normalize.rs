//! Normalization pipeline
//!
//! Brings any drawable stroke into canonical form, in this order:
//!
//! 1. [`resample`] to `num_points` equally spaced points
//! 2. rotate by the negative [`indicative_angle`]
//! 3. [`scale_to`] a `size` x `size` bounding box
//! 4. [`translate_to`] the centroid onto `origin`
//!
//! Rotation must precede the axis-aligned scaling, and translation must
//! come last so nothing moves the centroid afterwards.

use crate::resample::resample;
use crate::rotate::{indicative_angle, rotate_by};
use crate::scale::scale_to;
use crate::translate::translate_to;
use crate::{TransformError, TransformResult};
use unistroke_core::{Point, Stroke};

/// Default number of resampled points
pub const DEFAULT_NUM_POINTS: usize = 64;

/// Default side of the reference bounding box
pub const DEFAULT_SIZE: f64 = 250.0;

/// Options for stroke normalization
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOptions {
    /// Number of points after resampling (default: 64)
    pub num_points: usize,

    /// Side of the reference bounding box (default: 250.0)
    pub size: f64,

    /// Target of the centroid (default: (0, 0))
    pub origin: Point,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_NUM_POINTS,
            size: DEFAULT_SIZE,
            origin: Point::default(),
        }
    }
}

impl NormalizeOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resample target
    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    /// Set the reference size
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the centroid target
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Half the diagonal of the reference square.
    ///
    /// Upper estimate of the average point distance between two
    /// normalized strokes; used to turn distances into scores.
    pub fn half_diagonal(&self) -> f64 {
        0.5 * (self.size * self.size + self.size * self.size).sqrt()
    }

    /// Validate options
    pub fn validate(&self) -> TransformResult<()> {
        if self.num_points < 2 {
            return Err(TransformError::InvalidParameters(
                "num_points must be at least 2".to_string(),
            ));
        }
        if !(self.size > 0.0 && self.size.is_finite()) {
            return Err(TransformError::InvalidParameters(
                "size must be positive and finite".to_string(),
            ));
        }
        if !(self.origin.x.is_finite() && self.origin.y.is_finite()) {
            return Err(TransformError::InvalidParameters(
                "origin must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// A stroke in canonical form.
///
/// Holds exactly `num_points` points of the options it was built with;
/// only [`normalize`] creates one.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedStroke(Stroke);

impl NormalizedStroke {
    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a normalized stroke has at least two points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Points in drawing order.
    pub fn points(&self) -> &[Point] {
        self.0.points()
    }

    /// Borrow as a plain stroke.
    pub fn as_stroke(&self) -> &Stroke {
        &self.0
    }

    /// Unwrap into a plain stroke.
    pub fn into_stroke(self) -> Stroke {
        self.0
    }
}

impl AsRef<Stroke> for NormalizedStroke {
    fn as_ref(&self) -> &Stroke {
        &self.0
    }
}

/// Normalize `stroke` into canonical form.
///
/// # Errors
///
/// - [`TransformError::InvalidParameters`] for invalid `options`
/// - [`TransformError::DegenerateInput`] if the stroke has fewer than two
///   points, zero path length, or no extent along one axis after rotation
///
/// # Example
/// ```
/// use unistroke_core::Stroke;
/// use unistroke_transform::{NormalizeOptions, normalize};
///
/// let stroke: Stroke = [(0.0, 0.0), (40.0, 10.0), (20.0, 50.0)].into_iter().collect();
/// let normalized = normalize(&stroke, &NormalizeOptions::default()).unwrap();
/// assert_eq!(normalized.len(), 64);
/// ```
pub fn normalize(stroke: &Stroke, options: &NormalizeOptions) -> TransformResult<NormalizedStroke> {
    options.validate()?;

    let points = resample(stroke, options.num_points)?;
    let angle = indicative_angle(&points)?;
    let points = rotate_by(&points, -angle);
    let points = scale_to(&points, options.size)?;
    let points = translate_to(&points, options.origin);

    tracing::debug!(
        input_points = stroke.len(),
        num_points = points.len(),
        indicative_angle = angle,
        "normalized stroke"
    );

    Ok(NormalizedStroke(points))
}
