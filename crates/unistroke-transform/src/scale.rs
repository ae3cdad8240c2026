//! Bounding-box scaling
//!
//! Each axis is scaled independently so the bounding box becomes a
//! `size` x `size` square with its corner at the origin. Aspect ratio is
//! not preserved.

use crate::{TransformError, TransformResult};
use unistroke_core::{Point, Stroke};

/// Shorter bounding-box side, relative to the longer one, at or below
/// which a stroke counts as one-dimensional.
pub const MIN_EXTENT_RATIO: f64 = 1e-9;

/// Scale `stroke` non-uniformly so its bounding box is `size` x `size`.
///
/// # Errors
///
/// - [`TransformError::InvalidParameters`] if `size` is not positive
/// - [`TransformError::DegenerateInput`] if the stroke is empty or its
///   bounding box has (numerically) zero width or height
pub fn scale_to(stroke: &Stroke, size: f64) -> TransformResult<Stroke> {
    if !(size > 0.0 && size.is_finite()) {
        return Err(TransformError::InvalidParameters(format!(
            "reference size must be positive, got {size}"
        )));
    }
    let (min_x, min_y, max_x, max_y) = stroke.bounding_box().ok_or_else(|| {
        TransformError::DegenerateInput("cannot scale an empty stroke".to_string())
    })?;
    let width = max_x - min_x;
    let height = max_y - min_y;
    if width.min(height) <= width.max(height) * MIN_EXTENT_RATIO {
        return Err(TransformError::DegenerateInput(format!(
            "bounding box is {width} x {height}; both sides must be non-zero"
        )));
    }

    let sx = size / width;
    let sy = size / height;
    Ok(stroke
        .iter()
        .map(|p| Point::new((p.x - min_x) * sx, (p.y - min_y) * sy))
        .collect())
}
