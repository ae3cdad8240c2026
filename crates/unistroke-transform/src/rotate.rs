//! Rotation about the centroid
//!
//! This module provides:
//! - [`indicative_angle`]: direction from the first point to the centroid
//! - [`rotate_by`]: rotation of every point about the centroid

use crate::{TransformError, TransformResult};
use unistroke_core::{Point, Stroke};

/// Angle in radians of the vector from the first point to the centroid.
///
/// Computed as `atan2(c.y - p0.y, c.x - p0.x)`, so the result lies in
/// `(-pi, pi]`.
///
/// # Errors
///
/// Returns [`TransformError::DegenerateInput`] for an empty stroke.
pub fn indicative_angle(stroke: &Stroke) -> TransformResult<f64> {
    let (Some(first), Some(c)) = (stroke.first(), stroke.centroid()) else {
        return Err(TransformError::DegenerateInput(
            "indicative angle of an empty stroke".to_string(),
        ));
    };
    Ok((c.y - first.y).atan2(c.x - first.x))
}

/// Rotate every point by `angle` radians (counter-clockwise) about the
/// centroid of `stroke`.
///
/// The centroid is recomputed from `stroke` on every call. An empty
/// stroke is returned unchanged.
pub fn rotate_by(stroke: &Stroke, angle: f64) -> Stroke {
    let Some(c) = stroke.centroid() else {
        return Stroke::new();
    };
    let (sin, cos) = angle.sin_cos();
    stroke
        .iter()
        .map(|p| {
            let dx = p.x - c.x;
            let dy = p.y - c.y;
            Point::new(dx * cos - dy * sin + c.x, dx * sin + dy * cos + c.y)
        })
        .collect()
}
