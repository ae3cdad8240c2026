//! Arc-length resampling
//!
//! Reparametrizes a stroke into `n` points spaced equally along its path.
//!
//! # Algorithm
//!
//! With total path length `L`, the interval is `I = L / (n - 1)`. The path
//! is walked segment by segment while accumulating distance; whenever the
//! accumulated distance plus the current segment reaches `I`, a point is
//! interpolated exactly `I` along the path, emitted, and becomes the start
//! of the remaining segment. Zero-length segments are stepped over without
//! resetting the accumulator. Rounding can leave the walk one point short;
//! the last input point is then repeated until there are exactly `n`.

use crate::{TransformError, TransformResult};
use unistroke_core::{Point, Stroke};

/// Resample `stroke` to exactly `n` equally spaced points.
///
/// # Errors
///
/// - [`TransformError::InvalidParameters`] if `n < 2`
/// - [`TransformError::DegenerateInput`] if the stroke has fewer than two
///   points or zero path length
pub fn resample(stroke: &Stroke, n: usize) -> TransformResult<Stroke> {
    if n < 2 {
        return Err(TransformError::InvalidParameters(format!(
            "resample target must be at least 2, got {n}"
        )));
    }
    let length = check_drawable(stroke)?;
    let interval = length / (n - 1) as f64;
    let points = stroke.points();

    let mut out = Stroke::with_capacity(n);
    out.push(points[0]);

    let mut accumulated = 0.0;
    let mut prev = points[0];
    let mut i = 1;
    while i < points.len() && out.len() < n {
        let cur = points[i];
        let d = prev.distance(&cur);
        if d > 0.0 && accumulated + d >= interval {
            let q = prev.lerp(&cur, (interval - accumulated) / d);
            out.push(q);
            prev = q;
            accumulated = 0.0;
        } else {
            accumulated += d;
            prev = cur;
            i += 1;
        }
    }

    let last = points[points.len() - 1];
    while out.len() < n {
        out.push(last);
    }
    Ok(out)
}

/// Path length of a stroke that can be resampled.
pub(crate) fn check_drawable(stroke: &Stroke) -> TransformResult<f64> {
    stroke.check_drawable().map_err(|e| match e {
        unistroke_core::Error::DegenerateStroke(msg) => TransformError::DegenerateInput(msg),
        other => other.into(),
    })
}

/// Point spacing along the path, for diagnostics.
pub fn spacing(stroke: &Stroke) -> Vec<f64> {
    stroke
        .points()
        .windows(2)
        .map(|w| Point::distance(&w[0], &w[1]))
        .collect()
}
