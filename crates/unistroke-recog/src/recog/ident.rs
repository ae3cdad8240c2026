//! Stroke identification
//!
//! Matches a candidate against every template by average point distance
//! after a golden-section search over the candidate's rotation.

use unistroke_core::{Point, Stroke};
use unistroke_transform::{normalize, rotate_by};

use crate::error::{RecogError, RecogResult};

use super::Recognizer;
use super::types::RecognitionResult;

/// Golden ratio conjugate, `0.5 * (sqrt(5) - 1)`
const PHI: f64 = 0.618_033_988_749_894_9;

/// Average distance between corresponding points of `a` and `b`.
///
/// # Errors
///
/// - [`RecogError::LengthMismatch`] if the sequences differ in length
/// - [`RecogError::InvalidParameter`] if they are empty
pub fn path_distance(a: &[Point], b: &[Point]) -> RecogResult<f64> {
    if a.len() != b.len() {
        return Err(RecogError::LengthMismatch {
            expected: b.len(),
            actual: a.len(),
        });
    }
    if a.is_empty() {
        return Err(RecogError::InvalidParameter(
            "cannot measure distance between empty paths".to_string(),
        ));
    }
    let total: f64 = a.iter().zip(b).map(|(p, q)| p.distance(q)).sum();
    Ok(total / a.len() as f64)
}

/// Path distance after rotating `candidate` by `theta` radians about its
/// centroid.
pub fn distance_at_angle(candidate: &Stroke, template: &[Point], theta: f64) -> RecogResult<f64> {
    let rotated = rotate_by(candidate, theta);
    path_distance(rotated.points(), template)
}

/// Smallest path distance over rotations of `candidate` in
/// `[theta_a, theta_b]` radians.
///
/// Golden-section search narrows the bracket until it is at most
/// `theta_delta` wide. The distance is assumed roughly unimodal in the
/// angle, so the search may settle on a local minimum.
///
/// Unlike the plain $1 search, which returns the smaller of its last two
/// probes, the unrotated distance is also evaluated whenever `0` lies in
/// the bracket and the overall minimum is returned. The result is
/// therefore never worse than no rotation at all.
///
/// # Errors
///
/// - [`RecogError::InvalidParameter`] if `theta_delta <= 0` or
///   `theta_a > theta_b`
/// - any error from [`path_distance`]
pub fn distance_at_best_angle(
    candidate: &Stroke,
    template: &[Point],
    theta_a: f64,
    theta_b: f64,
    theta_delta: f64,
) -> RecogResult<f64> {
    if !(theta_delta > 0.0 && theta_delta.is_finite()) {
        return Err(RecogError::InvalidParameter(format!(
            "angle precision must be positive, got {theta_delta}"
        )));
    }
    if theta_a.is_nan() || theta_b.is_nan() || theta_a > theta_b {
        return Err(RecogError::InvalidParameter(format!(
            "empty angle range [{theta_a}, {theta_b}]"
        )));
    }

    let (mut a, mut b) = (theta_a, theta_b);
    let mut x1 = PHI * a + (1.0 - PHI) * b;
    let mut f1 = distance_at_angle(candidate, template, x1)?;
    let mut x2 = (1.0 - PHI) * a + PHI * b;
    let mut f2 = distance_at_angle(candidate, template, x2)?;

    while (b - a).abs() > theta_delta {
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = PHI * a + (1.0 - PHI) * b;
            f1 = distance_at_angle(candidate, template, x1)?;
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - PHI) * a + PHI * b;
            f2 = distance_at_angle(candidate, template, x2)?;
        }
    }

    let mut best = f1.min(f2);
    if theta_a <= 0.0 && 0.0 <= theta_b {
        best = best.min(path_distance(candidate.points(), template)?);
    }
    Ok(best)
}

impl Recognizer {
    /// Find the template closest to `stroke`.
    ///
    /// The stroke is normalized with the recognizer's options and compared
    /// against every template, each with its own rotation search over
    /// ±`angle_range` degrees. On equal distances the earlier template
    /// wins. An empty library gives a result with no name and score 0.0.
    ///
    /// # Errors
    ///
    /// Returns a degenerate-input error (see
    /// [`RecogError::is_degenerate_input`]) if the stroke cannot be
    /// normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use unistroke_recog::{Recognizer, RecognizerOptions};
    /// use unistroke_recog::unistroke_core::Stroke;
    ///
    /// let recog = Recognizer::new(RecognizerOptions::default()).unwrap();
    /// let vee: Stroke = [(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)].into_iter().collect();
    /// let result = recog.recognize(&vee).unwrap();
    /// assert!(result.name.is_none());
    /// assert_eq!(result.score, 0.0);
    /// ```
    pub fn recognize(&self, stroke: &Stroke) -> RecogResult<RecognitionResult> {
        let candidate = normalize(stroke, &self.options.normalize)?;
        let half_diagonal = self.options.normalize.half_diagonal();

        if self.templates.is_empty() {
            tracing::debug!("recognize called with an empty template library");
            return Ok(RecognitionResult {
                name: None,
                score: 0.0,
                distance: half_diagonal,
                template_index: None,
            });
        }

        let range = self.options.angle_range.to_radians();
        let precision = self.options.angle_precision.to_radians();

        let mut best_distance = half_diagonal;
        let mut best_index = None;
        for (i, template) in self.templates.iter().enumerate() {
            let d = distance_at_best_angle(
                candidate.as_stroke(),
                template.points.points(),
                -range,
                range,
                precision,
            )?;
            if d < best_distance {
                best_distance = d;
                best_index = Some(i);
            }
        }

        let score = 1.0 - best_distance / half_diagonal;
        let name = best_index.map(|i| self.templates[i].name.clone());
        tracing::debug!(
            name = name.as_deref().unwrap_or("<none>"),
            score,
            distance = best_distance,
            templates = self.templates.len(),
            "recognized stroke"
        );

        Ok(RecognitionResult {
            name,
            score,
            distance: best_distance,
            template_index: best_index,
        })
    }
}
