//! Stroke - Ordered point sequences
//!
//! A [`Stroke`] is the sequence of samples captured between pointer press
//! and release. Drawing order is significant: every transform in the
//! workspace preserves it.
//!
//! # Storage layout
//!
//! Points are stored as a single `Vec<Point>` (AoS layout) because every
//! consumer walks consecutive pairs of points.

mod builder;
pub mod serial;

pub use builder::{StrokeBuilder, StrokeState};
pub use serial::GestureRecord;

use crate::error::{Error, Result};
use crate::point::Point;

/// An ordered sequence of points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Create a new empty Stroke.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a Stroke with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a Stroke that takes ownership of `points`.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Create a Stroke from coordinate vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` and `y` have different lengths.
    pub fn from_vecs(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::InvalidParameter(format!(
                "x and y lengths differ: {} vs {}",
                x.len(),
                y.len()
            )));
        }
        Ok(x.into_iter().zip(y).collect())
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get a point by index.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// First point, if any.
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last point, if any.
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Add a point.
    pub fn push(&mut self, point: impl Into<Point>) {
        self.points.push(point.into());
    }

    /// Remove and return the last point.
    pub fn pop(&mut self) -> Option<Point> {
        self.points.pop()
    }

    /// Set a point at index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is out of bounds.
    pub fn set(&mut self, index: usize, point: Point) -> Result<()> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        *slot = point;
        Ok(())
    }

    /// Clear all points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Get the points as a slice.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume the stroke and return its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Sum of the Euclidean distances between consecutive points.
    pub fn path_length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }

    /// Compute the centroid (mean of all points).
    ///
    /// Returns `None` if empty.
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(Point::new(sx / n, sy / n))
    }

    /// Compute the bounding box.
    ///
    /// Returns `(x_min, y_min, x_max, y_max)`, or `None` if empty.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.points.first()?;
        let init = (first.x, first.y, first.x, first.y);
        Some(
            self.points
                .iter()
                .fold(init, |(x0, y0, x1, y1), p| {
                    (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y))
                }),
        )
    }

    /// Check that the stroke can be normalized and return its path length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateStroke`] when the stroke has fewer than
    /// two points, when its path length is zero, or when a coordinate is
    /// not finite.
    pub fn check_drawable(&self) -> Result<f64> {
        if self.points.len() < 2 {
            return Err(Error::DegenerateStroke(format!(
                "need at least 2 points, got {}",
                self.points.len()
            )));
        }
        if self.points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(Error::DegenerateStroke(
                "stroke contains non-finite coordinates".to_string(),
            ));
        }
        let length = self.path_length();
        if length <= 0.0 {
            return Err(Error::DegenerateStroke(
                "all points coincide (path length is zero)".to_string(),
            ));
        }
        Ok(length)
    }

    /// Create an iterator over points.
    pub fn iter(&self) -> StrokeIter<'_> {
        StrokeIter {
            stroke: self,
            index: 0,
        }
    }
}

/// Iterator over Stroke points.
pub struct StrokeIter<'a> {
    stroke: &'a Stroke,
    index: usize,
}

impl Iterator for StrokeIter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        let pt = self.stroke.points.get(self.index).copied()?;
        self.index += 1;
        Some(pt)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.stroke.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StrokeIter<'_> {}

impl<'a> IntoIterator for &'a Stroke {
    type Item = Point;
    type IntoIter = StrokeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Point> for Stroke {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(f64, f64)> for Stroke {
    fn from_iter<T: IntoIterator<Item = (f64, f64)>>(iter: T) -> Self {
        iter.into_iter().map(Point::from).collect()
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}
