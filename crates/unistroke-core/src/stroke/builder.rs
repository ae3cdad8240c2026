//! Stroke capture state machine
//!
//! Assembles a [`Stroke`] from pointer events so that recognition only
//! ever sees finished strokes.
//!
//! ```text
//!   Idle --press--> Collecting --drag--> Collecting
//!                        |
//!                     release
//!                        v
//!                    Completed --press--> Collecting
//! ```
//!
//! The builder holds no locks. A capture thread and a recognition thread
//! that share one builder must serialize access themselves.

use super::Stroke;
use crate::point::Point;

/// Capture state of a [`StrokeBuilder`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StrokeState {
    /// No button held, nothing buffered.
    #[default]
    Idle,
    /// Button held; points are being appended.
    Collecting,
    /// Button released; the finished stroke waits to be taken.
    Completed(Stroke),
}

/// Builds strokes from press / drag / release events.
#[derive(Debug, Clone, Default)]
pub struct StrokeBuilder {
    state: StrokeState,
    buffer: Stroke,
}

impl StrokeBuilder {
    /// Create a builder in the `Idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &StrokeState {
        &self.state
    }

    /// Whether a stroke is being collected.
    pub fn is_collecting(&self) -> bool {
        self.state == StrokeState::Collecting
    }

    /// Points buffered so far in the current stroke.
    pub fn pending(&self) -> &Stroke {
        &self.buffer
    }

    /// Start a new stroke at `point`.
    ///
    /// Always restarts: an uncollected `Completed` stroke or a stroke in
    /// progress is discarded.
    pub fn press(&mut self, point: impl Into<Point>) {
        self.buffer.clear();
        self.buffer.push(point);
        self.state = StrokeState::Collecting;
    }

    /// Append `point` to the stroke in progress.
    ///
    /// Ignored unless collecting.
    pub fn drag(&mut self, point: impl Into<Point>) {
        if self.is_collecting() {
            self.buffer.push(point);
        }
    }

    /// Finish the stroke with a final `point` and return a copy of it.
    ///
    /// Returns `None` (and changes nothing) when no stroke is in progress.
    /// The finished stroke also stays available through
    /// [`take_completed`](Self::take_completed) until the next press.
    pub fn release(&mut self, point: impl Into<Point>) -> Option<Stroke> {
        if !self.is_collecting() {
            return None;
        }
        self.buffer.push(point);
        let stroke = std::mem::take(&mut self.buffer);
        self.state = StrokeState::Completed(stroke.clone());
        Some(stroke)
    }

    /// Take the completed stroke, returning the builder to `Idle`.
    pub fn take_completed(&mut self) -> Option<Stroke> {
        match std::mem::take(&mut self.state) {
            StrokeState::Completed(stroke) => Some(stroke),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Drop any buffered points and return to `Idle`.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state = StrokeState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_drag_release() {
        let mut b = StrokeBuilder::new();
        assert_eq!(b.state(), &StrokeState::Idle);

        b.press((0, 0));
        assert!(b.is_collecting());
        b.drag((1, 0));
        b.drag((2, 0));
        assert_eq!(b.pending().len(), 3);

        let stroke = b.release((3, 0)).unwrap();
        assert_eq!(stroke.len(), 4);
        assert_eq!(stroke.last(), Some(Point::new(3.0, 0.0)));
        assert!(matches!(b.state(), StrokeState::Completed(s) if s.len() == 4));

        assert_eq!(b.take_completed(), Some(stroke));
        assert_eq!(b.state(), &StrokeState::Idle);
        assert_eq!(b.take_completed(), None);
    }

    #[test]
    fn test_events_outside_collecting_are_ignored() {
        let mut b = StrokeBuilder::new();
        b.drag((5, 5));
        assert_eq!(b.release((6, 6)), None);
        assert_eq!(b.state(), &StrokeState::Idle);
        assert!(b.pending().is_empty());

        b.press((0, 0));
        b.release((1, 1));
        b.drag((9, 9));
        assert!(matches!(b.state(), StrokeState::Completed(s) if s.len() == 2));
    }

    #[test]
    fn test_press_restarts() {
        let mut b = StrokeBuilder::new();
        b.press((0, 0));
        b.drag((1, 1));
        b.press((10, 10));
        let stroke = b.release((11, 11)).unwrap();
        assert_eq!(stroke.first(), Some(Point::new(10.0, 10.0)));
        assert_eq!(stroke.len(), 2);
    }

    #[test]
    fn test_reset() {
        let mut b = StrokeBuilder::new();
        b.press((0, 0));
        b.drag((1, 1));
        b.reset();
        assert_eq!(b.state(), &StrokeState::Idle);
        assert!(b.pending().is_empty());
    }
}
