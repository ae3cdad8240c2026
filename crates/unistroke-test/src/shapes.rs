//! Synthetic strokes for tests
//!
//! Shapes are generated in screen-like coordinates (a few hundred pixels)
//! so they resemble captured input.

use std::f64::consts::TAU;
use unistroke_core::{Point, Stroke};

/// Simple linear congruential generator for reproducible randomness
pub struct StrokeRng {
    state: u64,
}

impl StrokeRng {
    /// Create a generator from a seed
    pub fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    fn next(&mut self) -> u64 {
        // Knuth MMIX multiplier and increment
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Uniform value in [0, 1]
    pub fn next_f64(&mut self) -> f64 {
        (self.next() as f64) / (u64::MAX as f64)
    }

    /// Uniform value in [lo, hi]
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Random walk of `n` points starting at `(x0, y0)` with steps up to `step`.
    pub fn random_walk(&mut self, n: usize, x0: f64, y0: f64, step: f64) -> Stroke {
        let mut stroke = Stroke::with_capacity(n);
        let mut p = Point::new(x0, y0);
        stroke.push(p);
        for _ in 1..n {
            p = Point::new(p.x + self.range(-step, step), p.y + self.range(-step, step));
            stroke.push(p);
        }
        stroke
    }
}

/// `n` points on a circle of `radius` centred at `(cx, cy)`, starting at angle 0.
///
/// The first point is repeated at the end so the outline is closed.
pub fn circle(cx: f64, cy: f64, radius: f64, n: usize) -> Stroke {
    (0..=n)
        .map(|i| {
            let a = TAU * i as f64 / n as f64;
            (cx + radius * a.cos(), cy + radius * a.sin())
        })
        .collect()
}

/// Zigzag with `teeth` peaks spanning `width` x `height` from `(x0, y0)`.
pub fn zigzag(x0: f64, y0: f64, width: f64, height: f64, teeth: usize) -> Stroke {
    let segments = 2 * teeth;
    (0..=segments)
        .map(|i| {
            let x = x0 + width * i as f64 / segments as f64;
            let y = if i % 2 == 0 { y0 } else { y0 + height };
            (x, y)
        })
        .collect()
}

/// Check mark: short stroke down-right, long stroke up-right.
pub fn check_mark(x0: f64, y0: f64, size: f64) -> Stroke {
    [
        (x0, y0),
        (x0 + 0.15 * size, y0 + 0.2 * size),
        (x0 + 0.3 * size, y0 + 0.4 * size),
        (x0 + 0.55 * size, y0 + 0.05 * size),
        (x0 + 0.8 * size, y0 - 0.3 * size),
        (x0 + size, y0 - 0.6 * size),
    ]
    .into_iter()
    .collect()
}

/// Rotate `stroke` by `angle` radians about `(cx, cy)`.
pub fn rotated(stroke: &Stroke, angle: f64, cx: f64, cy: f64) -> Stroke {
    let (sin, cos) = angle.sin_cos();
    stroke
        .iter()
        .map(|p| {
            let dx = p.x - cx;
            let dy = p.y - cy;
            (dx * cos - dy * sin + cx, dx * sin + dy * cos + cy)
        })
        .collect()
}

/// Scale `stroke` uniformly by `factor` about `(cx, cy)`.
pub fn scaled(stroke: &Stroke, factor: f64, cx: f64, cy: f64) -> Stroke {
    stroke
        .iter()
        .map(|p| (cx + factor * (p.x - cx), cy + factor * (p.y - cy)))
        .collect()
}

/// Shift every point by `(dx, dy)`.
pub fn translated(stroke: &Stroke, dx: f64, dy: f64) -> Stroke {
    stroke.iter().map(|p| (p.x + dx, p.y + dy)).collect()
}

/// Add uniform noise of at most `amount` to every coordinate.
pub fn jitter(stroke: &Stroke, amount: f64, rng: &mut StrokeRng) -> Stroke {
    stroke
        .iter()
        .map(|p| {
            (
                p.x + rng.range(-amount, amount),
                p.y + rng.range(-amount, amount),
            )
        })
        .collect()
}
