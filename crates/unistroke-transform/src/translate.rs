//! Centroid translation

use unistroke_core::{Point, Stroke};

/// Shift every point so that the centroid of `stroke` lands on `target`.
///
/// An empty stroke is returned unchanged.
pub fn translate_to(stroke: &Stroke, target: Point) -> Stroke {
    let Some(c) = stroke.centroid() else {
        return Stroke::new();
    };
    let dx = target.x - c.x;
    let dy = target.y - c.y;
    stroke.iter().map(|p| Point::new(p.x + dx, p.y + dy)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_to_origin() {
        let s: Stroke = [(10.0, 10.0), (20.0, 10.0), (15.0, 40.0)]
            .into_iter()
            .collect();
        let r = translate_to(&s, Point::default());
        let c = r.centroid().unwrap();
        assert!(c.x.abs() < 1e-12 && c.y.abs() < 1e-12);
        // Shape unchanged
        assert!((r.path_length() - s.path_length()).abs() < 1e-9);
    }

    #[test]
    fn test_translate_to_target() {
        let s: Stroke = [(0.0, 0.0), (2.0, 2.0)].into_iter().collect();
        let r = translate_to(&s, Point::new(-5.0, 7.0));
        assert_eq!(r.get(0), Some(Point::new(-6.0, 6.0)));
        assert_eq!(r.get(1), Some(Point::new(-4.0, 8.0)));
    }
}
