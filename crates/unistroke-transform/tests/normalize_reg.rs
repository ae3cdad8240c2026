//! Normalize regression test
//!
//! 正規化パイプラインの事後条件と相似変換に対する不変性をテスト。

use unistroke_core::{Point, Stroke};
use unistroke_test::{
    RegParams, StrokeRng, check_mark, circle, load_test_gesture, rotated, scaled, translated,
    zigzag,
};
use unistroke_transform::{NormalizeOptions, indicative_angle, normalize};

#[test]
fn normalize_reg() {
    let mut rp = RegParams::new("normalize");

    let triangle = load_test_gesture("triangle01.xml").expect("load triangle01.xml");
    let mut rng = StrokeRng::new(5);
    let shapes: Vec<(&str, Stroke)> = vec![
        ("circle", circle(200.0, 200.0, 80.0, 16)),
        ("zigzag", zigzag(10.0, 10.0, 300.0, 60.0, 4)),
        ("check", check_mark(50.0, 200.0, 120.0)),
        ("walk", rng.random_walk(120, 300.0, 300.0, 6.0)),
        ("triangle", triangle.stroke),
    ];

    // --- Test 1: Postconditions with default options ---
    let opts = NormalizeOptions::default();
    for (name, stroke) in &shapes {
        let n = normalize(stroke, &opts).unwrap();
        rp.compare_values(64.0, n.len() as f64, 0.0);

        let c = n.as_stroke().centroid().unwrap();
        rp.compare_values(0.0, c.x, 1e-9);
        rp.compare_values(0.0, c.y, 1e-9);

        let (x0, y0, x1, y1) = n.as_stroke().bounding_box().unwrap();
        rp.compare_values(250.0, x1 - x0, 1e-9);
        rp.compare_values(250.0, y1 - y0, 1e-9);

        let angle = indicative_angle(n.as_stroke()).unwrap();
        if !rp.compare_values(0.0, angle, 1e-9) {
            eprintln!("  {name}: indicative angle {angle} after normalization");
        }
    }

    // --- Test 2: Custom options ---
    let custom = NormalizeOptions::new()
        .with_num_points(32)
        .with_size(100.0)
        .with_origin(Point::new(50.0, -20.0));
    let n = normalize(&shapes[0].1, &custom).unwrap();
    rp.compare_values(32.0, n.len() as f64, 0.0);
    let c = n.as_stroke().centroid().unwrap();
    rp.compare_values(50.0, c.x, 1e-9);
    rp.compare_values(-20.0, c.y, 1e-9);
    let (x0, _, x1, _) = n.as_stroke().bounding_box().unwrap();
    rp.compare_values(100.0, x1 - x0, 1e-9);

    // --- Test 3: Invariance under rotation, uniform scale and translation ---
    for (name, stroke) in &shapes {
        let base = normalize(stroke, &opts).unwrap();
        let c = stroke.centroid().unwrap();
        for (angle_deg, factor, dx, dy) in [
            (10.0, 1.0, 0.0, 0.0),
            (-35.0, 0.5, 40.0, -15.0),
            (90.0, 2.5, -300.0, 120.0),
            (0.0, 0.2, 7.0, 7.0),
        ] {
            let moved = rotated(stroke, f64::to_radians(angle_deg), c.x, c.y);
            let moved = scaled(&moved, factor, c.x, c.y);
            let moved = translated(&moved, dx, dy);
            let n = normalize(&moved, &opts).unwrap();
            if !rp.compare_strokes(base.as_stroke(), n.as_stroke(), 1e-6) {
                eprintln!("  {name}: not invariant under ({angle_deg}, {factor}, {dx}, {dy})");
            }
        }
    }

    // --- Test 4: Degenerate input ---
    let line: Stroke = [(0.0, 0.0), (50.0, 50.0), (100.0, 100.0)].into_iter().collect();
    rp.compare_true(normalize(&line, &opts).unwrap_err().is_degenerate());
    let dot: Stroke = [(1.0, 1.0), (1.0, 1.0)].into_iter().collect();
    rp.compare_true(normalize(&dot, &opts).unwrap_err().is_degenerate());
    rp.compare_true(normalize(&Stroke::new(), &opts).unwrap_err().is_degenerate());

    // Invalid options are not degenerate input
    let bad = NormalizeOptions::new().with_size(-1.0);
    let err = normalize(&shapes[0].1, &bad).unwrap_err();
    rp.compare_true(!err.is_degenerate());

    assert!(rp.cleanup(), "normalize regression test failed");
}
