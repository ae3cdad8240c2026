//! Resample regression test
//!
//! 弧長リサンプリングの点数・等間隔性・端点保存をテスト。

use unistroke_core::Stroke;
use unistroke_test::{RegParams, StrokeRng, check_mark, circle, load_test_gesture, zigzag};
use unistroke_transform::resample::{resample, spacing};

#[test]
fn resample_reg() {
    let mut rp = RegParams::new("resample");

    let recorded = load_test_gesture("check01.xml").expect("load check01.xml");
    let mut rng = StrokeRng::new(17);
    let shapes: Vec<(&str, Stroke)> = vec![
        ("line", [(0.0, 0.0), (100.0, 0.0)].into_iter().collect()),
        ("circle", circle(200.0, 200.0, 80.0, 12)),
        ("zigzag", zigzag(10.0, 10.0, 300.0, 60.0, 5)),
        ("check", check_mark(50.0, 200.0, 120.0)),
        ("walk", rng.random_walk(200, 300.0, 300.0, 4.0)),
        ("recorded", recorded.stroke),
    ];

    // --- Test 1: Exact output length for every target ---
    for (name, stroke) in &shapes {
        for n in [2usize, 3, 16, 64, 128, 500] {
            let out = resample(stroke, n).unwrap();
            if !rp.compare_values(n as f64, out.len() as f64, 0.0) {
                eprintln!("  {name}: n = {n}, got {}", out.len());
            }
        }
    }

    // --- Test 2: Spacing and endpoints ---
    // Chords never exceed the arc interval; on a straight line they match it
    for (name, stroke) in &shapes {
        let out = resample(stroke, 64).unwrap();
        let interval = stroke.path_length() / 63.0;
        let longest = spacing(&out).into_iter().fold(0.0, f64::max);
        if !rp.compare_true(longest <= interval * (1.0 + 1e-9)) {
            eprintln!("  {name}: gap {longest} exceeds interval {interval}");
        }
        let first = out.first().unwrap();
        let last = out.last().unwrap();
        rp.compare_values(0.0, first.distance(&stroke.first().unwrap()), 1e-9);
        rp.compare_values(0.0, last.distance(&stroke.last().unwrap()), interval * 1e-3);
    }

    let line = &shapes[0].1;
    let out = resample(line, 64).unwrap();
    for gap in spacing(&out) {
        rp.compare_values(100.0 / 63.0, gap, 1e-9);
    }

    // --- Test 3: Duplicate points do not disturb the walk ---
    let dup: Stroke = [(0.0, 0.0), (0.0, 0.0), (50.0, 0.0), (50.0, 0.0), (100.0, 0.0)]
        .into_iter()
        .collect();
    let out = resample(&dup, 5).unwrap();
    for (i, p) in out.iter().enumerate() {
        rp.compare_values(25.0 * i as f64, p.x, 1e-9);
        rp.compare_values(0.0, p.y, 0.0);
    }

    // --- Test 4: Invalid input ---
    let line: Stroke = [(0.0, 0.0), (1.0, 1.0)].into_iter().collect();
    rp.compare_true(resample(&line, 1).is_err());
    rp.compare_true(resample(&line, 0).is_err());
    let dot: Stroke = [(4.0, 4.0), (4.0, 4.0)].into_iter().collect();
    rp.compare_true(resample(&dot, 64).unwrap_err().is_degenerate());
    rp.compare_true(resample(&Stroke::new(), 64).unwrap_err().is_degenerate());

    assert!(rp.cleanup(), "resample regression test failed");
}
