//! Recognize regression test
//!
//! 記録済みジェスチャーをテンプレートとして、変形・ノイズを加えたストロークの認識をテスト。

use unistroke_core::Stroke;
use unistroke_recog::{Recognizer, RecognizerOptions};
use unistroke_test::{
    RegParams, StrokeRng, circle, jitter, load_test_gesture, rotated, scaled, translated,
};

const LIBRARY: [&str; 4] = ["circle01.xml", "check01.xml", "triangle01.xml", "zigzag01.xml"];

fn library() -> Recognizer {
    let mut recog = Recognizer::new(RecognizerOptions::default()).unwrap();
    for file in LIBRARY {
        let record = load_test_gesture(file).expect("load library gesture");
        recog.add_template(record.name, &record.stroke).unwrap();
    }
    recog
}

#[test]
fn recognize_reg() {
    let mut rp = RegParams::new("recognize");
    let recog = library();
    rp.compare_values(4.0, recog.len() as f64, 0.0);

    // --- Test 1: Each template recognizes itself ---
    for file in LIBRARY {
        let record = load_test_gesture(file).unwrap();
        let result = recog.recognize(&record.stroke).unwrap();
        rp.compare_strings(record.name.as_bytes(), result.name.unwrap_or_default().as_bytes());
        rp.compare_values(1.0, result.score, 1e-6);
    }

    // --- Test 2: Moved, resized and noisy variants ---
    let mut rng = StrokeRng::new(2024);
    for file in LIBRARY {
        let record = load_test_gesture(file).unwrap();
        let c = record.stroke.centroid().unwrap();
        for (angle_deg, factor) in [(15.0, 0.6), (-25.0, 1.4), (40.0, 0.9)] {
            let s = rotated(&record.stroke, f64::to_radians(angle_deg), c.x, c.y);
            let s = scaled(&s, factor, c.x, c.y);
            let s = translated(&s, 123.0, -45.0);
            let s = jitter(&s, 2.0, &mut rng);

            let result = recog.recognize(&s).unwrap();
            let got = result.name.clone().unwrap_or_default();
            if !rp.compare_strings(record.name.as_bytes(), got.as_bytes()) {
                eprintln!("  {file} at {angle_deg} deg x{factor}: got '{got}'");
            }
            rp.compare_true(result.score > 0.8);
            rp.compare_true(result.score <= 1.0);
        }
    }

    // --- Test 3: Second recording of a circle ---
    let other = load_test_gesture("circle02.xml").unwrap();
    let result = recog.recognize(&other.stroke).unwrap();
    rp.compare_strings(b"circle", result.name.unwrap_or_default().as_bytes());
    eprintln!("  circle02 score = {:.4}", result.score);

    // --- Test 4: Octagon scaled and rotated ---
    let mut small = Recognizer::new(RecognizerOptions::default()).unwrap();
    small.add_template("circle", &circle(0.0, 0.0, 100.0, 8)).unwrap();
    let record = load_test_gesture("check01.xml").unwrap();
    small.add_template("check", &record.stroke).unwrap();

    let candidate = rotated(&circle(0.0, 0.0, 90.0, 8), f64::to_radians(10.0), 0.0, 0.0);
    let candidate = translated(&candidate, 300.0, 200.0);
    let result = small.recognize(&candidate).unwrap();
    rp.compare_strings(b"circle", result.name.clone().unwrap_or_default().as_bytes());
    rp.compare_true(result.score > 0.9);
    rp.compare_values(0.0, result.template_index.unwrap_or(9) as f64, 0.0);

    // --- Test 5: Narrow search window still matches ---
    let narrow = {
        let mut r = Recognizer::new(
            RecognizerOptions::new()
                .with_angle_range(5.0)
                .with_angle_precision(0.5),
        )
        .unwrap();
        for file in LIBRARY {
            let record = load_test_gesture(file).unwrap();
            r.add_template(record.name, &record.stroke).unwrap();
        }
        r
    };
    let tri = load_test_gesture("triangle01.xml").unwrap();
    let result = narrow.recognize(&tri.stroke).unwrap();
    rp.compare_strings(b"triangle", result.name.unwrap_or_default().as_bytes());

    // --- Test 6: Empty library and degenerate input ---
    let empty = Recognizer::new(RecognizerOptions::default()).unwrap();
    let result = empty.recognize(&tri.stroke).unwrap();
    rp.compare_true(result.name.is_none());
    rp.compare_values(0.0, result.score, 0.0);

    let dot: Stroke = [(250.0, 250.0), (250.0, 250.0)].into_iter().collect();
    rp.compare_true(recog.recognize(&dot).unwrap_err().is_degenerate_input());
    let line: Stroke = [(0.0, 0.0), (100.0, 100.0)].into_iter().collect();
    rp.compare_true(recog.recognize(&line).unwrap_err().is_degenerate_input());

    // Short strokes are accepted; the point gate is the caller's
    let short: Stroke = [(0.0, 0.0), (40.0, 60.0), (80.0, 0.0)].into_iter().collect();
    rp.compare_true(!recog.has_enough_points(&short));
    rp.compare_true(recog.recognize(&short).is_ok());

    assert!(rp.cleanup(), "recognize regression test failed");
}
