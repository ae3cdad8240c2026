//! unistroke-test - Regression test framework for unistroke
//!
//! This crate provides a small regression test harness supporting three
//! modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use unistroke_test::{RegParams, RegTestMode};
//!
//! let mut rp = RegParams::new("resample");
//! rp.compare_values(64.0, resampled.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;
mod shapes;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
pub use shapes::{StrokeRng, check_mark, circle, jitter, rotated, scaled, translated, zigzag};

use unistroke_core::GestureRecord;

/// Load a gesture file from the test data directory
///
/// # Arguments
///
/// * `name` - Gesture filename (e.g., "circle01.xml")
pub fn load_test_gesture(name: &str) -> TestResult<GestureRecord> {
    let path = test_data_path(name);
    GestureRecord::read_from_file(&path).map_err(|e| TestError::GestureLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // unistroke-test is at crates/unistroke-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the gesture data directory
pub fn test_data_dir() -> String {
    format!("{}/tests/data/gestures", workspace_root())
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/{}", test_data_dir(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Fresh, empty scratch directory under regout for tests that write files
pub fn scratch_dir(name: &str) -> String {
    let dir = format!("{}/{}", regout_dir(), name);
    let _ = std::fs::remove_dir_all(&dir);
    let _ = std::fs::create_dir_all(&dir);
    dir
}
