//! unistroke-transform - Stroke normalization for unistroke
//!
//! This crate provides the geometric steps that bring a raw stroke into
//! canonical form:
//!
//! - Arc-length resampling to a fixed point count
//! - Indicative angle and rotation about the centroid
//! - Non-uniform scaling to a reference square
//! - Centroid translation
//! - The composed [`normalize`] pipeline
//!
//! All functions are pure and keep the drawing order of the points.

mod error;
pub mod normalize;
pub mod resample;
pub mod rotate;
pub mod scale;
pub mod translate;

pub use error::{TransformError, TransformResult};
pub use normalize::{
    DEFAULT_NUM_POINTS, DEFAULT_SIZE, NormalizeOptions, NormalizedStroke, normalize,
};
pub use resample::resample;
pub use rotate::{indicative_angle, rotate_by};
pub use scale::scale_to;
pub use translate::translate_to;
