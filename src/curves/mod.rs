//! Polyline smoothing for sketch strokes.

mod chaikin;

pub use chaikin::{apply_chaikin_curve, Point};
