use serde::{Deserialize, Serialize};

use crate::math::Vector;

/// 2D path vertex
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear blend: `self * (1 - t) + other * t`
    #[inline]
    fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x * (1.0 - t) + other.x * t,
            y: self.y * (1.0 - t) + other.y * t,
        }
    }
}

impl From<Vector> for Point {
    fn from(v: Vector) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector {
    fn from(p: Point) -> Self {
        Vector::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Smooth an open polyline with Chaikin corner cutting
///
/// Every pass keeps both endpoints and replaces each segment `(p0, p1)` with
/// the points at 1/4 and 3/4 along it, so `n` points become `2(n - 1) + 2`.
/// Paths with fewer than two points are returned as-is.
pub fn apply_chaikin_curve(points: &[Point], iterations: u32) -> Vec<Point> {
    let mut current = points.to_vec();
    if current.len() < 2 {
        return current;
    }

    for _ in 0..iterations {
        current = chaikin_pass(&current);
    }
    current
}

fn chaikin_pass(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    let mut out = Vec::with_capacity(2 * (n - 1) + 2);

    out.push(points[0]);
    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        out.push(p0.lerp(p1, 0.25));
        out.push(p0.lerp(p1, 0.75));
    }
    out.push(points[n - 1]);

    out
}
