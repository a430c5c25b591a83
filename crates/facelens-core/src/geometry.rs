//! 2D point math shared by the landmark and classification stages.

use serde::{Deserialize, Serialize};

/// Smallest denominator used for ratios between measured lengths.
pub const RATIO_EPSILON: f64 = 1e-6;

/// A point in image-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    ((p1.x - p2.x).powi(2) + (p1.y - p2.y).powi(2)).sqrt()
}

/// Interior angle at `p2` of the triangle `p1, p2, p3`, in degrees.
///
/// Uses the law of cosines. Returns `None` when either edge meeting at `p2`
/// has zero length, since the angle is undefined there.
pub fn angle_deg(p1: Point, p2: Point, p3: Point) -> Option<f64> {
    let a = distance(p2, p3);
    let b = distance(p1, p3);
    let c = distance(p1, p2);
    if a == 0.0 || c == 0.0 {
        return None;
    }
    // Rounding can push the cosine a hair outside [-1, 1] for collinear points.
    let cos = ((a * a + c * c - b * b) / (2.0 * a * c)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Direction of the vector `from -> to` relative to the +x axis, in degrees.
pub fn direction_deg(from: Point, to: Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees()
}

/// `num / den` with the denominator floored at [`RATIO_EPSILON`].
///
/// Every ratio between two measured lengths goes through here so that a
/// collapsed landmark pair never turns into NaN or infinity downstream.
pub fn ratio(num: f64, den: f64) -> f64 {
    num / den.max(RATIO_EPSILON)
}
