//! Shared fixtures for unit tests.

use crate::geometry::Point;
use crate::landmarks::{LandmarkSet, LANDMARK_COUNT};
use image::{Rgb, RgbImage};

/// Landmarks the crate reads, placed on a frontal 200×240 px face whose
/// bounding box spans x ∈ [100, 300], y ∈ [100, 340].
const SYNTHETIC_FACE: [(usize, f64, f64); 30] = [
    (1, 200.0, 250.0),   // nose tip
    (2, 200.0, 262.0),   // nose base
    (6, 200.0, 200.0),   // nose bridge
    (10, 200.0, 100.0),  // forehead top
    (13, 200.0, 285.0),  // upper lip
    (19, 200.0, 225.0),  // nose top
    (33, 130.0, 200.0),  // left eye outer
    (61, 170.0, 290.0),  // mouth left
    (98, 180.0, 258.0),  // nostril left
    (109, 140.0, 130.0), // forehead left
    (127, 105.0, 190.0),
    (130, 125.0, 200.0),
    (133, 170.0, 200.0), // left eye inner
    (145, 150.0, 208.0), // left eye bottom
    (152, 200.0, 340.0), // chin
    (159, 150.0, 192.0), // left eye top
    (168, 200.0, 190.0), // nasion
    (205, 140.0, 240.0), // cheekbone left
    (234, 100.0, 220.0), // face left
    (263, 270.0, 200.0), // right eye outer
    (291, 230.0, 290.0), // mouth right
    (327, 220.0, 258.0), // nostril right
    (338, 260.0, 130.0), // forehead right
    (356, 295.0, 190.0),
    (359, 275.0, 200.0),
    (362, 230.0, 200.0), // right eye inner
    (374, 250.0, 208.0), // right eye bottom
    (386, 250.0, 192.0), // right eye top
    (425, 260.0, 240.0), // cheekbone right
    (454, 300.0, 220.0), // face right
];

pub(crate) fn synthetic_points() -> Vec<Point> {
    let mut points = vec![Point::new(200.0, 250.0); LANDMARK_COUNT];
    for (idx, x, y) in SYNTHETIC_FACE {
        points[idx] = Point::new(x, y);
    }
    points
}

pub(crate) fn synthetic_landmarks() -> LandmarkSet {
    LandmarkSet::new(synthetic_points()).expect("synthetic set has full schema")
}

/// Synthetic landmarks with selected points moved.
pub(crate) fn landmarks_with(overrides: &[(usize, f64, f64)]) -> LandmarkSet {
    let mut points = synthetic_points();
    for &(idx, x, y) in overrides {
        points[idx] = Point::new(x, y);
    }
    LandmarkSet::new(points).expect("synthetic set has full schema")
}

pub(crate) fn uniform_image(w: u32, h: u32, rgb: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(w, h, Rgb(rgb))
}

/// Vertical stripes alternating between two colors, one pixel wide.
pub(crate) fn striped_image(w: u32, h: u32, a: [u8; 3], b: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(w, h, |x, _| if x % 2 == 0 { Rgb(a) } else { Rgb(b) })
}
