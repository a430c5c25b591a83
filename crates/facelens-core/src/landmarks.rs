//! Fixed-schema landmark set and the raw measurements derived from it.
//!
//! Indices follow the MediaPipe Face Mesh numbering. The mapping is part of
//! the output contract: moving any index changes every downstream score.

use crate::geometry::{self, distance, Point};
use crate::region::Rect;
use thiserror::Error;

/// Number of points in a Face Mesh landmark set (478 with iris refinement).
pub const LANDMARK_COUNT: usize = 468;

// --- Landmark indices ---
pub const NOSE_TIP: usize = 1;
pub const NOSE_BASE: usize = 2;
pub const NOSE_BRIDGE: usize = 6;
pub const FOREHEAD_TOP: usize = 10;
pub const UPPER_LIP: usize = 13;
pub const NOSE_TOP: usize = 19;
pub const LEFT_EYE_OUTER: usize = 33;
pub const MOUTH_LEFT: usize = 61;
pub const NOSTRIL_LEFT: usize = 98;
pub const FOREHEAD_LEFT: usize = 109;
pub const LEFT_EYE_INNER: usize = 133;
pub const LEFT_EYE_BOTTOM: usize = 145;
pub const CHIN: usize = 152;
pub const LEFT_EYE_TOP: usize = 159;
pub const NASION: usize = 168;
pub const CHEEKBONE_LEFT: usize = 205;
pub const FACE_LEFT: usize = 234;
pub const RIGHT_EYE_OUTER: usize = 263;
pub const MOUTH_RIGHT: usize = 291;
pub const NOSTRIL_RIGHT: usize = 327;
pub const FOREHEAD_RIGHT: usize = 338;
pub const RIGHT_EYE_INNER: usize = 362;
pub const RIGHT_EYE_BOTTOM: usize = 374;
pub const RIGHT_EYE_TOP: usize = 386;
pub const CHEEKBONE_RIGHT: usize = 425;
pub const FACE_RIGHT: usize = 454;

/// Left/right point pairs sampled for symmetry, measured against the nose tip.
pub const SYMMETRY_PAIRS: [(usize, usize); 4] = [(33, 362), (130, 359), (234, 454), (127, 356)];

/// Hair region extends this fraction of the face height above the forehead.
const HAIR_REGION_HEIGHT_FRACTION: f64 = 0.3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LandmarkError {
    #[error("landmark set too small: expected at least {expected} points, got {actual}")]
    InsufficientLandmarks { expected: usize, actual: usize },
}

/// Ordered landmark points in image-pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Point>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point>) -> Result<Self, LandmarkError> {
        if points.len() < LANDMARK_COUNT {
            return Err(LandmarkError::InsufficientLandmarks {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Point at a schema index. Every index used by this crate is below
    /// [`LANDMARK_COUNT`], which `new` guarantees.
    pub fn at(&self, index: usize) -> Point {
        self.points[index]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn dist(&self, a: usize, b: usize) -> f64 {
        distance(self.at(a), self.at(b))
    }
}

impl TryFrom<Vec<Point>> for LandmarkSet {
    type Error = LandmarkError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

/// Horizontal offsets of one symmetry pair from the nose tip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetryOffset {
    pub left: f64,
    pub right: f64,
}

/// Distances and angles read directly off the landmark set.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMeasurements {
    pub face_width: f64,
    pub face_height: f64,
    pub jaw_width: f64,
    pub cheekbone_width: f64,
    pub forehead_width: f64,
    pub nose_width: f64,
    pub mouth_width: f64,
    pub left_eye_width: f64,
    pub right_eye_width: f64,
    pub eye_distance: f64,
    /// Inner-corner direction seen from the outer corner, left eye.
    pub left_eye_angle_deg: f64,
    /// Inner-corner direction seen from the outer corner, right eye.
    pub right_eye_angle_deg: f64,
    pub symmetry_offsets: [SymmetryOffset; 4],
}

impl RawMeasurements {
    pub fn face_ratio(&self) -> f64 {
        geometry::ratio(self.face_height, self.face_width)
    }

    pub fn jaw_ratio(&self) -> f64 {
        geometry::ratio(self.jaw_width, self.face_width)
    }

    pub fn cheekbone_ratio(&self) -> f64 {
        geometry::ratio(self.cheekbone_width, self.face_width)
    }

    pub fn forehead_ratio(&self) -> f64 {
        geometry::ratio(self.forehead_width, self.face_width)
    }

    pub fn nose_ratio(&self) -> f64 {
        geometry::ratio(self.nose_width, self.face_width)
    }

    pub fn avg_eye_width(&self) -> f64 {
        (self.left_eye_width + self.right_eye_width) / 2.0
    }

    pub fn eye_ratio(&self) -> f64 {
        geometry::ratio(self.avg_eye_width(), self.face_width)
    }

    pub fn eye_spacing_ratio(&self) -> f64 {
        geometry::ratio(self.eye_distance, self.face_width)
    }
}

/// Derive the raw measurement set from a landmark set.
pub fn extract(landmarks: &LandmarkSet) -> RawMeasurements {
    let nose_x = landmarks.at(NOSE_TIP).x;
    let symmetry_offsets = SYMMETRY_PAIRS.map(|(l, r)| SymmetryOffset {
        left: (landmarks.at(l).x - nose_x).abs(),
        right: (landmarks.at(r).x - nose_x).abs(),
    });

    RawMeasurements {
        face_width: landmarks.dist(FACE_LEFT, FACE_RIGHT),
        face_height: landmarks.dist(FOREHEAD_TOP, CHIN),
        // Same pair as the face width; the jawline score depends on it.
        jaw_width: landmarks.dist(FACE_LEFT, FACE_RIGHT),
        cheekbone_width: landmarks.dist(CHEEKBONE_LEFT, CHEEKBONE_RIGHT),
        forehead_width: landmarks.dist(FOREHEAD_LEFT, FOREHEAD_RIGHT),
        nose_width: landmarks.dist(NOSTRIL_LEFT, NOSTRIL_RIGHT),
        mouth_width: landmarks.dist(MOUTH_LEFT, MOUTH_RIGHT),
        left_eye_width: landmarks.dist(LEFT_EYE_OUTER, LEFT_EYE_INNER),
        right_eye_width: landmarks.dist(RIGHT_EYE_INNER, RIGHT_EYE_OUTER),
        eye_distance: landmarks.dist(LEFT_EYE_INNER, RIGHT_EYE_INNER),
        left_eye_angle_deg: geometry::direction_deg(
            landmarks.at(LEFT_EYE_OUTER),
            landmarks.at(LEFT_EYE_INNER),
        ),
        right_eye_angle_deg: geometry::direction_deg(
            landmarks.at(RIGHT_EYE_OUTER),
            landmarks.at(RIGHT_EYE_INNER),
        ),
        symmetry_offsets,
    }
}

/// Cheek area between the eyes and the upper lip, used for skin statistics.
pub fn skin_region(landmarks: &LandmarkSet) -> Rect {
    let left_eye = landmarks.at(LEFT_EYE_OUTER);
    let right_eye = landmarks.at(RIGHT_EYE_INNER);
    let top = landmarks.at(NASION).y;
    Rect {
        x: left_eye.x.min(right_eye.x),
        y: top,
        width: (right_eye.x - left_eye.x).abs(),
        height: landmarks.at(UPPER_LIP).y - top,
    }
}

/// Band above the forehead line, used for hair statistics.
pub fn hair_region(landmarks: &LandmarkSet, face_height: f64) -> Rect {
    let left = landmarks.at(FOREHEAD_LEFT).x;
    let forehead_y = landmarks.at(FOREHEAD_TOP).y;
    let top = (forehead_y - face_height * HAIR_REGION_HEIGHT_FRACTION).max(0.0);
    Rect {
        x: left,
        y: top,
        width: landmarks.at(FOREHEAD_RIGHT).x - left,
        height: forehead_y - top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::synthetic_landmarks;

    #[test]
    fn test_rejects_short_landmark_set() {
        let err = LandmarkSet::new(vec![Point::default(); 68]).unwrap_err();
        assert_eq!(
            err,
            LandmarkError::InsufficientLandmarks { expected: LANDMARK_COUNT, actual: 68 }
        );
    }

    #[test]
    fn test_accepts_iris_refined_set() {
        let set = LandmarkSet::try_from(vec![Point::default(); 478]).unwrap();
        assert_eq!(set.len(), 478);
    }

    #[test]
    fn test_extract_widths() {
        let m = extract(&synthetic_landmarks());
        assert!((m.face_width - 200.0).abs() < 1e-9);
        assert!((m.face_height - 240.0).abs() < 1e-9);
        assert_eq!(m.jaw_width, m.face_width);
        assert!((m.cheekbone_width - 120.0).abs() < 1e-9);
        assert!((m.forehead_width - 120.0).abs() < 1e-9);
        assert!((m.nose_width - 40.0).abs() < 1e-9);
        assert!((m.mouth_width - 60.0).abs() < 1e-9);
        assert!((m.eye_distance - 60.0).abs() < 1e-9);
        assert!((m.avg_eye_width() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_extract_ratios() {
        let m = extract(&synthetic_landmarks());
        assert!((m.face_ratio() - 1.2).abs() < 1e-9);
        assert!((m.nose_ratio() - 0.2).abs() < 1e-9);
        assert!((m.eye_ratio() - 0.2).abs() < 1e-9);
        assert!((m.eye_spacing_ratio() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_extract_eye_angles() {
        let m = extract(&synthetic_landmarks());
        // Left eye inner corner lies to the right of the outer corner, right
        // eye inner corner to the left.
        assert!(m.left_eye_angle_deg.abs() < 1e-9);
        assert!((m.right_eye_angle_deg - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_symmetry_offsets() {
        let m = extract(&synthetic_landmarks());
        // First pair is outer corner (33) against inner corner (362).
        assert_eq!(m.symmetry_offsets[0], SymmetryOffset { left: 70.0, right: 30.0 });
        for offset in &m.symmetry_offsets[1..] {
            assert!((offset.left - offset.right).abs() < 1e-9, "{offset:?}");
        }
    }

    #[test]
    fn test_collapsed_face_ratios_finite() {
        let mut points = synthetic_landmarks().points().to_vec();
        points[FACE_RIGHT] = points[FACE_LEFT];
        let m = extract(&LandmarkSet::new(points).unwrap());
        assert_eq!(m.face_width, 0.0);
        assert!(m.face_ratio().is_finite());
        assert!(m.nose_ratio().is_finite());
    }

    #[test]
    fn test_skin_region() {
        let r = skin_region(&synthetic_landmarks());
        assert_eq!(r, Rect { x: 130.0, y: 190.0, width: 100.0, height: 95.0 });
    }

    #[test]
    fn test_hair_region_clamped_at_top() {
        let lm = synthetic_landmarks();
        let r = hair_region(&lm, 240.0);
        assert!((r.y - 28.0).abs() < 1e-9);
        assert!((r.height - 72.0).abs() < 1e-9);
        assert_eq!(r.width, 120.0);

        // A face taller than its forehead offset pins the band at y = 0.
        let r = hair_region(&lm, 1000.0);
        assert_eq!(r.y, 0.0);
        assert_eq!(r.height, 100.0);
    }
}
