//! Categorical descriptors derived from landmark ratios.
//!
//! Every decision tree ends in an unconditional branch, so each input maps to
//! exactly one label. Face shape, canthal tilt and nose shape add a small
//! offset computed from raw landmark coordinates before branching; the
//! constants in those offsets (mod 100, mod 10, mod 20) are calibration
//! artifacts kept for output compatibility.

use crate::geometry::{direction_deg, ratio};
use crate::landmarks::{self, LandmarkSet, RawMeasurements};
use crate::types::{
    CanthalTilt, Classifications, EyeType, FaceShape, MaxillaDevelopment, NoseShape,
};

/// Classify all five descriptors.
pub fn classify(raw: &RawMeasurements, lm: &LandmarkSet) -> Classifications {
    Classifications {
        face_shape: face_shape(raw, lm),
        eye_type: eye_type(raw, lm),
        canthal_tilt: canthal_tilt(lm),
        maxilla_development: maxilla_development(raw.cheekbone_ratio(), lm),
        nose_shape: nose_shape(raw.nose_ratio(), raw.face_ratio(), lm),
    }
}

// --- Face shape ---

/// `((x10 + y152 + x234) mod 100) / 1000`, in [0, 0.1).
pub fn face_shape_offset(lm: &LandmarkSet) -> f64 {
    let sum = lm.at(landmarks::FOREHEAD_TOP).x
        + lm.at(landmarks::CHIN).y
        + lm.at(landmarks::FACE_LEFT).x;
    sum % 100.0 / 1000.0
}

pub fn face_shape(raw: &RawMeasurements, lm: &LandmarkSet) -> FaceShape {
    decide_face_shape(
        raw.face_ratio(),
        raw.jaw_ratio(),
        raw.cheekbone_ratio(),
        face_shape_offset(lm),
    )
}

pub fn decide_face_shape(
    face_ratio: f64,
    jaw_ratio: f64,
    cheekbone_ratio: f64,
    offset: f64,
) -> FaceShape {
    let face = face_ratio + offset;
    let jaw = jaw_ratio + offset * 0.1;
    let cheek = cheekbone_ratio + offset * 0.08;
    let jaw_cheek_diff = (jaw - cheek).abs();

    tracing::debug!(face, jaw, cheek, offset, "face shape ratios");

    if face > 1.38 {
        FaceShape::Oblong
    } else if face < 1.12 {
        if jaw_cheek_diff < 0.03 {
            FaceShape::Square
        } else {
            FaceShape::Round
        }
    } else if face > 1.28 {
        if cheek > jaw + 0.02 {
            FaceShape::Heart
        } else {
            FaceShape::Oval
        }
    } else if face > 1.18 {
        if jaw > cheek + 0.03 {
            FaceShape::Diamond
        } else {
            FaceShape::Rectangular
        }
    } else if jaw_cheek_diff > 0.04 {
        FaceShape::Triangle
    } else {
        FaceShape::Oval
    }
}

// --- Eye type ---

/// Ratios the eye-type tree branches on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeRatios {
    /// Average eye width over face width.
    pub eye_to_face: f64,
    /// Inner-corner distance over average eye width.
    pub spacing: f64,
    /// Width mismatch over average eye width.
    pub asymmetry: f64,
    /// Average eye width over average eye height.
    pub aspect: f64,
}

impl EyeRatios {
    pub fn from_landmarks(raw: &RawMeasurements, lm: &LandmarkSet) -> Self {
        let avg_width = raw.avg_eye_width();
        let left_height =
            (lm.at(landmarks::LEFT_EYE_TOP).y - lm.at(landmarks::LEFT_EYE_BOTTOM).y).abs();
        let right_height =
            (lm.at(landmarks::RIGHT_EYE_TOP).y - lm.at(landmarks::RIGHT_EYE_BOTTOM).y).abs();
        let avg_height = (left_height + right_height) / 2.0;

        Self {
            eye_to_face: raw.eye_ratio(),
            spacing: ratio(raw.eye_distance, avg_width),
            asymmetry: ratio((raw.left_eye_width - raw.right_eye_width).abs(), avg_width),
            aspect: ratio(avg_width, avg_height),
        }
    }
}

pub fn eye_type(raw: &RawMeasurements, lm: &LandmarkSet) -> EyeType {
    decide_eye_type(&EyeRatios::from_landmarks(raw, lm))
}

pub fn decide_eye_type(r: &EyeRatios) -> EyeType {
    tracing::debug!(
        eye_to_face = r.eye_to_face,
        spacing = r.spacing,
        asymmetry = r.asymmetry,
        aspect = r.aspect,
        "eye ratios"
    );

    if r.eye_to_face < 0.27 && r.aspect > 3.5 {
        EyeType::HunterEyes
    } else if r.eye_to_face < 0.30 && r.spacing > 3.3 {
        EyeType::Narrow
    } else if r.eye_to_face > 0.36 {
        if r.spacing < 2.7 {
            EyeType::LargeAndClose
        } else {
            EyeType::Large
        }
    } else if r.aspect > 4.0 {
        EyeType::Elongated
    } else if r.aspect < 3.0 {
        EyeType::Round
    } else if r.asymmetry > 0.1 {
        EyeType::Asymmetric
    } else {
        EyeType::Almond
    }
}

// --- Canthal tilt ---

/// Average inner-to-outer corner direction of both eyes, in degrees, plus
/// `0.5 · (((x33 + x263 + y133 + y362) mod 10) − 5)`.
pub fn canthal_tilt_deg(lm: &LandmarkSet) -> f64 {
    let left_outer = lm.at(landmarks::LEFT_EYE_OUTER);
    let left_inner = lm.at(landmarks::LEFT_EYE_INNER);
    let right_inner = lm.at(landmarks::RIGHT_EYE_INNER);
    let right_outer = lm.at(landmarks::RIGHT_EYE_OUTER);

    let left = direction_deg(left_inner, left_outer);
    let right = direction_deg(right_inner, right_outer);
    let avg = (left + right) / 2.0;

    let variability = (left_outer.x + right_outer.x + left_inner.y + right_inner.y) % 10.0 - 5.0;
    let tilt = avg + variability * 0.5;

    tracing::debug!(left, right, avg, variability, tilt, "canthal tilt");
    tilt
}

pub fn canthal_tilt(lm: &LandmarkSet) -> CanthalTilt {
    decide_canthal_tilt(canthal_tilt_deg(lm))
}

pub fn decide_canthal_tilt(tilt: f64) -> CanthalTilt {
    if tilt < -3.0 {
        CanthalTilt::Positive
    } else if tilt > 3.0 {
        CanthalTilt::Negative
    } else if tilt.abs() < 1.0 {
        CanthalTilt::Neutral
    } else if tilt < 0.0 {
        CanthalTilt::SlightlyPositive
    } else {
        CanthalTilt::SlightlyNegative
    }
}

// --- Maxilla ---

pub fn maxilla_development(cheekbone_ratio: f64, lm: &LandmarkSet) -> MaxillaDevelopment {
    let cheek_l = lm.at(landmarks::CHEEKBONE_LEFT);
    let cheek_r = lm.at(landmarks::CHEEKBONE_RIGHT);
    let avg_cheek_y = (cheek_l.y + cheek_r.y) / 2.0;

    let mid_face = (lm.at(landmarks::NOSE_BASE).y - avg_cheek_y).abs();
    let lower_face = (lm.at(landmarks::CHIN).y - lm.at(landmarks::UPPER_LIP).y).abs();
    let jaw_width = (lm.at(landmarks::FACE_LEFT).x - lm.at(landmarks::FACE_RIGHT).x).abs();
    let cheek_width = (cheek_l.x - cheek_r.x).abs();

    decide_maxilla(
        cheekbone_ratio,
        ratio(mid_face, lower_face),
        ratio(cheek_width, jaw_width),
    )
}

pub fn decide_maxilla(
    cheekbone_ratio: f64,
    mid_to_lower: f64,
    cheek_to_jaw: f64,
) -> MaxillaDevelopment {
    tracing::debug!(cheekbone_ratio, mid_to_lower, cheek_to_jaw, "maxilla ratios");

    if cheekbone_ratio > 0.70 && mid_to_lower > 1.1 && cheek_to_jaw > 1.05 {
        MaxillaDevelopment::VeryStrong
    } else if cheekbone_ratio > 0.65 && mid_to_lower > 0.9 {
        MaxillaDevelopment::Strong
    } else if cheekbone_ratio < 0.58 || mid_to_lower < 0.7 {
        MaxillaDevelopment::Weak
    } else if cheekbone_ratio < 0.62 && mid_to_lower < 0.85 {
        MaxillaDevelopment::BelowAverage
    } else {
        MaxillaDevelopment::Neutral
    }
}

// --- Nose ---

/// Pixel-space nose metrics the nose-shape tree branches on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoseMetrics {
    pub height: f64,
    pub bridge_curvature: f64,
    pub tip_projection: f64,
    pub nostril_asymmetry: f64,
}

impl NoseMetrics {
    pub fn from_landmarks(lm: &LandmarkSet) -> Self {
        let tip = lm.at(landmarks::NOSE_TIP);
        let bridge = lm.at(landmarks::NOSE_BRIDGE);
        let top = lm.at(landmarks::NOSE_TOP);
        let left = lm.at(landmarks::NOSTRIL_LEFT);
        let right = lm.at(landmarks::NOSTRIL_RIGHT);
        let base = lm.at(landmarks::NOSE_BASE);

        Self {
            height: (top.y - base.y).abs(),
            bridge_curvature: (bridge.y - (top.y + tip.y) / 2.0).abs(),
            tip_projection: (tip.y - base.y).abs(),
            nostril_asymmetry: (left.y - right.y).abs(),
        }
    }
}

/// `((x1 + y6 + x98) mod 20) / 100`, in [0, 0.2).
pub fn nose_offset(lm: &LandmarkSet) -> f64 {
    let sum = lm.at(landmarks::NOSE_TIP).x
        + lm.at(landmarks::NOSE_BRIDGE).y
        + lm.at(landmarks::NOSTRIL_LEFT).x;
    sum % 20.0 / 100.0
}

pub fn nose_shape(nose_ratio: f64, face_ratio: f64, lm: &LandmarkSet) -> NoseShape {
    decide_nose_shape(
        nose_ratio + nose_offset(lm),
        face_ratio,
        &NoseMetrics::from_landmarks(lm),
    )
}

pub fn decide_nose_shape(adjusted_ratio: f64, face_ratio: f64, m: &NoseMetrics) -> NoseShape {
    tracing::debug!(adjusted_ratio, face_ratio, metrics = ?m, "nose metrics");

    if adjusted_ratio > 0.26 {
        if m.height > 35.0 {
            NoseShape::WideAndLong
        } else if m.bridge_curvature > 5.0 {
            NoseShape::WideAndCurved
        } else {
            NoseShape::Wide
        }
    } else if adjusted_ratio < 0.17 {
        if m.tip_projection < 8.0 {
            NoseShape::Button
        } else if m.bridge_curvature > 4.0 {
            NoseShape::NarrowAndAquiline
        } else {
            NoseShape::Narrow
        }
    } else if m.bridge_curvature > 6.0 {
        if face_ratio > 1.3 {
            NoseShape::Roman
        } else {
            NoseShape::Curved
        }
    } else if m.height > 40.0 {
        if m.nostril_asymmetry > 2.0 {
            NoseShape::LongAndAsymmetric
        } else {
            NoseShape::Long
        }
    } else if m.tip_projection < 10.0 {
        NoseShape::Upturned
    } else if m.nostril_asymmetry > 1.5 {
        NoseShape::SlightlyAsymmetric
    } else {
        NoseShape::Straight
    }
}
