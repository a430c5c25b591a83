//! Per-feature scores on the landmark path.
//!
//! Each function maps one or more raw ratios to a score in [0, 100]. Values
//! stay floating point until [`FeatureValues::rounded`]; the thresholds are
//! calibration constants and must not drift.

use crate::landmarks::{RawMeasurements, SymmetryOffset};
use crate::region::{ColorStats, GrayStats};
use crate::types::FeatureScores;

const JAW_RATIO_FLOOR: f64 = 0.85;
const CHEEKBONE_RATIO_FLOOR: f64 = 0.95;
const NOSE_RATIO_IDEAL: f64 = 0.15;
const EYE_SPACING_BONUS_RATIO: f64 = 0.4;
const GOLDEN_RATIO: f64 = 1.618;
const FOREHEAD_RATIO_FLOOR: f64 = 0.9;
const SKIN_TARGET_BRIGHTNESS: f64 = 140.0;
const HAIR_PRESENCE_MAX_GRAY: f64 = 180.0;

/// Clamp into the score range; NaN maps to 0.
pub fn clamp_score(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 100.0)
    }
}

/// Round a score to its integer presentation form.
pub fn to_score(v: f64) -> u8 {
    clamp_score(v).round() as u8
}

/// 25 points per symmetry pair, less the pair's offset mismatch as a
/// fraction of the face width.
pub fn symmetry(offsets: &[SymmetryOffset], face_width: f64) -> f64 {
    let total: f64 = offsets
        .iter()
        .map(|o| {
            let diff = (o.left - o.right).abs();
            (1.0 - crate::geometry::ratio(diff, face_width).min(1.0)) * 25.0
        })
        .sum();
    clamp_score(total.min(100.0))
}

pub fn jawline(jaw_ratio: f64) -> f64 {
    clamp_score((60.0 + (jaw_ratio - JAW_RATIO_FLOOR).max(0.0) * 400.0).min(100.0))
}

pub fn cheekbones(cheekbone_ratio: f64) -> f64 {
    clamp_score((65.0 + (cheekbone_ratio - CHEEKBONE_RATIO_FLOOR).max(0.0) * 800.0).min(100.0))
}

/// Narrower noses score higher, floored at 40.
pub fn nose(nose_ratio: f64) -> f64 {
    clamp_score((100.0 - (nose_ratio - NOSE_RATIO_IDEAL) * 400.0).max(40.0))
}

pub fn eye_area(eye_ratio: f64, eye_spacing_ratio: f64) -> f64 {
    let spacing_bonus = if eye_spacing_ratio > EYE_SPACING_BONUS_RATIO { 20.0 } else { 0.0 };
    clamp_score((eye_ratio * 400.0 + spacing_bonus + 40.0).min(100.0))
}

/// Distance of the height/width ratio from the golden ratio, floored at 50.
pub fn face_shape(face_ratio: f64) -> f64 {
    clamp_score((100.0 - (face_ratio - GOLDEN_RATIO).abs() * 60.0).max(50.0))
}

pub fn forehead(forehead_ratio: f64) -> f64 {
    clamp_score((60.0 + (forehead_ratio - FOREHEAD_RATIO_FLOOR).max(0.0) * 600.0).min(100.0))
}

pub fn masculinity(jawline: f64, cheekbones: f64, forehead: f64) -> f64 {
    clamp_score((jawline * 0.4 + cheekbones * 0.3 + forehead * 0.3).min(100.0))
}

/// Smooth skin near a mid-range brightness scores highest.
pub fn skin_quality(skin: &ColorStats) -> f64 {
    let smoothness = (100.0 - skin.deviation * 0.8).max(0.0);
    let brightness = (100.0 - (skin.brightness() - SKIN_TARGET_BRIGHTNESS).abs() * 0.5).max(0.0);
    clamp_score(smoothness * 0.6 + brightness * 0.4)
}

/// Dark, textured pixels above the forehead read as hair.
pub fn hairstyle(hair: &GrayStats) -> f64 {
    let presence = if hair.mean < HAIR_PRESENCE_MAX_GRAY { 70.0 } else { 40.0 };
    let contrast_bonus = (hair.std_dev * 0.5).min(30.0);
    clamp_score((presence + contrast_bonus).min(100.0))
}

/// Unrounded scores for all ten features.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureValues {
    pub symmetry: f64,
    pub jawline: f64,
    pub cheekbones: f64,
    pub nose_shape: f64,
    pub eye_area: f64,
    pub face_shape: f64,
    pub forehead: f64,
    pub masculinity: f64,
    pub skin_quality: f64,
    pub hairstyle: f64,
}

impl FeatureValues {
    pub fn rounded(&self) -> FeatureScores {
        FeatureScores {
            symmetry: to_score(self.symmetry),
            jawline: to_score(self.jawline),
            cheekbones: to_score(self.cheekbones),
            nose_shape: to_score(self.nose_shape),
            eye_area: to_score(self.eye_area),
            face_shape: to_score(self.face_shape),
            forehead: to_score(self.forehead),
            masculinity: to_score(self.masculinity),
            skin_quality: to_score(self.skin_quality),
            hairstyle: to_score(self.hairstyle),
        }
    }
}

/// Score every feature from the landmark measurements and region statistics.
pub fn score_features(raw: &RawMeasurements, skin: &ColorStats, hair: &GrayStats) -> FeatureValues {
    let jaw = jawline(raw.jaw_ratio());
    let cheeks = cheekbones(raw.cheekbone_ratio());
    let brow = forehead(raw.forehead_ratio());

    FeatureValues {
        symmetry: symmetry(&raw.symmetry_offsets, raw.face_width),
        jawline: jaw,
        cheekbones: cheeks,
        nose_shape: nose(raw.nose_ratio()),
        eye_area: eye_area(raw.eye_ratio(), raw.eye_spacing_ratio()),
        face_shape: face_shape(raw.face_ratio()),
        forehead: brow,
        masculinity: masculinity(jaw, cheeks, brow),
        skin_quality: skin_quality(skin),
        hairstyle: hairstyle(hair),
    }
}
