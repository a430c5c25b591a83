//! Weighted composite ("current") and projected ("potential") scores.

use crate::scoring::{to_score, FeatureValues};

/// Most a potential score can promise.
pub const POTENTIAL_CAP: u8 = 95;
/// Improvement headroom added to the current score.
pub const POTENTIAL_HEADROOM: u8 = 15;

// Structural weights. Skin quality and hairstyle are cosmetic and excluded.
const W_SYMMETRY: f64 = 0.20;
const W_JAWLINE: f64 = 0.15;
const W_CHEEKBONES: f64 = 0.15;
const W_NOSE: f64 = 0.12;
const W_EYE_AREA: f64 = 0.12;
const W_FACE_SHAPE: f64 = 0.10;
const W_FOREHEAD: f64 = 0.08;
const W_MASCULINITY: f64 = 0.08;

/// Current and potential scores, both in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverallScore {
    pub current: u8,
    pub potential: u8,
}

impl OverallScore {
    /// Derive the potential from a current score.
    ///
    /// Potential is `min(current + 15, 95)`, never below `current` itself.
    pub fn from_current(current: u8) -> Self {
        let current = current.min(100);
        let potential = current
            .saturating_add(POTENTIAL_HEADROOM)
            .min(POTENTIAL_CAP)
            .max(current);
        Self { current, potential }
    }
}

/// Unrounded weighted sum of the structural feature scores.
pub fn weighted_composite(v: &FeatureValues) -> f64 {
    v.symmetry * W_SYMMETRY
        + v.jawline * W_JAWLINE
        + v.cheekbones * W_CHEEKBONES
        + v.nose_shape * W_NOSE
        + v.eye_area * W_EYE_AREA
        + v.face_shape * W_FACE_SHAPE
        + v.forehead * W_FOREHEAD
        + v.masculinity * W_MASCULINITY
}

pub fn overall(v: &FeatureValues) -> OverallScore {
    OverallScore::from_current(to_score(weighted_composite(v)))
}
