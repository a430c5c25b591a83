//! Basic-mode scoring straight from image pixels, used when no landmark set
//! is available.
//!
//! Scores are spread deterministically by an image signature built from the
//! channel statistics, so the same pixels always produce the same result.
//! The signature weights (7, 13, 17, mod 1000) and seed multipliers are
//! calibration artifacts, not measured signal.

use crate::aggregate::OverallScore;
use crate::types::{BasicMeasurements, Feature, FeatureScores, BASIC_MODE_NOTE};
use image::RgbImage;

const DEFAULT_MIN: f64 = 35.0;
const DEFAULT_MAX: f64 = 95.0;

/// Seed multiplier and score range per feature. Skin quality has no slot; it
/// is computed from brightness directly.
const SLOTS: [(Feature, u64, f64, f64); 9] = [
    (Feature::Symmetry, 7, DEFAULT_MIN, DEFAULT_MAX),
    (Feature::Jawline, 11, DEFAULT_MIN, DEFAULT_MAX),
    (Feature::Cheekbones, 9, DEFAULT_MIN, DEFAULT_MAX),
    (Feature::NoseShape, 13, DEFAULT_MIN, DEFAULT_MAX),
    (Feature::EyeArea, 8, DEFAULT_MIN, DEFAULT_MAX),
    (Feature::FaceShape, 12, DEFAULT_MIN, DEFAULT_MAX),
    (Feature::Forehead, 6, DEFAULT_MIN, DEFAULT_MAX),
    (Feature::Masculinity, 14, DEFAULT_MIN, DEFAULT_MAX),
    (Feature::Hairstyle, 15, 40.0, 90.0),
];

/// Whole-image channel statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelStats {
    /// Mean of `(R + G + B) / 3` over all pixels.
    pub brightness: f64,
    /// Per-channel mean, RGB order.
    pub mean: [f64; 3],
    /// Per-channel population standard deviation.
    pub std_dev: [f64; 3],
    /// `|R̄ − Ḡ| + |Ḡ − B̄| + |B̄ − R̄|`.
    pub contrast: f64,
    /// Mean of the three channel deviations.
    pub texture: f64,
    /// `min(R̄, Ḡ, B̄) / max(R̄, Ḡ, B̄)`; 1.0 for a black image.
    pub color_balance: f64,
}

impl PixelStats {
    /// Compute statistics for `image`. Returns `None` for an image with no pixels.
    pub fn compute(image: &RgbImage) -> Option<Self> {
        let n = image.width() as usize * image.height() as usize;
        if n == 0 {
            return None;
        }
        let count = n as f64;

        let mut sum = [0.0f64; 3];
        let mut gray_sum = 0.0f64;
        for px in image.pixels() {
            let [r, g, b] = px.0.map(f64::from);
            sum[0] += r;
            sum[1] += g;
            sum[2] += b;
            gray_sum += (r + g + b) / 3.0;
        }
        let brightness = gray_sum / count;
        let mean = sum.map(|s| s / count);

        let mut sq = [0.0f64; 3];
        for px in image.pixels() {
            for (c, v) in px.0.iter().enumerate() {
                sq[c] += (f64::from(*v) - mean[c]).powi(2);
            }
        }
        let std_dev = sq.map(|s| (s / count).sqrt());

        let [r, g, b] = mean;
        let contrast = (r - g).abs() + (g - b).abs() + (b - r).abs();
        let texture = (std_dev[0] + std_dev[1] + std_dev[2]) / 3.0;
        let max = r.max(g).max(b);
        let color_balance = if max > 0.0 { r.min(g).min(b) / max } else { 1.0 };

        Some(Self {
            brightness,
            mean,
            std_dev,
            contrast,
            texture,
            color_balance,
        })
    }

    /// Deterministic image hash in [0, 1000).
    pub fn image_signature(&self) -> u64 {
        let [r, g, b] = self.mean;
        let weighted =
            r * 7.0 + g * 13.0 + b * 17.0 + self.contrast * 3.0 + self.texture * 2.0;
        let raw = weighted * 1000.0;
        raw.floor() as u64 % 1000
    }

    /// Starting point for every seeded score, in [45, 85].
    pub fn base_score(&self) -> f64 {
        let [r, g, b] = self.mean;
        ((self.brightness + r + g + b) / 12.0).clamp(45.0, 85.0)
    }

    /// Seeded score for one slot: base ± 15 from the signature, plus texture
    /// and contrast bonuses, clamped to `[min, max]`.
    pub fn seeded_score(&self, seed_multiplier: u64, min: f64, max: f64) -> u8 {
        let seed = (self.image_signature() * seed_multiplier) % 100;
        let variation = seed as f64 / 100.0 * 30.0 - 15.0;
        let texture_bonus = (self.texture / 10.0).min(10.0);
        let contrast_bonus = (self.contrast / 20.0).min(8.0);
        let score = self.base_score() + variation + texture_bonus + contrast_bonus;
        score.clamp(min, max).round() as u8
    }

    /// Skin quality from brightness, contrast and color balance, in [30, 95].
    pub fn skin_score(&self) -> u8 {
        let raw = 100.0 - (255.0 - self.brightness) * 0.4
            + self.contrast * 0.1
            + self.color_balance * 15.0;
        raw.clamp(30.0, 95.0).round() as u8
    }

    pub fn features(&self) -> FeatureScores {
        let mut scores = FeatureScores {
            symmetry: 0,
            jawline: 0,
            cheekbones: 0,
            nose_shape: 0,
            eye_area: 0,
            face_shape: 0,
            forehead: 0,
            masculinity: 0,
            skin_quality: self.skin_score(),
            hairstyle: 0,
        };
        for (feature, multiplier, min, max) in SLOTS {
            let value = self.seeded_score(multiplier, min, max);
            match feature {
                Feature::Symmetry => scores.symmetry = value,
                Feature::Jawline => scores.jawline = value,
                Feature::Cheekbones => scores.cheekbones = value,
                Feature::NoseShape => scores.nose_shape = value,
                Feature::EyeArea => scores.eye_area = value,
                Feature::FaceShape => scores.face_shape = value,
                Feature::Forehead => scores.forehead = value,
                Feature::Masculinity => scores.masculinity = value,
                Feature::Hairstyle => scores.hairstyle = value,
                Feature::SkinQuality => {}
            }
        }
        scores
    }

    /// Basic-mode composite: mean of the symmetry slot and the skin score.
    pub fn overall(&self, features: &FeatureScores) -> OverallScore {
        let sum = f64::from(features.symmetry) + f64::from(features.skin_quality);
        let current = (sum / 2.0).round();
        OverallScore::from_current(current as u8)
    }

    pub fn measurements(&self) -> BasicMeasurements {
        BasicMeasurements {
            note: BASIC_MODE_NOTE.to_string(),
            brightness: self.brightness.round() as u32,
            contrast: self.contrast.round() as u32,
            texture: self.texture.round() as u32,
            color_balance: format!("{}%", (self.color_balance * 100.0).round() as u32),
        }
    }
}
