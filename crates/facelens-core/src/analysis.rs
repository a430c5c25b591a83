//! Entry point: one call in, one [`AnalysisResult`] out.
//!
//! With a landmark set the landmark path runs (extract → score → classify →
//! aggregate); without one the pixel-statistics path runs. Nothing is cached
//! between calls, so an [`Analyzer`] can be shared freely across threads.

use crate::aggregate;
use crate::classify;
use crate::landmarks::{self, LandmarkError, LandmarkSet};
use crate::pixel_stats::PixelStats;
use crate::region;
use crate::scoring;
use crate::types::{AnalysisResult, Measurements};
use image::RgbImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("degenerate face: width {face_width:.3}px is below the {min_width:.3}px minimum")]
    DegenerateFace { face_width: f64, min_width: f64 },
    #[error("image has no pixels")]
    EmptyImage,
    #[error("landmarks: {0}")]
    Landmarks(#[from] LandmarkError),
}

/// Tunables for the analysis facade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Faces narrower than this (landmark 234 to 454) are rejected as degenerate.
    pub min_face_width_px: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { min_face_width_px: 1.0 }
    }
}

/// Stateless analyzer holding only its configuration.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a decoded image, using `landmarks` when a detector produced them.
    pub fn analyze(
        &self,
        image: &RgbImage,
        landmarks: Option<&LandmarkSet>,
    ) -> Result<AnalysisResult, AnalysisError> {
        match landmarks {
            Some(lm) => self.analyze_landmarks(image, lm),
            None => analyze_pixels(image),
        }
    }

    /// Landmark path: geometry scores, region scores, classifications.
    pub fn analyze_landmarks(
        &self,
        image: &RgbImage,
        lm: &LandmarkSet,
    ) -> Result<AnalysisResult, AnalysisError> {
        let raw = landmarks::extract(lm);
        if raw.face_width.is_nan() || raw.face_width < self.config.min_face_width_px {
            return Err(AnalysisError::DegenerateFace {
                face_width: raw.face_width,
                min_width: self.config.min_face_width_px,
            });
        }

        let skin = region::color_stats(image, landmarks::skin_region(lm));
        let hair = region::gray_stats(image, landmarks::hair_region(lm, raw.face_height));
        tracing::debug!(
            skin_brightness = skin.brightness(),
            skin_deviation = skin.deviation,
            hair_mean = hair.mean,
            hair_std_dev = hair.std_dev,
            "region statistics"
        );

        let values = scoring::score_features(&raw, &skin, &hair);
        let overall = aggregate::overall(&values);
        let classifications = classify::classify(&raw, lm);

        tracing::info!(
            current = overall.current,
            potential = overall.potential,
            face_shape = %classifications.face_shape,
            "landmark analysis complete"
        );

        Ok(AnalysisResult {
            current: overall.current,
            potential: overall.potential,
            is_basic_mode: false,
            features: values.rounded(),
            measurements: Measurements::Landmark(classifications),
        })
    }
}

/// Basic-mode path: scores from whole-image statistics alone.
pub fn analyze_pixels(image: &RgbImage) -> Result<AnalysisResult, AnalysisError> {
    let stats = PixelStats::compute(image).ok_or(AnalysisError::EmptyImage)?;
    let features = stats.features();
    let overall = stats.overall(&features);

    tracing::info!(
        signature = stats.image_signature(),
        current = overall.current,
        potential = overall.potential,
        "basic analysis complete (no landmarks)"
    );

    Ok(AnalysisResult {
        current: overall.current,
        potential: overall.potential,
        is_basic_mode: true,
        features,
        measurements: Measurements::Basic(stats.measurements()),
    })
}

/// Analyze with the default configuration.
pub fn analyze(
    image: &RgbImage,
    landmarks: Option<&LandmarkSet>,
) -> Result<AnalysisResult, AnalysisError> {
    Analyzer::default().analyze(image, landmarks)
}
