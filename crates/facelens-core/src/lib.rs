//! facelens-core — Facial feature scoring from landmarks or raw pixels.
//!
//! Given a decoded RGB image and, optionally, a 468-point face mesh, produces
//! ten feature scores, a weighted overall score with a projected potential,
//! and categorical classifications (face shape, eye type, canthal tilt,
//! maxilla development, nose shape). Without landmarks a deterministic
//! pixel-statistics estimate is returned instead.

pub mod aggregate;
pub mod analysis;
pub mod classify;
pub mod geometry;
pub mod landmarks;
pub mod pixel_stats;
pub mod recommend;
pub mod region;
pub mod scoring;
pub mod types;

#[cfg(test)]
mod test_support;

pub use analysis::{analyze, AnalysisConfig, AnalysisError, Analyzer};
pub use geometry::Point;
pub use landmarks::{LandmarkError, LandmarkSet, LANDMARK_COUNT};
pub use recommend::{
    recommend, LocalRecommendations, RecommendationError, RecommendationProvider, ScoreTier,
};
pub use types::{
    AnalysisResult, BasicMeasurements, CanthalTilt, Classifications, EyeType, FaceShape, Feature,
    FeatureScores, MaxillaDevelopment, Measurements, NoseShape,
};
