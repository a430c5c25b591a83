//! Improvement suggestions per feature.
//!
//! Text generation is a collaborator concern: a [`RecommendationProvider`]
//! (typically a remote language model) supplies suggestions, and
//! [`LocalRecommendations`] is the deterministic table used whenever no
//! provider is configured or the provider fails.

use crate::types::{Feature, Measurements};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendationError {
    #[error("recommendation provider unavailable: {0}")]
    Unavailable(String),
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Score band used to pick suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    /// Below 50.
    VeryLow,
    /// 50–69.
    Low,
    /// 70–84.
    Medium,
    /// 85 and above.
    Excellent,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=49 => ScoreTier::VeryLow,
            50..=69 => ScoreTier::Low,
            70..=84 => ScoreTier::Medium,
            _ => ScoreTier::Excellent,
        }
    }
}

/// Source of short, ordered improvement suggestions for one feature.
pub trait RecommendationProvider {
    fn recommendations(
        &self,
        feature: Feature,
        score: u8,
        measurements: &Measurements,
    ) -> Result<Vec<String>, RecommendationError>;
}

const EXCELLENT: &[&str] = &[
    "Excellent! Focus on maintenance and fine-tuning",
    "Consider helping others with your routine",
];

/// Built-in suggestion table keyed by feature and score tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalRecommendations;

impl LocalRecommendations {
    pub fn lookup(feature: Feature, tier: ScoreTier) -> &'static [&'static str] {
        use Feature::*;
        use ScoreTier::*;

        match (feature, tier) {
            (_, Excellent) => EXCELLENT,

            (Symmetry, VeryLow) => &[
                "Start facial massage therapy 2x daily",
                "Sleep exclusively on your back",
                "Practice mirror symmetry exercises",
                "Chew food alternating sides equally",
                "Consider facial cupping therapy",
            ],
            (Symmetry, Low) => &[
                "Practice facial exercises evenly on both sides",
                "Sleep on your back to avoid facial pressure",
                "Chew food evenly on both sides",
                "Facial massage for muscle balance",
                "Use jade roller for lymphatic drainage",
            ],
            (Symmetry, Medium) => &[
                "Maintain current symmetry routine",
                "Weekly professional facial massage",
                "Continue balanced chewing habits",
            ],

            (Jawline, VeryLow) => &[
                "Mewing technique 4+ hours daily",
                "Chew jaw trainer gum 45min/day",
                "Reduce body fat to 10-15%",
                "Testosterone optimization protocol",
                "Consider jawline filler consultation",
            ],
            (Jawline, Low) => &[
                "Jaw exercises: chin lifts daily",
                "Chew harder foods (carrots, nuts)",
                "Mewing technique: tongue on palate",
                "Reduce sodium to minimize bloating",
                "Maintain low body fat (12-18%)",
            ],
            (Jawline, Medium) => &[
                "Continue mewing practice",
                "Maintain lean physique",
                "Weekly jawline massage",
            ],

            (Cheekbones, VeryLow) => &[
                "Buccal fat reduction consultation",
                "Intensive face yoga 2x daily",
                "Achieve 8-12% body fat",
                "Cheekbone contouring makeup daily",
                "Consider dermal filler enhancement",
            ],
            (Cheekbones, Low) => &[
                "Face yoga: cheek lifts",
                "Chew sugar-free gum 30min daily",
                "Facial massage upward strokes",
                "Reduce overall body fat",
                "Gua sha stone therapy",
            ],
            (Cheekbones, Medium) => &[
                "Maintain facial exercises",
                "Continue body fat optimization",
                "Weekly gua sha treatment",
            ],

            (NoseShape, VeryLow) => &[
                "Non-surgical nose job consultation",
                "Daily nose contouring makeup",
                "Nose exercise routine 3x daily",
                "Breathing exercises for nose function",
                "Consider rhinoplasty consultation",
            ],
            (NoseShape, Low) => &[
                "Nose exercises daily",
                "Proper breathing through nose",
                "Facial contouring techniques",
                "Consider professional consultation",
                "Nose massage with oils",
            ],
            (NoseShape, Medium) => &[
                "Continue nose exercises",
                "Maintain breathing practices",
                "Subtle contouring when needed",
            ],

            (EyeArea, VeryLow) => &[
                "Under-eye filler consultation",
                "Professional LED light therapy",
                "Prescription retinoid treatment",
                "Botox for crow's feet",
                "Vitamin C + E serum combo",
            ],
            (EyeArea, Low) => &[
                "Eye cream with caffeine & retinol",
                "Get 7-8 hours sleep",
                "Reduce screen time, use blue light filter",
                "Stay hydrated (8+ glasses)",
                "Cold compress morning",
            ],
            (EyeArea, Medium) => &[
                "Maintain eye care routine",
                "Continue sleep optimization",
                "Weekly eye masks",
            ],

            (FaceShape, VeryLow) => &[
                "Surgical consultation for face shape",
                "Strategic beard styling",
                "Professional hairstyle consultation",
                "Face slimming exercises daily",
                "Optimize facial hair growth",
            ],
            (FaceShape, Low) => &[
                "Overall facial exercises",
                "Maintain healthy weight",
                "Proper posture",
                "Strategic hairstyle choice",
                "Face yoga comprehensive routine",
            ],
            (FaceShape, Medium) => &[
                "Continue face exercises",
                "Maintain ideal weight",
                "Regular hairstyle updates",
            ],

            (Forehead, VeryLow) => &[
                "Botox for forehead lines",
                "Prescription retinoid cream",
                "LED light therapy sessions",
                "Micro-needling treatment",
                "Bangs hairstyle consideration",
            ],
            (Forehead, Low) => &[
                "Forehead massage",
                "Reduce frowning",
                "Botox for lines (optional)",
                "Hairstyle to complement",
                "Daily SPF 50+ protection",
            ],
            (Forehead, Medium) => &[
                "Maintain skincare routine",
                "Continue sun protection",
                "Occasional professional treatments",
            ],

            (Masculinity, VeryLow) => &[
                "Testosterone replacement therapy consult",
                "Heavy compound lifting 4x/week",
                "Grow full beard if possible",
                "Posture coaching sessions",
                "Voice deepening exercises",
            ],
            (Masculinity, Low) => &[
                "Strength training compound lifts",
                "Grow facial hair if possible",
                "Improve posture",
                "Dress in structured clothing",
                "Increase testosterone naturally",
            ],
            (Masculinity, Medium) => &[
                "Maintain fitness routine",
                "Continue grooming practices",
                "Optimize hormone levels",
            ],

            (SkinQuality, VeryLow) => &[
                "Dermatologist consultation ASAP",
                "Professional chemical peel series",
                "Prescription tretinoin 0.05%",
                "LED therapy + microneedling",
                "Comprehensive supplement stack",
            ],
            (SkinQuality, Low) => &[
                "Daily cleansing routine 2x",
                "Vitamin C serum (morning)",
                "Retinol serum (night)",
                "Sunscreen SPF 50+ daily",
                "Hydrate well + 7-8 hours sleep",
            ],
            (SkinQuality, Medium) => &[
                "Maintain skincare regimen",
                "Monthly professional facial",
                "Continue sun protection",
            ],

            (Hairstyle, VeryLow) => &[
                "Hair transplant consultation",
                "Professional stylist monthly",
                "Hair growth treatment protocol",
                "Modern trendy cut update",
                "Quality styling product investment",
            ],
            (Hairstyle, Low) => &[
                "Consult professional stylist",
                "Modern textured cut",
                "Use quality styling products",
                "Consider hair growth supplements",
                "Update cut every 6-8 weeks",
            ],
            (Hairstyle, Medium) => &[
                "Maintain current style",
                "Regular trims",
                "Quality product maintenance",
            ],
        }
    }
}

impl RecommendationProvider for LocalRecommendations {
    fn recommendations(
        &self,
        feature: Feature,
        score: u8,
        _measurements: &Measurements,
    ) -> Result<Vec<String>, RecommendationError> {
        Ok(Self::lookup(feature, ScoreTier::from_score(score))
            .iter()
            .map(|s| s.to_string())
            .collect())
    }
}

/// Ask `provider` for suggestions, falling back to the local table when there
/// is no provider, it fails, or it returns nothing.
pub fn recommend(
    provider: Option<&dyn RecommendationProvider>,
    feature: Feature,
    score: u8,
    measurements: &Measurements,
) -> Vec<String> {
    if let Some(p) = provider {
        match p.recommendations(feature, score, measurements) {
            Ok(recs) if !recs.is_empty() => return recs,
            Ok(_) => {
                tracing::warn!(
                    %feature,
                    score,
                    "provider returned no recommendations; using local table"
                );
            }
            Err(e) => {
                tracing::warn!(
                    %feature,
                    score,
                    error = %e,
                    "recommendation provider failed; using local table"
                );
            }
        }
    }

    LocalRecommendations::lookup(feature, ScoreTier::from_score(score))
        .iter()
        .map(|s| s.to_string())
        .collect()
}
