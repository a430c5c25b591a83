use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the ten scored facial features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    Symmetry,
    Jawline,
    Cheekbones,
    NoseShape,
    EyeArea,
    FaceShape,
    Forehead,
    Masculinity,
    SkinQuality,
    Hairstyle,
}

impl Feature {
    /// All features, in presentation order.
    pub const ALL: [Feature; 10] = [
        Feature::Symmetry,
        Feature::Jawline,
        Feature::Cheekbones,
        Feature::NoseShape,
        Feature::EyeArea,
        Feature::FaceShape,
        Feature::Forehead,
        Feature::Masculinity,
        Feature::SkinQuality,
        Feature::Hairstyle,
    ];

    /// Wire name, matching the keys of a serialized [`FeatureScores`].
    pub fn as_str(self) -> &'static str {
        match self {
            Feature::Symmetry => "symmetry",
            Feature::Jawline => "jawline",
            Feature::Cheekbones => "cheekbones",
            Feature::NoseShape => "noseShape",
            Feature::EyeArea => "eyeArea",
            Feature::FaceShape => "faceShape",
            Feature::Forehead => "forehead",
            Feature::Masculinity => "masculinity",
            Feature::SkinQuality => "skinQuality",
            Feature::Hairstyle => "hairstyle",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown feature: {0}")]
pub struct UnknownFeature(pub String);

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}

/// Integer 0–100 score for each feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureScores {
    pub symmetry: u8,
    pub jawline: u8,
    pub cheekbones: u8,
    pub nose_shape: u8,
    pub eye_area: u8,
    pub face_shape: u8,
    pub forehead: u8,
    pub masculinity: u8,
    pub skin_quality: u8,
    pub hairstyle: u8,
}

impl FeatureScores {
    pub fn get(&self, feature: Feature) -> u8 {
        match feature {
            Feature::Symmetry => self.symmetry,
            Feature::Jawline => self.jawline,
            Feature::Cheekbones => self.cheekbones,
            Feature::NoseShape => self.nose_shape,
            Feature::EyeArea => self.eye_area,
            Feature::FaceShape => self.face_shape,
            Feature::Forehead => self.forehead,
            Feature::Masculinity => self.masculinity,
            Feature::SkinQuality => self.skin_quality,
            Feature::Hairstyle => self.hairstyle,
        }
    }

    /// `(feature, score)` pairs in [`Feature::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, u8)> + '_ {
        Feature::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Declares a closed label enumeration whose serialized form is its display label.
macro_rules! label_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

label_enum!(
    /// Overall face outline.
    FaceShape {
        Oblong => "Oblong",
        Square => "Square",
        Round => "Round",
        Heart => "Heart",
        Oval => "Oval",
        Diamond => "Diamond",
        Rectangular => "Rectangular",
        Triangle => "Triangle",
    }
);

label_enum!(
    EyeType {
        HunterEyes => "Hunter Eyes",
        Narrow => "Narrow",
        LargeAndClose => "Large & Close",
        Large => "Large",
        Elongated => "Elongated",
        Round => "Round",
        Asymmetric => "Asymmetric",
        Almond => "Almond",
    }
);

label_enum!(
    /// Tilt of the outer-to-inner eye corner line. Negative image-space angles
    /// (outer corner higher) read as a positive tilt.
    CanthalTilt {
        Positive => "Positive",
        Negative => "Negative",
        Neutral => "Neutral",
        SlightlyPositive => "Slightly Positive",
        SlightlyNegative => "Slightly Negative",
    }
);

label_enum!(
    MaxillaDevelopment {
        VeryStrong => "Very Strong",
        Strong => "Strong",
        Neutral => "Neutral",
        BelowAverage => "Below Average",
        Weak => "Weak",
    }
);

label_enum!(
    NoseShape {
        WideAndLong => "Wide & Long",
        WideAndCurved => "Wide & Curved",
        Wide => "Wide",
        Button => "Button",
        NarrowAndAquiline => "Narrow & Aquiline",
        Narrow => "Narrow",
        Roman => "Roman",
        Curved => "Curved",
        LongAndAsymmetric => "Long & Asymmetric",
        Long => "Long",
        Upturned => "Upturned",
        SlightlyAsymmetric => "Slightly Asymmetric",
        Straight => "Straight",
    }
);

/// Categorical descriptors produced on the landmark path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classifications {
    pub face_shape: FaceShape,
    pub eye_type: EyeType,
    pub canthal_tilt: CanthalTilt,
    pub maxilla_development: MaxillaDevelopment,
    pub nose_shape: NoseShape,
}

/// Disclaimer attached to every basic-mode result.
pub const BASIC_MODE_NOTE: &str = "Basic estimation mode - no facial landmarks available. \
Results are deterministic based on image properties.";

/// Presentation form of the fallback path's pixel statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicMeasurements {
    pub note: String,
    pub brightness: u32,
    pub contrast: u32,
    pub texture: u32,
    /// Percentage string, e.g. `"87%"`.
    pub color_balance: String,
}

/// Either the landmark classifications or the basic-mode statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measurements {
    Landmark(Classifications),
    Basic(BasicMeasurements),
}

/// Unified output of a single analysis call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub current: u8,
    pub potential: u8,
    pub is_basic_mode: bool,
    pub features: FeatureScores,
    pub measurements: Measurements,
}
