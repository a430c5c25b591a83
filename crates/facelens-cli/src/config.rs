use anyhow::{Context, Result};
use facelens_core::AnalysisConfig;
use serde::Deserialize;
use std::path::Path;

/// CLI configuration: an optional TOML file, then `FACELENS_*` environment
/// overrides on top.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Analysis tunables, read from the `[analysis]` table.
    pub analysis: AnalysisConfig,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Attach per-feature recommendations to `analyze` output.
    pub recommendations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            pretty: true,
            recommendations: false,
        }
    }
}

impl Config {
    /// Load from `path` (defaults when `None`), then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let src = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                Self::from_toml(&src)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => Self::default(),
        };
        config.apply_vars(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Apply `FACELENS_*` overrides from `lookup`. Unparseable values are ignored.
    fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = parse_f64(lookup("FACELENS_MIN_FACE_WIDTH_PX")) {
            self.analysis.min_face_width_px = v;
        }
        if let Some(v) = parse_bool(lookup("FACELENS_PRETTY")) {
            self.pretty = v;
        }
        if let Some(v) = parse_bool(lookup("FACELENS_RECOMMENDATIONS")) {
            self.recommendations = v;
        }
    }
}

fn parse_f64(value: Option<String>) -> Option<f64> {
    value.and_then(|v| v.trim().parse().ok())
}

fn parse_bool(value: Option<String>) -> Option<bool> {
    value.map(|v| v.trim() != "0" && !v.trim().eq_ignore_ascii_case("false"))
}
