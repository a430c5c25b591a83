mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use facelens_core::{
    recommend, AnalysisResult, Analyzer, Feature, LandmarkSet, LocalRecommendations, Point,
    ScoreTier,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "facelens", about = "Facial feature scoring from images and landmarks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an image and print the result as JSON
    Analyze {
        /// Image file (any format the `image` crate decodes)
        image: PathBuf,
        /// Face mesh landmarks as a JSON array of [x, y] or [x, y, z] points
        #[arg(short, long)]
        landmarks: Option<PathBuf>,
        /// Attach improvement recommendations for every feature
        #[arg(short, long)]
        recommend: bool,
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the built-in recommendations for a feature score
    Recommend {
        /// Feature name, e.g. "jawline" or "skinQuality"
        feature: Feature,
        /// Score in 0..=100
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        score: u8,
    },
}

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    result: AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendations: Option<BTreeMap<&'static str, Vec<String>>>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            image,
            landmarks,
            recommend: with_recommendations,
            config,
        } => {
            let config = Config::load(config.as_deref())?;
            let img = image::open(&image)
                .with_context(|| format!("failed to decode image {}", image.display()))?
                .to_rgb8();
            let landmarks = landmarks.as_deref().map(load_landmarks).transpose()?;

            let analyzer = Analyzer::new(config.analysis.clone());
            let result = analyzer.analyze(&img, landmarks.as_ref())?;

            let recommendations = (with_recommendations || config.recommendations).then(|| {
                result
                    .features
                    .iter()
                    .map(|(feature, score)| {
                        (feature.as_str(), recommend(None, feature, score, &result.measurements))
                    })
                    .collect()
            });

            print_json(&Report { result, recommendations }, config.pretty)?;
        }
        Commands::Recommend { feature, score } => {
            let tier = ScoreTier::from_score(score);
            for line in LocalRecommendations::lookup(feature, tier) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn load_landmarks(path: &Path) -> Result<LandmarkSet> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read landmarks {}", path.display()))?;
    parse_landmarks(&src).with_context(|| format!("invalid landmarks {}", path.display()))
}

/// Parse a JSON array of `[x, y]` / `[x, y, z]` points. Depth is ignored.
fn parse_landmarks(src: &str) -> Result<LandmarkSet> {
    let raw: Vec<Vec<f64>> = serde_json::from_str(src)?;
    let mut points = Vec::with_capacity(raw.len());
    for (i, coords) in raw.iter().enumerate() {
        match coords.as_slice() {
            [x, y] | [x, y, _] => points.push(Point::new(*x, *y)),
            other => bail!("point {i} has {} coordinates, expected 2 or 3", other.len()),
        }
    }
    Ok(LandmarkSet::new(points)?)
}
