use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance metric the similarity index is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Cosine,
    Euclidean,
}

impl Metric {
    /// Distance between two vectors of equal length. Smaller is closer.
    pub fn distance(&self, a: &[f32], b: &[f32]) -> f64 {
        match self {
            Metric::Cosine => {
                let mut dot = 0.0_f64;
                let mut norm_a = 0.0_f64;
                let mut norm_b = 0.0_f64;
                for (x, y) in a.iter().zip(b.iter()) {
                    let x = *x as f64;
                    let y = *y as f64;
                    dot += x * y;
                    norm_a += x * x;
                    norm_b += y * y;
                }
                let denom = norm_a.sqrt() * norm_b.sqrt();
                // zero vectors are orthogonal to everything
                if denom == 0.0 { 1.0 } else { 1.0 - dot / denom }
            }
            Metric::Euclidean => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| {
                    let d = *x as f64 - *y as f64;
                    d * d
                })
                .sum::<f64>()
                .sqrt(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Cosine => write!(f, "cosine"),
            Metric::Euclidean => write!(f, "euclidean"),
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cosine" => Ok(Metric::Cosine),
            "euclidean" => Ok(Metric::Euclidean),
            _ => Err(format!("Unknown metric: {s}")),
        }
    }
}
