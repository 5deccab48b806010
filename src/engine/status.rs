use std::fmt;

use serde::Serialize;

use crate::engine::constants::*;
use crate::engine::impact::{ImpactSummary, ScoringConfig};

/// Narrative health tier of the planet, derived from a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanetStatus {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl PlanetStatus {
    pub fn from_score(total_score: u32) -> Self {
        match total_score {
            s if s >= STATUS_EXCELLENT => PlanetStatus::Excellent,
            s if s >= STATUS_GOOD => PlanetStatus::Good,
            s if s >= STATUS_FAIR => PlanetStatus::Fair,
            s if s >= STATUS_POOR => PlanetStatus::Poor,
            _ => PlanetStatus::Critical,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlanetStatus::Excellent => "excellent",
            PlanetStatus::Good => "good",
            PlanetStatus::Fair => "fair",
            PlanetStatus::Poor => "poor",
            PlanetStatus::Critical => "critical",
        }
    }

    /// One-line narrative shown alongside the score.
    pub fn narrative(self) -> &'static str {
        match self {
            PlanetStatus::Excellent => {
                "The planet is thriving: forests regrow and rivers run clear."
            }
            PlanetStatus::Good => "The planet is healthy, with room to do even better.",
            PlanetStatus::Fair => "The planet is holding on, but the strain is showing.",
            PlanetStatus::Poor => "The planet is struggling under heavy resource use.",
            PlanetStatus::Critical => "The planet is in crisis. Time for a very different menu!",
        }
    }
}

impl fmt::Display for PlanetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suggestions for improving a selection's impact.
///
/// One tip per environmental axis above its baseline, one for low average
/// health; a single encouraging line when none apply. Empty summaries
/// (nothing selected) get no tips.
pub fn tips_for(summary: &ImpactSummary, selected: usize, config: &ScoringConfig) -> Vec<String> {
    if selected == 0 {
        return Vec::new();
    }

    let mut tips = Vec::new();

    if summary.carbon_footprint > config.baselines.carbon {
        tips.push(
            "High carbon footprint: swap red meat or dairy for legumes, insects or lab protein."
                .to_string(),
        );
    }
    if summary.water_usage > config.baselines.water {
        tips.push(
            "Thirsty plate: rice, beef and cheese need a lot of water. Try seaweed or mushrooms."
                .to_string(),
        );
    }
    if summary.land_usage > config.baselines.land {
        tips.push(
            "Heavy land use: grazing animals need space. Fermented foods need almost none."
                .to_string(),
        );
    }
    if summary.health_score < LOW_HEALTH_TIP {
        tips.push("Low nutrition: add leafy greens, pulses or whole grains.".to_string());
    }

    if tips.is_empty() {
        tips.push("Great choices! This meal is kind to both you and the planet.".to_string());
    }

    tips
}
