use serde::Serialize;

use crate::engine::constants::*;
use crate::models::Ingredient;

/// Average footprint per environmental axis that maps to a sub-score of 80.
#[derive(Debug, Clone, Copy)]
pub struct Baselines {
    pub carbon: f64,
    pub water: f64,
    pub land: f64,
}

/// Configurable baselines and weights for impact scoring.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub baselines: Baselines,
    pub carbon_weight: f64,
    pub water_weight: f64,
    pub land_weight: f64,
    pub health_weight: f64,
    pub environment_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            baselines: Baselines {
                carbon: CARBON_BASELINE,
                water: WATER_BASELINE,
                land: LAND_BASELINE,
            },
            carbon_weight: CARBON_WEIGHT,
            water_weight: WATER_WEIGHT,
            land_weight: LAND_WEIGHT,
            health_weight: HEALTH_WEIGHT,
            environment_weight: ENVIRONMENT_WEIGHT,
        }
    }
}

/// Environmental and health summary of a selection.
///
/// The four attribute fields are plain averages; `total_score` is the
/// weighted composite, rounded and clamped to 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
    pub carbon_footprint: f64,
    pub water_usage: f64,
    pub land_usage: f64,
    pub health_score: f64,
    pub total_score: u32,
}

/// Score one environmental axis against its baseline.
///
/// 100 at zero footprint, 80 at the baseline, then a steeper linear penalty.
/// May go negative; the composite is clamped, not the sub-score.
pub fn environmental_subscore(avg: f64, baseline: f64) -> f64 {
    if avg <= baseline {
        SUBSCORE_MAX - (avg / baseline) * SUBSCORE_BASELINE_DROP
    } else {
        (SUBSCORE_MAX - SUBSCORE_BASELINE_DROP) - (avg - baseline) * OVER_BASELINE_PENALTY
    }
}

/// Weighted environment score (0-100 scale before clamping).
pub fn environment_score(summary: &ImpactSummary, config: &ScoringConfig) -> f64 {
    let carbon = environmental_subscore(summary.carbon_footprint, config.baselines.carbon);
    let water = environmental_subscore(summary.water_usage, config.baselines.water);
    let land = environmental_subscore(summary.land_usage, config.baselines.land);

    carbon * config.carbon_weight + water * config.water_weight + land * config.land_weight
}

/// Compute the impact summary of a selection.
///
/// Empty input yields an all-zero summary.
pub fn calculate_impact(foods: &[Ingredient], config: &ScoringConfig) -> ImpactSummary {
    if foods.is_empty() {
        return ImpactSummary::default();
    }

    let n = foods.len() as f64;
    let avg = |f: fn(&Ingredient) -> f64| foods.iter().map(f).sum::<f64>() / n;

    let mut summary = ImpactSummary {
        carbon_footprint: avg(|i| i.carbon_footprint),
        water_usage: avg(|i| i.water_usage),
        land_usage: avg(|i| i.land_usage),
        health_score: avg(|i| i.health_score),
        total_score: 0,
    };

    let health = summary.health_score * 100.0;
    let environment = environment_score(&summary, config);
    let composite = health * config.health_weight + environment * config.environment_weight;

    summary.total_score = composite
        .clamp(MIN_TOTAL_SCORE, MAX_TOTAL_SCORE)
        .round() as u32;
    summary
}
