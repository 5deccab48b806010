use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::{ImpactSummary, MatchResult, PlanetStatus};
use crate::models::Ingredient;
use crate::state::achievements::Achievement;

/// One cooked round in the planet's history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetHistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub score: u32,
    pub status: PlanetStatus,
    pub foods: Vec<Ingredient>,
}

/// Everything the presentation layer needs about the current round.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundReport {
    pub foods: Vec<Ingredient>,
    pub impact: ImpactSummary,
    pub matches: MatchResult,
    pub status: PlanetStatus,
    pub tips: Vec<String>,

    /// Sum of matched recipe bonuses, reported next to the base score.
    pub recipe_bonus: f64,

    /// Recipes unlocked for the first time by this round.
    pub new_recipes: Vec<String>,

    /// Filled in when cooking completes.
    pub new_achievements: Vec<Achievement>,
}

impl RoundReport {
    /// Base score plus recipe bonus, capped at 100.
    pub fn final_score(&self) -> u32 {
        (self.impact.total_score as f64 + self.recipe_bonus)
            .round()
            .min(100.0) as u32
    }
}
