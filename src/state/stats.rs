use std::collections::BTreeSet;

use crate::engine::constants::{ECO_STREAK_SCORE, HEALTHY_STREAK_HEALTH};
use crate::engine::ImpactSummary;
use crate::models::{Category, SelectionSet};
use crate::state::achievements::Achievement;

/// Per-player counters updated once per completed round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStats {
    pub total_meals: u32,

    /// Consecutive rounds scoring at least `ECO_STREAK_SCORE`.
    pub eco_streak: u32,

    /// Consecutive rounds with average health at least `HEALTHY_STREAK_HEALTH`.
    pub healthy_streak: u32,

    /// Consecutive plant-only rounds.
    pub vegetarian_streak: u32,

    /// Distinct recipes ever unlocked.
    pub unique_recipes: u32,

    pub unlocked_achievements: BTreeSet<Achievement>,
}

impl GameStats {
    /// Count a finished round and advance or break each streak.
    pub fn record_round(&mut self, selection: &SelectionSet, impact: &ImpactSummary) {
        self.total_meals += 1;

        self.eco_streak = streak(self.eco_streak, impact.total_score >= ECO_STREAK_SCORE);
        self.healthy_streak = streak(
            self.healthy_streak,
            impact.health_score >= HEALTHY_STREAK_HEALTH,
        );

        let plant_only =
            !selection.is_empty() && selection.iter().all(|i| i.category == Category::Plant);
        self.vegetarian_streak = streak(self.vegetarian_streak, plant_only);
    }

    /// Zero the round counters. Unlocks are progress, not counters, and survive.
    pub fn reset_counters(&mut self) {
        self.total_meals = 0;
        self.eco_streak = 0;
        self.healthy_streak = 0;
        self.vegetarian_streak = 0;
    }
}

fn streak(current: u32, qualifies: bool) -> u32 {
    if qualifies { current + 1 } else { 0 }
}
