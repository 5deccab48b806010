use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::ImpactSummary;
use crate::models::{Category, SelectionSet};
use crate::state::stats::GameStats;

/// Unlockable achievements. Serialized as kebab-case ids ("first-meal", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Achievement {
    FirstMeal,
    EcoWarrior,
    FoodExplorer,
    HealthyChef,
    Inventor,
    VegetarianMaster,
    BalancedDiet,
    WaterSaver,
    CarbonNeutral,
    GourmetChef,
}

impl Achievement {
    pub const ALL: [Achievement; 10] = [
        Achievement::FirstMeal,
        Achievement::EcoWarrior,
        Achievement::FoodExplorer,
        Achievement::HealthyChef,
        Achievement::Inventor,
        Achievement::VegetarianMaster,
        Achievement::BalancedDiet,
        Achievement::WaterSaver,
        Achievement::CarbonNeutral,
        Achievement::GourmetChef,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Achievement::FirstMeal => "first-meal",
            Achievement::EcoWarrior => "eco-warrior",
            Achievement::FoodExplorer => "food-explorer",
            Achievement::HealthyChef => "healthy-chef",
            Achievement::Inventor => "inventor",
            Achievement::VegetarianMaster => "vegetarian-master",
            Achievement::BalancedDiet => "balanced-diet",
            Achievement::WaterSaver => "water-saver",
            Achievement::CarbonNeutral => "carbon-neutral",
            Achievement::GourmetChef => "gourmet-chef",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }

    pub fn title(self) -> &'static str {
        match self {
            Achievement::FirstMeal => "First Meal",
            Achievement::EcoWarrior => "Eco Warrior",
            Achievement::FoodExplorer => "Food Explorer",
            Achievement::HealthyChef => "Healthy Chef",
            Achievement::Inventor => "Inventor",
            Achievement::VegetarianMaster => "Vegetarian Master",
            Achievement::BalancedDiet => "Balanced Diet",
            Achievement::WaterSaver => "Water Saver",
            Achievement::CarbonNeutral => "Carbon Neutral",
            Achievement::GourmetChef => "Gourmet Chef",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Achievement::FirstMeal => "Cook your first meal.",
            Achievement::EcoWarrior => "Score 60 or more five rounds in a row.",
            Achievement::FoodExplorer => "Use all five ingredient categories in one meal.",
            Achievement::HealthyChef => "Cook three very healthy meals in a row.",
            Achievement::Inventor => "Cook with a lab-grown ingredient.",
            Achievement::VegetarianMaster => "Cook ten plant-only meals in a row.",
            Achievement::BalancedDiet => "Combine three or more categories in one meal.",
            Achievement::WaterSaver => "Cook a meal with very low water usage.",
            Achievement::CarbonNeutral => "Cook a meal with a tiny carbon footprint.",
            Achievement::GourmetChef => "Discover twenty different recipes.",
        }
    }

    /// Whether the just-played round, with stats already updated, satisfies this achievement.
    pub fn is_satisfied(
        self,
        stats: &GameStats,
        selection: &SelectionSet,
        impact: &ImpactSummary,
    ) -> bool {
        match self {
            Achievement::FirstMeal => stats.total_meals >= 1,
            Achievement::EcoWarrior => stats.eco_streak >= 5,
            Achievement::FoodExplorer => selection.categories().len() == Category::ALL.len(),
            Achievement::HealthyChef => stats.healthy_streak >= 3,
            Achievement::Inventor => selection.iter().any(|i| i.category == Category::Lab),
            Achievement::VegetarianMaster => stats.vegetarian_streak >= 10,
            Achievement::BalancedDiet => selection.categories().len() >= 3 && selection.len() >= 3,
            Achievement::WaterSaver => !selection.is_empty() && impact.water_usage < 0.3,
            Achievement::CarbonNeutral => !selection.is_empty() && impact.carbon_footprint < 0.2,
            Achievement::GourmetChef => stats.unique_recipes >= 20,
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// All achievements satisfied by a round, in table order.
pub fn evaluate_achievements(
    stats: &GameStats,
    selection: &SelectionSet,
    impact: &ImpactSummary,
) -> Vec<Achievement> {
    Achievement::ALL
        .into_iter()
        .filter(|a| a.is_satisfied(stats, selection, impact))
        .collect()
}
