use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::engine::constants::MIN_COOKING_INGREDIENTS;
use crate::engine::PlanetStatus;
use crate::error::{LabError, Result};
use crate::models::Catalog;
use crate::state::{Achievement, GameEvent, GameSession, MemoryStore};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub rounds: usize,
    pub seed: u64,
    /// Smallest selection size per round (raised to the cooking minimum).
    pub min_ingredients: usize,
    pub max_ingredients: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: 200,
            seed: 123,
            min_ingredients: 2,
            max_ingredients: 6,
        }
    }
}

impl SimulationConfig {
    /// Reject selection bounds no round could satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.min_ingredients > self.max_ingredients {
            return Err(LabError::InvalidInput(format!(
                "min ingredients ({}) exceeds max ({})",
                self.min_ingredients, self.max_ingredients
            )));
        }
        if self.max_ingredients < MIN_COOKING_INGREDIENTS {
            return Err(LabError::InvalidInput(format!(
                "max ingredients must be at least {}",
                MIN_COOKING_INGREDIENTS
            )));
        }
        Ok(())
    }
}

/// Outcome of one simulated round.
#[derive(Debug, Clone)]
pub struct RoundRecord {
    pub round: usize,
    pub ingredients: Vec<String>,
    pub score: u32,
    pub final_score: u32,
    pub status: PlanetStatus,
    pub recipes: Vec<String>,
    pub new_achievements: Vec<Achievement>,
}

/// Results from a simulation run.
#[derive(Debug, Clone, Default)]
pub struct SimulationResults {
    pub records: Vec<RoundRecord>,
    /// Round number (1-based) at which each achievement first unlocked.
    pub first_unlocks: BTreeMap<Achievement, usize>,
    pub recipes_discovered: usize,
}

impl SimulationResults {
    pub fn mean_score(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.records.iter().map(|r| r.score as f64).sum::<f64>() / self.records.len() as f64
    }

    /// Rounds per planet status, most to least healthy.
    pub fn status_counts(&self) -> Vec<(PlanetStatus, usize)> {
        [
            PlanetStatus::Excellent,
            PlanetStatus::Good,
            PlanetStatus::Fair,
            PlanetStatus::Poor,
            PlanetStatus::Critical,
        ]
        .into_iter()
        .map(|s| (s, self.records.iter().filter(|r| r.status == s).count()))
        .collect()
    }
}

/// Play `config.rounds` random rounds against an in-memory store.
///
/// The same seed and catalog always produce the same records.
pub fn run_simulation(config: &SimulationConfig, catalog: &Catalog) -> SimulationResults {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut session = GameSession::new(catalog.clone(), MemoryStore::default());
    let mut results = SimulationResults::default();

    let max = config.max_ingredients.min(catalog.len());
    let min = config.min_ingredients.max(MIN_COOKING_INGREDIENTS).min(max);
    if max < MIN_COOKING_INGREDIENTS {
        return results;
    }

    session.apply(GameEvent::StartGame);

    for round in 1..=config.rounds {
        let count = rng.gen_range(min..=max);
        let picks: Vec<String> = catalog
            .ingredients()
            .choose_multiple(&mut rng, count)
            .map(|i| i.id.clone())
            .collect();

        for id in &picks {
            session.apply(GameEvent::ToggleIngredient(id.clone()));
        }
        session.apply(GameEvent::StartCooking);
        session.apply(GameEvent::CompleteCooking);

        if let Some(report) = session.current_round() {
            for a in &report.new_achievements {
                results.first_unlocks.entry(*a).or_insert(round);
            }

            debug!(round, score = report.impact.total_score, "simulated round");

            results.records.push(RoundRecord {
                round,
                ingredients: picks,
                score: report.impact.total_score,
                final_score: report.final_score(),
                status: report.status,
                recipes: report
                    .matches
                    .recipe_ids()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                new_achievements: report.new_achievements.clone(),
            });
        }

        session.apply(GameEvent::Restart);
    }

    results.recipes_discovered = session.progress().unlocked_recipe_ids.len();
    results
}
