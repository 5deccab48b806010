use std::fmt;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::engine::constants::MIN_COOKING_INGREDIENTS;
use crate::engine::{
    calculate_impact, combo_highlights, tips_for, GreedyLargestFirst, ImpactSummary,
    MatchStrategy, PlanetStatus, ScoringConfig,
};
use crate::models::{Catalog, SelectionSet};
use crate::state::achievements::{evaluate_achievements, Achievement};
use crate::state::history::{PlanetHistoryEntry, RoundReport};
use crate::state::persistence::{AchievementRecord, Progress, ProgressStore};
use crate::state::stats::GameStats;

/// Phase of one game round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Intro,
    Selecting,
    Cooking,
    Result,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Intro => "intro",
            GamePhase::Selecting => "selecting",
            GamePhase::Cooking => "cooking",
            GamePhase::Result => "result",
        };
        f.write_str(name)
    }
}

/// Player or UI events driving the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    StartGame,
    ToggleIngredient(String),
    StartCooking,
    CompleteCooking,
    Restart,
    Reset,
}

/// Outcome of applying an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The event was accepted; the session is now in this phase.
    Applied(GamePhase),
    /// The event was rejected and nothing changed.
    Ignored(&'static str),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }
}

/// One player's game: selection, current round, history, stats and progress.
///
/// Single writer; every mutation goes through [`GameSession::apply`].
pub struct GameSession<S: ProgressStore> {
    catalog: Catalog,
    store: S,
    config: ScoringConfig,
    strategy: Box<dyn MatchStrategy>,

    phase: GamePhase,
    selection: SelectionSet,
    highlights: Vec<String>,
    round: Option<RoundReport>,
    history: Vec<PlanetHistoryEntry>,
    stats: GameStats,
    progress: Progress,
}

impl<S: ProgressStore> GameSession<S> {
    /// Start a session, loading saved progress. Load failures fall back to empty progress.
    pub fn new(catalog: Catalog, store: S) -> Self {
        let progress = match store.load() {
            Ok(progress) => progress,
            Err(e) => {
                warn!(error = %e, "failed to load saved progress, starting fresh");
                Progress::default()
            }
        };

        let mut stats = GameStats::default();
        stats.unlocked_achievements = progress
            .achievements
            .keys()
            .filter_map(|id| Achievement::from_id(id))
            .collect();
        stats.unique_recipes = known_recipe_count(&progress, &catalog);

        debug!(
            recipes = progress.unlocked_recipe_ids.len(),
            achievements = stats.unlocked_achievements.len(),
            "session created"
        );

        Self {
            catalog,
            store,
            config: ScoringConfig::default(),
            strategy: Box::new(GreedyLargestFirst),
            phase: GamePhase::Intro,
            selection: SelectionSet::new(),
            highlights: Vec::new(),
            round: None,
            history: Vec::new(),
            stats,
            progress,
        }
    }

    /// Replace the recipe matching policy.
    pub fn with_strategy(mut self, strategy: Box<dyn MatchStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    /// Apply one event. Events that don't fit the current phase are ignored.
    pub fn apply(&mut self, event: GameEvent) -> Transition {
        let transition = match (self.phase, event) {
            (_, GameEvent::Reset) => self.reset(),
            (GamePhase::Intro, GameEvent::StartGame) | (GamePhase::Result, GameEvent::Restart) => {
                self.new_round()
            }
            (GamePhase::Selecting, GameEvent::ToggleIngredient(id)) => self.toggle(&id),
            (GamePhase::Selecting, GameEvent::StartCooking) => self.start_cooking(),
            (GamePhase::Cooking, GameEvent::CompleteCooking) => self.complete_cooking(),
            _ => Transition::Ignored("event not valid in this phase"),
        };

        if let Transition::Ignored(reason) = transition {
            debug!(phase = %self.phase, reason, "event ignored");
        }
        transition
    }

    fn new_round(&mut self) -> Transition {
        self.clear_round();
        self.phase = GamePhase::Selecting;
        info!(meals = self.stats.total_meals, "new round");
        Transition::Applied(self.phase)
    }

    fn toggle(&mut self, id: &str) -> Transition {
        let Some(ingredient) = self.catalog.ingredient(id) else {
            return Transition::Ignored("unknown ingredient");
        };

        let selected = self.selection.toggle(ingredient);
        self.highlights = combo_highlights(&self.selection, &self.catalog);
        debug!(ingredient = id, selected, count = self.selection.len(), "selection toggled");
        Transition::Applied(self.phase)
    }

    fn start_cooking(&mut self) -> Transition {
        if self.selection.len() < MIN_COOKING_INGREDIENTS {
            return Transition::Ignored("not enough ingredients");
        }

        let foods = self.selection.as_slice().to_vec();
        let matches = self.strategy.identify(&foods, self.catalog.recipes());
        let impact = calculate_impact(&foods, &self.config);
        let status = PlanetStatus::from_score(impact.total_score);
        let tips = tips_for(&impact, foods.len(), &self.config);
        let recipe_bonus = matches.total_bonus();

        self.history.push(PlanetHistoryEntry {
            timestamp: Utc::now(),
            score: impact.total_score,
            status,
            foods: foods.clone(),
        });

        let new_recipes = self.progress.unlock_recipes(matches.recipe_ids());
        self.stats.unique_recipes = known_recipe_count(&self.progress, &self.catalog);
        if !new_recipes.is_empty() {
            self.persist();
        }

        info!(
            strategy = self.strategy.name(),
            score = impact.total_score,
            %status,
            recipes = matches.found_recipes.len(),
            new_recipes = new_recipes.len(),
            "cooking started"
        );

        self.round = Some(RoundReport {
            foods,
            impact,
            matches,
            status,
            tips,
            recipe_bonus,
            new_recipes,
            new_achievements: Vec::new(),
        });
        self.phase = GamePhase::Cooking;
        Transition::Applied(self.phase)
    }

    fn complete_cooking(&mut self) -> Transition {
        let Some(round) = self.round.as_mut() else {
            return Transition::Ignored("no round in progress");
        };

        self.stats.record_round(&self.selection, &round.impact);

        let unlocked_at = Utc::now();
        let mut fresh = Vec::new();
        for achievement in evaluate_achievements(&self.stats, &self.selection, &round.impact) {
            if self.stats.unlocked_achievements.insert(achievement) {
                self.progress
                    .achievements
                    .entry(achievement.id().to_string())
                    .or_insert(AchievementRecord { unlocked_at });
                fresh.push(achievement);
            }
        }
        round.new_achievements = fresh.clone();

        if !fresh.is_empty() {
            info!(achievements = ?fresh, "achievements unlocked");
            self.persist();
        }

        self.phase = GamePhase::Result;
        Transition::Applied(self.phase)
    }

    fn reset(&mut self) -> Transition {
        self.clear_round();
        self.history.clear();
        self.stats.reset_counters();
        self.phase = GamePhase::Intro;
        info!("game reset");
        Transition::Applied(self.phase)
    }

    fn clear_round(&mut self) {
        self.selection.clear();
        self.highlights.clear();
        self.round = None;
    }

    /// Save progress; failures are logged and never interrupt play.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.progress) {
            warn!(error = %e, "failed to save progress");
        }
    }

    /// Live impact of the current selection, for display while selecting.
    pub fn preview(&self) -> ImpactSummary {
        calculate_impact(self.selection.as_slice(), &self.config)
    }

    pub fn can_start_cooking(&self) -> bool {
        self.phase == GamePhase::Selecting && self.selection.len() >= MIN_COOKING_INGREDIENTS
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Ingredient ids that would complete a recipe with the current selection.
    pub fn highlights(&self) -> &[String] {
        &self.highlights
    }

    pub fn current_round(&self) -> Option<&RoundReport> {
        self.round.as_ref()
    }

    pub fn history(&self) -> &[PlanetHistoryEntry] {
        &self.history
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Unlocked recipes the loaded catalog still knows about. Ids saved under another
/// catalog don't count.
fn known_recipe_count(progress: &Progress, catalog: &Catalog) -> u32 {
    progress
        .unlocked_recipe_ids
        .iter()
        .filter(|id| catalog.recipe(id).is_some())
        .count() as u32
}
