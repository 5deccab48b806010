pub mod constants;
pub mod impact;
pub mod matcher;
pub mod status;

pub use constants::*;
pub use impact::{
    calculate_impact, environment_score, environmental_subscore, Baselines, ImpactSummary,
    ScoringConfig,
};
pub use matcher::{
    combo_highlights, identify_recipes, GreedyLargestFirst, MatchResult, MatchStrategy,
    MatchedRecipe,
};
pub use status::{tips_for, PlanetStatus};
