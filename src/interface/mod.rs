pub mod prompts;
pub mod render;

pub use prompts::{prompt_selection, prompt_yes_no, SelectionAction};
pub use render::{
    display_catalog, display_history, display_impact, display_matches, display_new_achievements,
    display_progress, display_round, display_stats,
};
