use clap::{Parser, Subcommand};

/// Future Food Lab: pick ingredients, see their planetary impact, discover recipes.
#[derive(Parser, Debug)]
#[command(name = "future_food_lab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a catalog JSON file (defaults to the bundled catalog).
    #[arg(short, long)]
    pub catalog: Option<String>,

    /// Path to the saved progress JSON file.
    #[arg(short, long, default_value = "lab_progress.json")]
    pub progress: String,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Play interactive rounds.
    #[default]
    Play,

    /// Score a selection of ingredients.
    Score {
        /// Ingredient ids or names.
        #[arg(required = true)]
        ingredients: Vec<String>,
    },

    /// Show which recipes a selection of ingredients makes.
    Match {
        /// Ingredient ids or names.
        #[arg(required = true)]
        ingredients: Vec<String>,
    },

    /// List ingredients and recipes.
    Catalog,

    /// Show unlocked recipes and achievements.
    Progress,

    /// Delete saved progress.
    ResetProgress,
}
