use clap::Parser;
use tracing::info;

use future_food_lab::cli::{Cli, Command};
use future_food_lab::engine::{calculate_impact, identify_recipes, tips_for, ScoringConfig};
use future_food_lab::error::Result;
use future_food_lab::interface::{
    display_catalog, display_history, display_impact, display_matches, display_progress,
    display_round, display_stats, prompt_selection, prompt_yes_no, SelectionAction,
};
use future_food_lab::models::{Catalog, Ingredient};
use future_food_lab::state::{GameEvent, GamePhase, GameSession, JsonFileStore, ProgressStore};

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };
    info!(
        ingredients = catalog.len(),
        recipes = catalog.recipes().len(),
        "catalog loaded"
    );

    let store = JsonFileStore::new(&cli.progress);

    match cli.command.unwrap_or_default() {
        Command::Play => cmd_play(catalog, store),
        Command::Score { ingredients } => cmd_score(&catalog, &ingredients),
        Command::Match { ingredients } => cmd_match(&catalog, &ingredients),
        Command::Catalog => {
            display_catalog(&catalog);
            Ok(())
        }
        Command::Progress => {
            display_progress(&store.load()?, &catalog);
            Ok(())
        }
        Command::ResetProgress => cmd_reset_progress(&store),
    }
}

/// Resolve names to catalog ingredients, dropping repeats.
fn resolve_all(catalog: &Catalog, names: &[String]) -> Result<Vec<Ingredient>> {
    let mut foods: Vec<Ingredient> = Vec::new();
    for name in names {
        let ingredient = catalog.resolve(name)?;
        if !foods.contains(ingredient) {
            foods.push(ingredient.clone());
        }
    }
    Ok(foods)
}

/// Score a selection without touching saved progress.
fn cmd_score(catalog: &Catalog, names: &[String]) -> Result<()> {
    let foods = resolve_all(catalog, names)?;
    let config = ScoringConfig::default();
    let impact = calculate_impact(&foods, &config);

    println!();
    display_impact(&impact);
    for tip in tips_for(&impact, foods.len(), &config) {
        println!("  * {}", tip);
    }
    println!();
    Ok(())
}

/// Show the recipe decomposition of a selection.
fn cmd_match(catalog: &Catalog, names: &[String]) -> Result<()> {
    let foods = resolve_all(catalog, names)?;
    let matches = identify_recipes(&foods, catalog.recipes());

    println!();
    display_matches(&matches);
    println!("Recipe bonus: +{:.0}", matches.total_bonus());
    println!();
    Ok(())
}

/// Play rounds until the player quits.
fn cmd_play(catalog: Catalog, store: JsonFileStore) -> Result<()> {
    let mut session = GameSession::new(catalog, store);

    println!("Welcome to the Future Food Lab!");
    println!("Combine ingredients into meals and see what they do to the planet.");
    println!();
    session.apply(GameEvent::StartGame);

    loop {
        match session.phase() {
            GamePhase::Selecting => match prompt_selection(&session)? {
                SelectionAction::Toggle(id) => {
                    session.apply(GameEvent::ToggleIngredient(id));
                }
                SelectionAction::Cook => {
                    if !session.apply(GameEvent::StartCooking).is_applied() {
                        println!("Pick at least two ingredients first.");
                    }
                }
                SelectionAction::Quit => break,
            },
            GamePhase::Cooking => {
                println!("Cooking...");
                session.apply(GameEvent::CompleteCooking);
            }
            GamePhase::Result => {
                if let Some(report) = session.current_round() {
                    display_round(report);
                }
                display_stats(session.stats());

                if prompt_yes_no("Cook another meal?", true)? {
                    session.apply(GameEvent::Restart);
                } else {
                    break;
                }
            }
            GamePhase::Intro => {
                session.apply(GameEvent::StartGame);
            }
        }
    }

    display_history(session.history());
    Ok(())
}

fn cmd_reset_progress(store: &JsonFileStore) -> Result<()> {
    if !store.path().exists() {
        println!("No saved progress at {}.", store.path().display());
        return Ok(());
    }

    if prompt_yes_no("Delete all unlocked recipes and achievements?", false)? {
        store.clear()?;
        println!("Progress deleted.");
    }
    Ok(())
}
