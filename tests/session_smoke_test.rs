use std::io;

use future_food_lab::error::{LabError, Result};
use future_food_lab::models::Catalog;
use future_food_lab::state::{
    Achievement, GameEvent, GamePhase, GameSession, JsonFileStore, MemoryStore, Progress,
    ProgressStore,
};

/// A store whose backend is always broken.
struct FailingStore;

impl ProgressStore for FailingStore {
    fn load(&self) -> Result<Progress> {
        Err(LabError::Io(io::Error::new(io::ErrorKind::Other, "disk on fire")))
    }

    fn save(&mut self, _progress: &Progress) -> Result<()> {
        Err(LabError::Io(io::Error::new(io::ErrorKind::Other, "disk on fire")))
    }
}

fn play_round<S: ProgressStore>(session: &mut GameSession<S>, ids: &[&str]) {
    match session.phase() {
        GamePhase::Intro => {
            session.apply(GameEvent::StartGame);
        }
        GamePhase::Result => {
            session.apply(GameEvent::Restart);
        }
        _ => {}
    }
    for id in ids {
        session.apply(GameEvent::ToggleIngredient(id.to_string()));
    }
    assert!(session.apply(GameEvent::StartCooking).is_applied());
    assert!(session.apply(GameEvent::CompleteCooking).is_applied());
}

#[test]
fn test_broken_store_never_stops_play() {
    let mut session = GameSession::new(Catalog::builtin().unwrap(), FailingStore);
    play_round(&mut session, &["lentils", "tomato", "rice"]);

    assert_eq!(session.phase(), GamePhase::Result);
    assert!(session.progress().unlocked_recipe_ids.contains("lentil_curry"));
    assert!(session.stats().unlocked_achievements.contains(&Achievement::FirstMeal));
}

#[test]
fn test_progress_survives_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");

    {
        let mut session = GameSession::new(Catalog::builtin().unwrap(), JsonFileStore::new(&path));
        play_round(&mut session, &["precision_milk", "oats"]);
    }

    let session = GameSession::new(Catalog::builtin().unwrap(), JsonFileStore::new(&path));
    assert!(session.progress().unlocked_recipe_ids.contains("lab_latte_oats"));
    assert!(session.stats().unlocked_achievements.contains(&Achievement::FirstMeal));
    assert!(session.stats().unlocked_achievements.contains(&Achievement::Inventor));
    assert_eq!(session.stats().total_meals, 0);
}

#[test]
fn test_food_explorer_round() {
    let mut session = GameSession::new(Catalog::builtin().unwrap(), MemoryStore::default());
    play_round(&mut session, &["kale", "chicken", "crickets", "mycoprotein", "tofu"]);

    let round = session.current_round().unwrap();
    assert!(round.new_achievements.contains(&Achievement::FoodExplorer));
    assert!(round.new_achievements.contains(&Achievement::BalancedDiet));
    assert!(round.new_achievements.contains(&Achievement::Inventor));
}

#[test]
fn test_streak_achievements_unlock_on_time() {
    let mut session = GameSession::new(Catalog::builtin().unwrap(), MemoryStore::default());

    for round in 1..=10 {
        play_round(&mut session, &["kale", "mushrooms"]);
        let report = session.current_round().unwrap();
        assert!(report.impact.total_score >= 60);

        let healthy = report.new_achievements.contains(&Achievement::HealthyChef);
        let eco = report.new_achievements.contains(&Achievement::EcoWarrior);
        let veg = report.new_achievements.contains(&Achievement::VegetarianMaster);
        assert_eq!(healthy, round == 3, "healthy-chef at round {}", round);
        assert_eq!(eco, round == 5, "eco-warrior at round {}", round);
        assert_eq!(veg, round == 10, "vegetarian-master at round {}", round);
    }

    assert_eq!(session.stats().vegetarian_streak, 10);
}

#[test]
fn test_unlocks_are_monotonic() {
    let mut session = GameSession::new(Catalog::builtin().unwrap(), MemoryStore::default());
    play_round(&mut session, &["cultured_meat", "kale"]);
    assert!(session.stats().unlocked_achievements.contains(&Achievement::Inventor));
    let before = session.stats().unlocked_achievements.clone();

    // A round that satisfies nothing new, then a full reset
    play_round(&mut session, &["beef", "cheese"]);
    session.apply(GameEvent::Reset);

    assert!(session.stats().unlocked_achievements.is_superset(&before));
    assert_eq!(session.phase(), GamePhase::Intro);
    assert!(session.history().is_empty());
}

#[test]
fn test_foreign_recipe_ids_do_not_unlock_gourmet_chef() {
    let mut progress = Progress::default();
    let foreign: Vec<String> = (0..20).map(|n| format!("not_in_catalog_{}", n)).collect();
    progress.unlock_recipes(foreign.iter().map(String::as_str));

    let mut session = GameSession::new(Catalog::builtin().unwrap(), MemoryStore::new(progress));
    assert_eq!(session.stats().unique_recipes, 0);

    play_round(&mut session, &["beef", "cheese"]);

    let round = session.current_round().unwrap();
    assert!(round.new_achievements.contains(&Achievement::FirstMeal));
    assert!(!round.new_achievements.contains(&Achievement::GourmetChef));
    assert_eq!(session.stats().unique_recipes, 0);
    assert!(!session.stats().unlocked_achievements.contains(&Achievement::GourmetChef));
}

#[test]
fn test_history_records_each_round() {
    let mut session = GameSession::new(Catalog::builtin().unwrap(), MemoryStore::default());
    play_round(&mut session, &["kale", "mushrooms"]);
    play_round(&mut session, &["beef", "cheese"]);

    let history = session.history();
    assert_eq!(history.len(), 2);
    assert!(history[0].score > history[1].score);
    assert_eq!(history[1].foods.len(), 2);
    assert!(history[0].timestamp <= history[1].timestamp);
}
