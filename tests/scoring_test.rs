#[macro_use]
extern crate assert_float_eq;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use future_food_lab::engine::{
    calculate_impact, environment_score, environmental_subscore, ImpactSummary, PlanetStatus,
    ScoringConfig, CARBON_BASELINE, LAND_BASELINE, WATER_BASELINE,
};
use future_food_lab::models::{Category, Ingredient};

fn make_ingredient(id: &str, carbon: f64, water: f64, land: f64, health: f64) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: id.to_string(),
        category: Category::Plant,
        carbon_footprint: carbon,
        water_usage: water,
        land_usage: land,
        health_score: health,
        description: String::new(),
    }
}

#[test]
fn test_empty_selection_scores_zero() {
    let summary = calculate_impact(&[], &ScoringConfig::default());
    assert_eq!(
        summary,
        ImpactSummary {
            carbon_footprint: 0.0,
            water_usage: 0.0,
            land_usage: 0.0,
            health_score: 0.0,
            total_score: 0,
        }
    );
}

#[test]
fn test_two_ingredient_scenario() {
    let foods = vec![
        make_ingredient("a", 0.2, 0.2, 0.2, 0.9),
        make_ingredient("b", 0.8, 0.8, 0.8, 0.1),
    ];
    let config = ScoringConfig::default();
    let summary = calculate_impact(&foods, &config);

    assert_float_absolute_eq!(summary.carbon_footprint, 0.5, 1e-9);
    assert_float_absolute_eq!(summary.water_usage, 0.5, 1e-9);
    assert_float_absolute_eq!(summary.land_usage, 0.5, 1e-9);
    assert_float_absolute_eq!(summary.health_score, 0.5, 1e-9);

    assert_float_absolute_eq!(environmental_subscore(0.5, CARBON_BASELINE), 80.0, 1e-9);
    assert_float_absolute_eq!(environmental_subscore(0.5, WATER_BASELINE), 83.333, 1e-3);
    assert_float_absolute_eq!(environmental_subscore(0.5, LAND_BASELINE), 74.0, 1e-9);
    assert_float_absolute_eq!(environment_score(&summary, &config), 79.2, 1e-9);

    // 50 * 0.4 + 79.2 * 0.6 = 67.52
    assert_eq!(summary.total_score, 68);
    assert_eq!(PlanetStatus::from_score(summary.total_score), PlanetStatus::Good);
}

#[test]
fn test_total_score_always_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = ScoringConfig::default();

    for _ in 0..500 {
        let n = rng.gen_range(1..=8);
        let foods: Vec<Ingredient> = (0..n)
            .map(|i| {
                make_ingredient(
                    &format!("f{}", i),
                    rng.gen_range(-2.0..5.0),
                    rng.gen_range(-2.0..5.0),
                    rng.gen_range(-2.0..5.0),
                    rng.gen_range(-2.0..5.0),
                )
            })
            .collect();

        let summary = calculate_impact(&foods, &config);
        assert!(summary.total_score <= 100, "score out of range: {:?}", summary);
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let foods = vec![
        make_ingredient("a", 0.3, 0.7, 0.1, 0.6),
        make_ingredient("b", 0.9, 0.1, 0.5, 0.4),
        make_ingredient("c", 0.05, 0.2, 0.3, 0.95),
    ];
    let config = ScoringConfig::default();
    assert_eq!(calculate_impact(&foods, &config), calculate_impact(&foods, &config));
}

#[test]
fn test_order_does_not_change_score() {
    let a = make_ingredient("a", 0.3, 0.7, 0.1, 0.6);
    let b = make_ingredient("b", 0.9, 0.1, 0.5, 0.4);
    let config = ScoringConfig::default();

    let ab = calculate_impact(&[a.clone(), b.clone()], &config);
    let ba = calculate_impact(&[b, a], &config);
    assert_eq!(ab.total_score, ba.total_score);
}

#[test]
fn test_custom_baselines_change_score() {
    let foods = vec![make_ingredient("a", 0.5, 0.5, 0.5, 0.5)];
    let strict = ScoringConfig {
        baselines: future_food_lab::engine::Baselines {
            carbon: 0.1,
            water: 0.1,
            land: 0.1,
        },
        ..Default::default()
    };

    let default_score = calculate_impact(&foods, &ScoringConfig::default()).total_score;
    let strict_score = calculate_impact(&foods, &strict).total_score;
    assert!(strict_score < default_score);
}
