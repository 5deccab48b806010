use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use future_food_lab::engine::{identify_recipes, GreedyLargestFirst, MatchResult, MatchStrategy};
use future_food_lab::models::{Catalog, Category, Ingredient, Recipe};

fn make_ingredient(id: &str) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: id.to_uppercase(),
        category: Category::Plant,
        carbon_footprint: 0.1,
        water_usage: 0.1,
        land_usage: 0.1,
        health_score: 0.8,
        description: String::new(),
    }
}

fn make_recipe(id: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: id.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        bonus_score: 5.0,
        description: String::new(),
    }
}

/// Every selected id appears exactly once across matched recipes and leftovers.
fn assert_partition(selection: &[Ingredient], result: &MatchResult) {
    let mut seen = HashSet::new();
    for m in &result.found_recipes {
        assert_eq!(m.ingredients.len(), m.recipe.ingredients.len());
        for i in &m.ingredients {
            assert!(seen.insert(i.id.clone()), "{} consumed twice", i.id);
        }
    }
    for i in &result.unmatched_foods {
        assert!(seen.insert(i.id.clone()), "{} both matched and unmatched", i.id);
    }

    let expected: HashSet<String> = selection.iter().map(|i| i.id.clone()).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_empty_selection_matches_nothing() {
    let catalog = Catalog::builtin().unwrap();
    let result = identify_recipes(&[], catalog.recipes());
    assert!(result.found_recipes.is_empty());
    assert!(result.unmatched_foods.is_empty());
}

#[test]
fn test_larger_recipe_wins_shared_ingredients() {
    let recipes = vec![make_recipe("xy", &["x", "y"]), make_recipe("xyz", &["x", "y", "z"])];
    let selection = vec![make_ingredient("x"), make_ingredient("y"), make_ingredient("z")];

    let result = identify_recipes(&selection, &recipes);
    assert_eq!(result.recipe_ids(), vec!["xyz"]);
    assert!(result.unmatched_foods.is_empty());
}

#[test]
fn test_independent_recipes_both_match() {
    let recipes = vec![make_recipe("ab", &["a", "b"]), make_recipe("cd", &["c", "d"])];
    let selection: Vec<Ingredient> = ["d", "a", "c", "b", "e"]
        .iter()
        .map(|s| make_ingredient(s))
        .collect();

    let result = identify_recipes(&selection, &recipes);
    assert_eq!(result.recipe_ids(), vec!["ab", "cd"]);
    assert_eq!(result.unmatched_foods, vec![make_ingredient("e")]);
}

#[test]
fn test_builtin_catalog_scenarios() {
    let catalog = Catalog::builtin().unwrap();
    let pick = |ids: &[&str]| -> Vec<Ingredient> {
        ids.iter().map(|id| catalog.ingredient(id).unwrap().clone()).collect()
    };

    // Power salad (4) claims chickpeas and tomato before hummus plate (2)
    let selection = pick(&["kale", "quinoa", "chickpeas", "tomato"]);
    let result = identify_recipes(&selection, catalog.recipes());
    assert_eq!(result.recipe_ids(), vec!["power_salad"]);

    // Future burger takes mushrooms; steak dinner is left without them
    let selection = pick(&["cultured_meat", "tomato", "mushrooms", "beef"]);
    let result = identify_recipes(&selection, catalog.recipes());
    assert_eq!(result.recipe_ids(), vec!["future_burger"]);
    assert_eq!(result.unmatched_foods.len(), 1);
    assert_eq!(result.unmatched_foods[0].id, "beef");
}

#[test]
fn test_partition_holds_for_random_selections() {
    let catalog = Catalog::builtin().unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..300 {
        let n = rng.gen_range(0..=catalog.len());
        let selection: Vec<Ingredient> = catalog
            .ingredients()
            .choose_multiple(&mut rng, n)
            .cloned()
            .collect();

        let result = identify_recipes(&selection, catalog.recipes());
        assert_partition(&selection, &result);

        // Pure: a second call gives the same answer
        assert_eq!(result, identify_recipes(&selection, catalog.recipes()));
    }
}

#[test]
fn test_matching_ignores_selection_order() {
    let catalog = Catalog::builtin().unwrap();
    let mut selection: Vec<Ingredient> = ["rice", "lentils", "seaweed", "tomato", "salmon"]
        .iter()
        .map(|id| catalog.ingredient(id).unwrap().clone())
        .collect();

    let forward = identify_recipes(&selection, catalog.recipes());
    selection.reverse();
    let backward = identify_recipes(&selection, catalog.recipes());

    assert_eq!(forward.recipe_ids(), backward.recipe_ids());
}

#[test]
fn test_strategy_is_named() {
    assert_eq!(GreedyLargestFirst.name(), "greedy-largest-first");
}
