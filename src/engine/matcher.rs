use std::cmp::Reverse;
use std::collections::HashSet;

use serde::Serialize;

use crate::models::{Catalog, Ingredient, Recipe, SelectionSet};

/// A recipe recognised in a selection, with the ingredients it consumed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedRecipe {
    pub recipe: Recipe,
    /// Consumed ingredients, in recipe order.
    pub ingredients: Vec<Ingredient>,
}

/// Partition of a selection into matched recipes and leftover ingredients.
///
/// Every selected ingredient lands in exactly one place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub found_recipes: Vec<MatchedRecipe>,
    pub unmatched_foods: Vec<Ingredient>,
}

impl MatchResult {
    pub fn recipe_ids(&self) -> Vec<&str> {
        self.found_recipes
            .iter()
            .map(|m| m.recipe.id.as_str())
            .collect()
    }

    /// Sum of bonus scores of all matched recipes.
    pub fn total_bonus(&self) -> f64 {
        self.found_recipes.iter().map(|m| m.recipe.bonus_score).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.found_recipes.is_empty() && self.unmatched_foods.is_empty()
    }
}

/// A policy for decomposing a selection into recipes.
pub trait MatchStrategy {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    fn identify(&self, selection: &[Ingredient], recipes: &[Recipe]) -> MatchResult;
}

/// Greedy largest-recipe-first matching.
///
/// Recipes are tried once each, longest first (equal lengths keep catalog
/// order); a recipe is taken when all of its ingredients are still unclaimed.
/// No backtracking, so the result is deterministic but not always the
/// assignment with the most recipes.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyLargestFirst;

impl MatchStrategy for GreedyLargestFirst {
    fn name(&self) -> &'static str {
        "greedy-largest-first"
    }

    fn identify(&self, selection: &[Ingredient], recipes: &[Recipe]) -> MatchResult {
        if selection.is_empty() {
            return MatchResult::default();
        }

        let mut available: HashSet<&str> = selection.iter().map(|i| i.id.as_str()).collect();

        // sort_by_key is stable, so ties keep catalog order
        let mut ordered: Vec<&Recipe> = recipes.iter().collect();
        ordered.sort_by_key(|r| Reverse(r.len()));

        let mut found_recipes = Vec::new();
        for recipe in ordered {
            let satisfied = recipe
                .ingredients
                .iter()
                .all(|id| available.contains(id.as_str()));
            if !satisfied {
                continue;
            }

            for id in &recipe.ingredients {
                available.remove(id.as_str());
            }

            let ingredients = recipe
                .ingredients
                .iter()
                .filter_map(|id| selection.iter().find(|i| &i.id == id))
                .cloned()
                .collect();

            found_recipes.push(MatchedRecipe {
                recipe: recipe.clone(),
                ingredients,
            });
        }

        let unmatched_foods = selection
            .iter()
            .filter(|i| available.contains(i.id.as_str()))
            .cloned()
            .collect();

        MatchResult {
            found_recipes,
            unmatched_foods,
        }
    }
}

/// Match a selection with the default greedy strategy.
pub fn identify_recipes(selection: &[Ingredient], recipes: &[Recipe]) -> MatchResult {
    GreedyLargestFirst.identify(selection, recipes)
}

/// Ids of catalog ingredients that would complete (or have completed) a combo.
///
/// An ingredient is highlighted when it belongs to at least one recipe whose
/// every other required ingredient is already selected. Catalog order.
pub fn combo_highlights(selection: &SelectionSet, catalog: &Catalog) -> Vec<String> {
    let selected: HashSet<&str> = selection.ids().into_iter().collect();

    catalog
        .ingredients()
        .iter()
        .filter(|candidate| {
            catalog.recipes().iter().any(|recipe| {
                recipe.requires(&candidate.id)
                    && recipe
                        .ingredients
                        .iter()
                        .filter(|id| **id != candidate.id)
                        .all(|id| selected.contains(id.as_str()))
            })
        })
        .map(|i| i.id.clone())
        .collect()
}
