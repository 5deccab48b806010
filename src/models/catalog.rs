use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use strsim::jaro_winkler;

use crate::error::{LabError, Result};
use crate::models::{Ingredient, Recipe};

/// Catalog bundled with the crate.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

#[derive(Deserialize)]
struct CatalogFile {
    ingredients: Vec<Ingredient>,
    recipes: Vec<Recipe>,
}

/// Validated, read-only ingredient and recipe reference data.
#[derive(Debug, Clone)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog, rejecting records that would poison scoring or matching.
    pub fn new(ingredients: Vec<Ingredient>, recipes: Vec<Recipe>) -> Result<Self> {
        let mut ids = HashSet::new();
        for ingredient in &ingredients {
            if !ingredient.is_valid() {
                return Err(LabError::InvalidCatalog(format!(
                    "ingredient '{}' has a blank id or non-finite attribute",
                    ingredient.id
                )));
            }
            if !ids.insert(ingredient.id.as_str()) {
                return Err(LabError::InvalidCatalog(format!(
                    "duplicate ingredient id '{}'",
                    ingredient.id
                )));
            }
        }

        let mut recipe_ids = HashSet::new();
        for recipe in &recipes {
            if !recipe_ids.insert(recipe.id.as_str()) {
                return Err(LabError::InvalidCatalog(format!(
                    "duplicate recipe id '{}'",
                    recipe.id
                )));
            }
            if recipe.is_empty() {
                return Err(LabError::InvalidCatalog(format!(
                    "recipe '{}' has no ingredients",
                    recipe.id
                )));
            }
            if !recipe.bonus_score.is_finite() || recipe.bonus_score < 0.0 {
                return Err(LabError::InvalidCatalog(format!(
                    "recipe '{}' has an invalid bonus score",
                    recipe.id
                )));
            }

            let mut seen = HashSet::new();
            for id in &recipe.ingredients {
                if !ids.contains(id.as_str()) {
                    return Err(LabError::InvalidCatalog(format!(
                        "recipe '{}' references unknown ingredient '{}'",
                        recipe.id, id
                    )));
                }
                if !seen.insert(id.as_str()) {
                    return Err(LabError::InvalidCatalog(format!(
                        "recipe '{}' lists '{}' twice",
                        recipe.id, id
                    )));
                }
            }
        }

        Ok(Self {
            ingredients,
            recipes,
        })
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.ingredients, file.recipes)
    }

    /// Load and validate a catalog from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The catalog compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Look up an ingredient by id or display name (case-insensitive).
    ///
    /// On failure the error carries the closest fuzzy match, if any is close enough.
    pub fn resolve(&self, name: &str) -> Result<&Ingredient> {
        let needle = name.trim().to_lowercase();

        let exact = self
            .ingredients
            .iter()
            .find(|i| i.id.to_lowercase() == needle || i.name.to_lowercase() == needle);
        if let Some(ingredient) = exact {
            return Ok(ingredient);
        }

        let suggestion = self
            .ingredients
            .iter()
            .map(|i| {
                let score = jaro_winkler(&i.name.to_lowercase(), &needle)
                    .max(jaro_winkler(&i.id.to_lowercase(), &needle));
                (i, score)
            })
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i.name.clone());

        Err(LabError::UnknownIngredient {
            name: name.to_string(),
            suggestion,
        })
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "ingredients": [
            {"id": "kale", "name": "Kale", "category": "plant",
             "carbonFootprint": 0.05, "waterUsage": 0.2, "landUsage": 0.1, "healthScore": 0.95},
            {"id": "crickets", "name": "Crickets", "category": "insect",
             "carbonFootprint": 0.08, "waterUsage": 0.05, "landUsage": 0.05, "healthScore": 0.85}
        ],
        "recipes": [
            {"id": "snack", "name": "Snack", "ingredients": ["kale", "crickets"], "bonusScore": 5}
        ]
    }"#;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.len() >= 20);
        assert!(!catalog.recipes().is_empty());
        assert!(catalog.ingredient("kale").is_some());
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(SMALL).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.recipe("snack").unwrap().bonus_score, 5.0);
    }

    #[test]
    fn test_rejects_unknown_recipe_ingredient() {
        let json = SMALL.replace(r#"["kale", "crickets"]"#, r#"["kale", "beef"]"#);
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, LabError::InvalidCatalog(_)));
    }

    #[test]
    fn test_rejects_duplicate_ingredient_in_recipe() {
        let json = SMALL.replace(r#"["kale", "crickets"]"#, r#"["kale", "kale"]"#);
        assert!(Catalog::from_json(&json).is_err());
    }

    #[test]
    fn test_rejects_empty_recipe() {
        let json = SMALL.replace(r#"["kale", "crickets"]"#, "[]");
        assert!(Catalog::from_json(&json).is_err());
    }

    #[test]
    fn test_rejects_missing_attribute() {
        let json = SMALL.replace(r#""healthScore": 0.95"#, r#""healthScore": null"#);
        assert!(Catalog::from_json(&json).is_err());
    }

    #[test]
    fn test_resolve_case_insensitive() {
        let catalog = Catalog::from_json(SMALL).unwrap();
        assert_eq!(catalog.resolve("KALE").unwrap().id, "kale");
        assert_eq!(catalog.resolve(" Crickets ").unwrap().id, "crickets");
    }

    #[test]
    fn test_resolve_suggests_close_match() {
        let catalog = Catalog::from_json(SMALL).unwrap();
        match catalog.resolve("crikets") {
            Err(LabError::UnknownIngredient { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("Crickets"));
            }
            other => panic!("expected UnknownIngredient, got {:?}", other),
        }
    }
}
