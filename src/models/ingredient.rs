use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad origin of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Plant,
    Animal,
    Insect,
    Lab,
    Processed,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Plant,
        Category::Animal,
        Category::Insect,
        Category::Lab,
        Category::Processed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Plant => "plant",
            Category::Animal => "animal",
            Category::Insect => "insect",
            Category::Lab => "lab",
            Category::Processed => "processed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selectable food item with fixed ecological and health attributes.
///
/// Numeric attributes are conventionally in `[0, 1]`: lower is better for the
/// three footprint axes, higher is better for `health_score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,

    pub name: String,

    pub category: Category,

    pub carbon_footprint: f64,

    pub water_usage: f64,

    pub land_usage: f64,

    pub health_score: f64,

    #[serde(default)]
    pub description: String,
}

impl Ingredient {
    /// All four numeric attributes are finite numbers.
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty()
            && [
                self.carbon_footprint,
                self.water_usage,
                self.land_usage,
                self.health_score,
            ]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ingredient {}

impl std::hash::Hash for Ingredient {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
