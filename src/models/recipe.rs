use serde::{Deserialize, Serialize};

/// A named combination of specific ingredient ids yielding a bonus score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,

    pub name: String,

    /// Required ingredient ids, in display order.
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub bonus_score: f64,

    #[serde(default)]
    pub description: String,
}

impl Recipe {
    /// Whether `id` is one of this recipe's required ingredients.
    pub fn requires(&self, id: &str) -> bool {
        self.ingredients.iter().any(|i| i == id)
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
