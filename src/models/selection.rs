use crate::models::{Category, Ingredient};

/// The player's in-progress choice of ingredients for one round.
///
/// Keeps selection order and holds each ingredient id at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    items: Vec<Ingredient>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the ingredient, or remove it if already selected.
    ///
    /// Returns true when the ingredient is selected after the call.
    pub fn toggle(&mut self, ingredient: &Ingredient) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i.id == ingredient.id) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(ingredient.clone());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.id.as_str()).collect()
    }

    pub fn as_slice(&self) -> &[Ingredient] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ingredient> {
        self.items.iter()
    }

    /// Distinct categories present, in `Category::ALL` order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.items.iter().any(|i| i.category == *c))
            .collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Ingredient> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = Ingredient>>(iter: T) -> Self {
        let mut set = SelectionSet::new();
        for ingredient in iter {
            if !set.contains(&ingredient.id) {
                set.items.push(ingredient);
            }
        }
        set
    }
}
