mod catalog;
mod ingredient;
mod recipe;
mod selection;

pub use catalog::Catalog;
pub use ingredient::{Category, Ingredient};
pub use recipe::Recipe;
pub use selection::SelectionSet;
