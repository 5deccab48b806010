pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod simulator;
pub mod state;

pub use error::{LabError, Result};
pub use models::{Catalog, Category, Ingredient, Recipe, SelectionSet};
