use dialoguer::{Confirm, Select};

use crate::engine::constants::MIN_COOKING_INGREDIENTS;
use crate::error::Result;
use crate::state::{GameSession, ProgressStore};

/// What the player chose on the selection screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    Toggle(String),
    Cook,
    Quit,
}

/// Show the ingredient list and return one action.
///
/// Selected ingredients are marked `[x]`; ingredients that would complete a
/// recipe are marked with `*`.
pub fn prompt_selection<S: ProgressStore>(session: &GameSession<S>) -> Result<SelectionAction> {
    let preview = session.preview();
    let ingredients = session.catalog().ingredients();

    let mut items: Vec<String> = ingredients
        .iter()
        .map(|i| {
            let mark = if session.selection().contains(&i.id) { "x" } else { " " };
            let combo = if session.highlights().contains(&i.id) { " *" } else { "" };
            format!("[{}] {} ({}){}", mark, i.name, i.category, combo)
        })
        .collect();

    let cook_label = if session.can_start_cooking() {
        "Start cooking".to_string()
    } else {
        format!("Start cooking (pick at least {})", MIN_COOKING_INGREDIENTS)
    };
    items.push(cook_label);
    items.push("Quit".to_string());

    let prompt = if session.selection().is_empty() {
        "Pick ingredients".to_string()
    } else {
        format!(
            "Pick ingredients ({} selected, live score {})",
            session.selection().len(),
            preview.total_score
        )
    };

    let choice = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .max_length(15)
        .interact()?;

    Ok(if choice < ingredients.len() {
        SelectionAction::Toggle(ingredients[choice].id.clone())
    } else if choice == ingredients.len() {
        SelectionAction::Cook
    } else {
        SelectionAction::Quit
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
