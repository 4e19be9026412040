// src/commands/ingredient.rs
//! Ingredient editing commands

use super::find_recipe;
use anyhow::Result;
use recipebox::prompt::{self, Prompter};
use recipebox::{RecipeStore, render};
use tracing::info;

/// Prompt for an ingredient and append it to a recipe
pub fn cmd_add_ingredient(
    store: &mut RecipeStore,
    prompter: &mut dyn Prompter,
    id: i64,
) -> Result<()> {
    let mut recipe = find_recipe(store, id)?;
    prompter.notice(&format!("Adding an ingredient to '{}'", recipe.name))?;

    let details = prompt::ingredient_details(prompter)?;
    recipe.add_ingredient(&details.name, details.amount, &details.unit)?;

    info!("Adding ingredient {} to recipe {}", details.name, id);
    store.update(&recipe)?;

    if let Some(added) = recipe.ingredients.last() {
        println!(
            "Added {} to '{}'",
            render::format_ingredient(added),
            recipe.name
        );
    }
    Ok(())
}
