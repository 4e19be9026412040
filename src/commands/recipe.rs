// src/commands/recipe.rs
//! Recipe browsing, creation, and deletion commands

use super::find_recipe;
use anyhow::Result;
use recipebox::prompt::{self, Prompter};
use recipebox::{Recipe, RecipeStore, render};
use tracing::info;

/// List all recipes
pub fn cmd_list(store: &RecipeStore) -> Result<()> {
    let recipes = store.list()?;

    if recipes.is_empty() {
        println!("No recipes found.");
        println!("\nCreate one with: recipebox create");
        return Ok(());
    }

    print!("{}", render::render_table(&recipes));
    println!("\nTotal: {} recipe(s)", recipes.len());
    Ok(())
}

/// Show the stored details of a recipe
pub fn cmd_view(store: &RecipeStore, id: i64) -> Result<()> {
    let recipe = find_recipe(store, id)?;
    println!("{}", render::render_details(&recipe)?);
    Ok(())
}

/// Print a recipe formatted for reading
pub fn cmd_format(store: &RecipeStore, id: i64) -> Result<()> {
    let recipe = find_recipe(store, id)?;
    print!("{}", render::render(&recipe));
    Ok(())
}

/// Create a new recipe from prompted details
pub fn cmd_create(store: &mut RecipeStore, prompter: &mut dyn Prompter) -> Result<Recipe> {
    let details = prompt::recipe_details(prompter)?;
    let recipe = Recipe::new(&details.name, details.cooking_time, details.servings)?;

    info!("Creating recipe: {}", recipe.name);
    let recipe = store.create(recipe)?;

    if let Some(id) = recipe.id {
        println!("Created recipe '{}' with id {}", recipe.name, id);
    }
    println!("Add ingredients with: recipebox add-ingredient <id>");
    Ok(recipe)
}

/// Delete a recipe after confirmation; returns whether it was deleted
pub fn cmd_delete(store: &mut RecipeStore, prompter: &mut dyn Prompter, id: i64) -> Result<bool> {
    let recipe = find_recipe(store, id)?;

    if !prompter.confirm(&format!("Delete recipe '{}'?", recipe.name), false)? {
        println!("Deletion cancelled.");
        return Ok(false);
    }

    let removed = store.delete(id)?;
    if removed {
        println!("Deleted recipe '{}'", recipe.name);
    }
    Ok(removed)
}
