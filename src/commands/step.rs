// src/commands/step.rs
//! Step editing commands

use super::find_recipe;
use anyhow::Result;
use recipebox::prompt::{self, Prompter};
use recipebox::{Error, RecipeStore};
use tracing::info;

/// Prompt for an instruction and append it as the recipe's last step
pub fn cmd_add_step(store: &mut RecipeStore, prompter: &mut dyn Prompter, id: i64) -> Result<()> {
    let mut recipe = find_recipe(store, id)?;
    prompter.notice(&format!(
        "Adding step {} to '{}'",
        recipe.steps.len() + 1,
        recipe.name
    ))?;

    let instruction = prompt::instruction(prompter)?;
    recipe.add_step(&instruction)?;

    info!("Adding step to recipe {}", id);
    store.update(&recipe)?;

    println!("Added step {} to '{}'", recipe.steps.len(), recipe.name);
    Ok(())
}

/// Remove a step by its 1-based number, prompting for it when not given
///
/// Returns the removed instruction, or `None` if no number was given and the
/// recipe has no steps to choose from. A given number is always range-checked.
pub fn cmd_remove_step(
    store: &mut RecipeStore,
    prompter: &mut dyn Prompter,
    id: i64,
    step_number: Option<usize>,
) -> Result<Option<String>> {
    let mut recipe = find_recipe(store, id)?;

    let index = match step_number {
        Some(n) if (1..=recipe.steps.len()).contains(&n) => n - 1,
        Some(n) => {
            return Err(Error::Index {
                number: n,
                len: recipe.steps.len(),
            }
            .into());
        }
        None if recipe.steps.is_empty() => {
            println!("Recipe '{}' has no steps to remove.", recipe.name);
            return Ok(None);
        }
        None => prompt::step_selection(prompter, &recipe.steps)?,
    };

    let removed = recipe.remove_step(index)?;
    info!("Removing step {} from recipe {}", index + 1, id);
    store.update(&recipe)?;

    println!("Removed step {} from '{}': {}", index + 1, recipe.name, removed);
    Ok(Some(removed))
}
