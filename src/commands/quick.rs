// src/commands/quick.rs
//! Quick recipe listing

use anyhow::Result;
use recipebox::{RecipeStore, quick_recipes, render};

/// List recipes ready within `max_time` minutes
pub fn cmd_quick(store: &RecipeStore, max_time: u32) -> Result<()> {
    let recipes = quick_recipes(store, Some(max_time))?;

    if recipes.is_empty() {
        println!("No recipes ready in {} minutes or less.", max_time);
        return Ok(());
    }

    println!("Recipes ready in {} minutes or less:\n", max_time);
    print!("{}", render::render_table(&recipes));
    println!("\nTotal: {} recipe(s)", recipes.len());
    Ok(())
}
