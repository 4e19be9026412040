// src/render.rs

//! Text rendering of recipes for the console

use crate::error::Result;
use crate::recipe::{Ingredient, Recipe};

/// Human-readable rendering of a single recipe
pub fn render(recipe: &Recipe) -> String {
    let mut out = match recipe.id {
        Some(id) => format!("{} (#{})\n", recipe.name, id),
        None => format!("{}\n", recipe.name),
    };
    out.push_str(&format!(
        "Cooking time: {} | Servings: {}\n",
        format_minutes(recipe.cooking_time),
        recipe.servings
    ));

    out.push_str("\nIngredients:\n");
    if recipe.ingredients.is_empty() {
        out.push_str("  (none)\n");
    }
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("  - {}\n", format_ingredient(ingredient)));
    }

    out.push_str("\nSteps:\n");
    if recipe.steps.is_empty() {
        out.push_str("  (none)\n");
    } else {
        out.push_str(&render_steps(&recipe.steps));
    }

    out
}

/// The stored record as pretty-printed JSON
pub fn render_details(recipe: &Recipe) -> Result<String> {
    Ok(serde_json::to_string_pretty(recipe)?)
}

/// Steps numbered from 1, one per line
pub fn render_steps(steps: &[String]) -> String {
    let width = steps.len().to_string().len();
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("  {:>width$}. {}\n", i + 1, step, width = width))
        .collect()
}

/// Table of recipes: id, name, cooking time, servings
pub fn render_table(recipes: &[Recipe]) -> String {
    let id_width = recipes
        .iter()
        .map(|r| r.id.map_or(1, |id| id.to_string().len()))
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let name_width = recipes
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = format!(
        "{:>id_width$}  {:<name_width$}  {:>8}  {:>8}\n",
        "ID", "NAME", "TIME", "SERVINGS"
    );
    for recipe in recipes {
        let id = recipe.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        out.push_str(&format!(
            "{:>id_width$}  {:<name_width$}  {:>8}  {:>8}\n",
            id,
            recipe.name,
            format_minutes(recipe.cooking_time),
            recipe.servings
        ));
    }
    out
}

/// "200 g Spaghetti", "2 Onion"
pub fn format_ingredient(ingredient: &Ingredient) -> String {
    let amount = format_amount(ingredient.amount);
    if ingredient.unit.is_empty() {
        format!("{} {}", amount, ingredient.name)
    } else {
        format!("{} {} {}", amount, ingredient.unit, ingredient.name)
    }
}

/// Whole amounts print without a fractional part
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{}", amount)
    }
}

fn format_minutes(minutes: u32) -> String {
    format!("{} min", minutes)
}
