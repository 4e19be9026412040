// src/db/seed.rs

//! Bundled default recipes used for first-run seeding and `reset-data`

use crate::error::Result;
use crate::recipe::Recipe;
use serde::Deserialize;

const DEFAULT_RECIPES_JSON: &str = include_str!("../../data/default_recipes.json");

#[derive(Deserialize)]
struct SeedIngredient {
    name: String,
    amount: f64,
    #[serde(default)]
    unit: String,
}

#[derive(Deserialize)]
struct SeedRecipe {
    name: String,
    cooking_time: u32,
    servings: u32,
    #[serde(default)]
    ingredients: Vec<SeedIngredient>,
    #[serde(default)]
    steps: Vec<String>,
}

/// Parse a seed document, running every entry through model validation
pub fn parse_recipes(json: &str) -> Result<Vec<Recipe>> {
    let seeds: Vec<SeedRecipe> = serde_json::from_str(json)?;

    seeds
        .into_iter()
        .map(|seed| {
            let mut recipe = Recipe::new(&seed.name, seed.cooking_time, seed.servings)?;
            for ingredient in &seed.ingredients {
                recipe.add_ingredient(&ingredient.name, ingredient.amount, &ingredient.unit)?;
            }
            for step in &seed.steps {
                recipe.add_step(step)?;
            }
            Ok(recipe)
        })
        .collect()
}

/// The recipes shipped with recipebox
pub fn default_recipes() -> Result<Vec<Recipe>> {
    parse_recipes(DEFAULT_RECIPES_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_recipes_are_valid() {
        let recipes = default_recipes().unwrap();
        assert!(!recipes.is_empty());
        for recipe in &recipes {
            assert!(recipe.id.is_none());
            assert!(!recipe.steps.is_empty(), "{} has no steps", recipe.name);
        }
    }

    #[test]
    fn test_defaults_include_quick_and_slow_recipes() {
        let recipes = default_recipes().unwrap();
        assert!(recipes.iter().any(|r| r.cooking_time <= 30));
        assert!(recipes.iter().any(|r| r.cooking_time > 30));
    }

    #[test]
    fn test_parse_rejects_invalid_entries() {
        let json = r#"[{ "name": "", "cooking_time": 5, "servings": 1 }]"#;
        assert!(matches!(parse_recipes(json), Err(Error::Validation { .. })));

        let json = r#"[{ "name": "Soup", "cooking_time": -5, "servings": 1 }]"#;
        assert!(matches!(parse_recipes(json), Err(Error::Json(_))));
    }
}
