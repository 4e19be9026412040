// src/recipe/mod.rs

//! Recipe model - the recipe record and its construction/mutation primitives
//!
//! A `Recipe` built here is a detached value: nothing in this module touches
//! the database. Callers persist it through [`crate::db::RecipeStore`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl Ingredient {
    /// Create a validated ingredient
    pub fn new(name: &str, amount: f64, unit: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("ingredient name", "must not be empty"));
        }
        if !amount.is_finite() {
            return Err(Error::validation("amount", "must be a number"));
        }
        if amount <= 0.0 {
            return Err(Error::validation("amount", "must be greater than zero"));
        }

        Ok(Self {
            name: name.to_string(),
            amount,
            unit: unit.trim().to_string(),
        })
    }
}

/// A recipe: name, timing, servings, ingredients, and steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Assigned by the store on create; `None` until persisted
    pub id: Option<i64>,
    pub name: String,
    /// Cooking time in minutes
    pub cooking_time: u32,
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    /// Create a new recipe with no ingredients or steps
    pub fn new(name: &str, cooking_time: u32, servings: u32) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("name", "must not be empty"));
        }
        if servings == 0 {
            return Err(Error::validation("servings", "must be at least 1"));
        }

        Ok(Self {
            id: None,
            name: name.to_string(),
            cooking_time,
            servings,
            ingredients: Vec::new(),
            steps: Vec::new(),
        })
    }

    /// Append an ingredient
    pub fn add_ingredient(&mut self, name: &str, amount: f64, unit: &str) -> Result<()> {
        let ingredient = Ingredient::new(name, amount, unit)?;
        self.ingredients.push(ingredient);
        Ok(())
    }

    /// Append a step
    pub fn add_step(&mut self, instruction: &str) -> Result<()> {
        let instruction = instruction.trim();
        if instruction.is_empty() {
            return Err(Error::validation("instruction", "must not be empty"));
        }
        self.steps.push(instruction.to_string());
        Ok(())
    }

    /// Remove the step at zero-based `index`, returning it
    ///
    /// Later steps shift down by one. An out-of-range index is an error and
    /// leaves the steps untouched; the error reports the 1-based step number.
    pub fn remove_step(&mut self, index: usize) -> Result<String> {
        if index >= self.steps.len() {
            return Err(Error::Index {
                number: index.saturating_add(1),
                len: self.steps.len(),
            });
        }
        Ok(self.steps.remove(index))
    }

    /// Whether this recipe counts as quick for the given threshold
    pub fn is_quick(&self, max_time: u32) -> bool {
        self.cooking_time <= max_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_with_steps(steps: &[&str]) -> Recipe {
        let mut recipe = Recipe::new("Pancakes", 20, 4).unwrap();
        for step in steps {
            recipe.add_step(step).unwrap();
        }
        recipe
    }

    #[test]
    fn test_new_recipe_is_empty() {
        let recipe = Recipe::new("Tea", 5, 1).unwrap();
        assert_eq!(recipe.id, None);
        assert_eq!(recipe.name, "Tea");
        assert_eq!(recipe.cooking_time, 5);
        assert_eq!(recipe.servings, 1);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
    }

    #[test]
    fn test_new_recipe_allows_zero_cooking_time() {
        let recipe = Recipe::new("Salad", 0, 2).unwrap();
        assert_eq!(recipe.cooking_time, 0);
    }

    #[test]
    fn test_new_recipe_rejects_empty_name() {
        assert!(matches!(
            Recipe::new("   ", 10, 2),
            Err(Error::Validation { field: "name", .. })
        ));
    }

    #[test]
    fn test_new_recipe_rejects_zero_servings() {
        assert!(matches!(
            Recipe::new("Soup", 10, 0),
            Err(Error::Validation { field: "servings", .. })
        ));
    }

    #[test]
    fn test_add_ingredient_preserves_order_and_duplicates() {
        let mut recipe = Recipe::new("Bread", 60, 8).unwrap();
        recipe.add_ingredient("Flour", 500.0, "g").unwrap();
        recipe.add_ingredient("Water", 350.0, "ml").unwrap();
        recipe.add_ingredient("Flour", 50.0, "g").unwrap();

        let names: Vec<_> = recipe.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Flour", "Water", "Flour"]);
        assert_eq!(recipe.ingredients[2].amount, 50.0);
    }

    #[test]
    fn test_add_ingredient_validation() {
        let mut recipe = Recipe::new("Bread", 60, 8).unwrap();
        assert!(recipe.add_ingredient("", 1.0, "g").is_err());
        assert!(recipe.add_ingredient("Salt", f64::NAN, "g").is_err());
        assert!(recipe.add_ingredient("Salt", f64::INFINITY, "g").is_err());
        assert!(recipe.add_ingredient("Salt", 0.0, "g").is_err());
        assert!(recipe.add_ingredient("Salt", -2.0, "g").is_err());
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_add_step_rejects_empty() {
        let mut recipe = recipe_with_steps(&[]);
        assert!(matches!(
            recipe.add_step("  "),
            Err(Error::Validation { field: "instruction", .. })
        ));
        assert!(recipe.steps.is_empty());
    }

    #[test]
    fn test_add_then_remove_step_restores_steps() {
        let mut recipe = recipe_with_steps(&["Mix", "Rest"]);
        let before = recipe.steps.clone();

        recipe.add_step("Fry").unwrap();
        let removed = recipe.remove_step(recipe.steps.len() - 1).unwrap();

        assert_eq!(removed, "Fry");
        assert_eq!(recipe.steps, before);
    }

    #[test]
    fn test_remove_middle_step_shifts_down() {
        let mut recipe = recipe_with_steps(&["step0", "step1", "step2"]);
        recipe.remove_step(1).unwrap();
        assert_eq!(recipe.steps, vec!["step0", "step2"]);
    }

    #[test]
    fn test_remove_step_out_of_range() {
        let mut recipe = recipe_with_steps(&["a", "b"]);
        for index in [2, 3, usize::MAX] {
            match recipe.remove_step(index) {
                Err(Error::Index { number, len }) => {
                    assert_eq!(number, index.saturating_add(1));
                    assert_eq!(len, 2);
                }
                other => panic!("expected index error, got {:?}", other),
            }
        }
        assert_eq!(recipe.steps, vec!["a", "b"]);

        let mut empty = recipe_with_steps(&[]);
        assert!(empty.remove_step(0).is_err());
    }

    #[test]
    fn test_is_quick() {
        let recipe = Recipe::new("Toast", 30, 1).unwrap();
        assert!(recipe.is_quick(30));
        assert!(!recipe.is_quick(29));
    }
}
