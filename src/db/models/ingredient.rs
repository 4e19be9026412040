// src/db/models/ingredient.rs

//! Ingredient rows - ordered ingredient lines belonging to a recipe

use crate::error::Result;
use crate::recipe::Ingredient;
use rusqlite::{Connection, Row, params};

impl Ingredient {
    /// Insert `ingredients` for a recipe, numbering positions from 0
    pub fn insert_all(conn: &Connection, recipe_id: i64, ingredients: &[Ingredient]) -> Result<()> {
        let mut stmt = conn.prepare(
            "INSERT INTO ingredients (recipe_id, position, name, amount, unit)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;

        for (position, ingredient) in ingredients.iter().enumerate() {
            stmt.execute(params![
                recipe_id,
                position as i64,
                &ingredient.name,
                ingredient.amount,
                &ingredient.unit,
            ])?;
        }
        Ok(())
    }

    /// Find all ingredients of a recipe in insertion order
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT name, amount, unit FROM ingredients
             WHERE recipe_id = ?1 ORDER BY position",
        )?;

        let ingredients = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    /// Remove all ingredients of a recipe
    pub fn delete_for_recipe(conn: &Connection, recipe_id: i64) -> Result<()> {
        conn.execute("DELETE FROM ingredients WHERE recipe_id = ?1", [recipe_id])?;
        Ok(())
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get(0)?,
            amount: row.get(1)?,
            unit: row.get(2)?,
        })
    }
}
