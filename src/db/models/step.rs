// src/db/models/step.rs

//! Step rows - ordered instructions belonging to a recipe

use crate::error::Result;
use rusqlite::{Connection, params};

/// Accessors for the `steps` table
///
/// Steps are plain strings in the model, so the SQL hangs off this marker
/// type instead of a struct of its own.
pub struct StepRows;

impl StepRows {
    /// Insert `steps` for a recipe, numbering positions from 0
    pub fn insert_all(conn: &Connection, recipe_id: i64, steps: &[String]) -> Result<()> {
        let mut stmt = conn.prepare(
            "INSERT INTO steps (recipe_id, position, instruction) VALUES (?1, ?2, ?3)",
        )?;

        for (position, instruction) in steps.iter().enumerate() {
            stmt.execute(params![recipe_id, position as i64, instruction])?;
        }
        Ok(())
    }

    /// Find all steps of a recipe in order
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<String>> {
        let mut stmt = conn.prepare(
            "SELECT instruction FROM steps WHERE recipe_id = ?1 ORDER BY position",
        )?;

        let steps: Vec<String> = stmt
            .query_map([recipe_id], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(steps)
    }

    /// Remove all steps of a recipe
    pub fn delete_for_recipe(conn: &Connection, recipe_id: i64) -> Result<()> {
        conn.execute("DELETE FROM steps WHERE recipe_id = ?1", [recipe_id])?;
        Ok(())
    }
}
