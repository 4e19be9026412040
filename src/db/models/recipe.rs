// src/db/models/recipe.rs

//! Recipe header rows (name, timing, servings)
//!
//! Ingredients and steps live in their own tables; see `ingredient` and
//! `step`. The lookups here return recipes with empty child lists.

use crate::error::Result;
use crate::recipe::Recipe;
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_COLUMNS: &str = "SELECT id, name, cooking_time, servings FROM recipes";

impl Recipe {
    /// Insert this recipe's header row, assigning a fresh id
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO recipes (name, cooking_time, servings) VALUES (?1, ?2, ?3)",
            params![&self.name, &self.cooking_time, &self.servings],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Overwrite the header row matching `self.id`
    ///
    /// Returns false when no row has that id (or the recipe has no id).
    pub fn update_row(&self, conn: &Connection) -> Result<bool> {
        let Some(id) = self.id else {
            return Ok(false);
        };

        let changed = conn.execute(
            "UPDATE recipes
             SET name = ?1, cooking_time = ?2, servings = ?3, updated_at = CURRENT_TIMESTAMP
             WHERE id = ?4",
            params![&self.name, &self.cooking_time, &self.servings, id],
        )?;
        Ok(changed > 0)
    }

    /// Find a recipe header by id
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;
        let recipe = stmt.query_row([id], Self::from_row).optional()?;
        Ok(recipe)
    }

    /// List all recipe headers ordered by id
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id"))?;
        let recipes = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(recipes)
    }

    /// Count stored recipes
    pub fn count(conn: &Connection) -> Result<usize> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Delete a recipe by id; ingredients and steps cascade
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let changed = conn.execute("DELETE FROM recipes WHERE id = ?1", [id])?;
        Ok(changed > 0)
    }

    /// Delete every recipe and restart id assignment at 1
    pub fn delete_all(conn: &Connection) -> Result<usize> {
        let removed = conn.execute("DELETE FROM recipes", [])?;
        conn.execute("DELETE FROM sqlite_sequence WHERE name = 'recipes'", [])?;
        Ok(removed)
    }

    /// Convert a database row to a Recipe
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            cooking_time: row.get(2)?,
            servings: row.get(3)?,
            ingredients: Vec::new(),
            steps: Vec::new(),
        })
    }
}
