// src/db/store.rs

//! RecipeStore - the owned handle over the persisted recipe collection

use super::models::StepRows;
use crate::error::{Error, Result};
use crate::recipe::{Ingredient, Recipe};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The authoritative recipe collection
///
/// Reads return detached copies; changes made to a returned `Recipe` are not
/// visible until passed back through [`RecipeStore::update`].
pub struct RecipeStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl RecipeStore {
    /// Open (creating and migrating if needed) the store at `db_path`
    pub fn open(db_path: &str) -> Result<Self> {
        debug!("Opening recipe store at {}", db_path);
        Ok(Self {
            conn: super::open(db_path)?,
            path: Some(PathBuf::from(db_path)),
        })
    }

    /// Open a throwaway in-memory store
    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            conn: super::open_in_memory()?,
            path: None,
        })
    }

    /// Path of the backing database file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All recipes, ordered by id
    pub fn list(&self) -> Result<Vec<Recipe>> {
        let mut recipes = Recipe::list_all(&self.conn)?;
        for recipe in &mut recipes {
            load_children(&self.conn, recipe)?;
        }
        Ok(recipes)
    }

    /// Look up a recipe; `None` when no recipe has this id
    pub fn get_by_id(&self, id: i64) -> Result<Option<Recipe>> {
        let Some(mut recipe) = Recipe::find_by_id(&self.conn, id)? else {
            return Ok(None);
        };
        load_children(&self.conn, &mut recipe)?;
        Ok(Some(recipe))
    }

    /// Number of stored recipes
    pub fn len(&self) -> Result<usize> {
        Recipe::count(&self.conn)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Persist a new recipe, returning it with its assigned id
    ///
    /// Any id already present on `recipe` is ignored.
    pub fn create(&mut self, mut recipe: Recipe) -> Result<Recipe> {
        if let Some(stale) = recipe.id.take() {
            debug!("Ignoring caller-supplied id {} on create", stale);
        }

        super::transaction(&mut self.conn, |tx| {
            let id = recipe.insert(tx)?;
            Ingredient::insert_all(tx, id, &recipe.ingredients)?;
            StepRows::insert_all(tx, id, &recipe.steps)?;
            Ok(())
        })?;

        info!("Created recipe {:?}: {}", recipe.id, recipe.name);
        Ok(recipe)
    }

    /// Overwrite the stored recipe with the same id, ingredients and steps included
    pub fn update(&mut self, recipe: &Recipe) -> Result<()> {
        let id = recipe
            .id
            .ok_or_else(|| Error::validation("id", "recipe has not been saved yet"))?;

        super::transaction(&mut self.conn, |tx| {
            if !recipe.update_row(tx)? {
                return Err(Error::NotFound(id));
            }
            Ingredient::delete_for_recipe(tx, id)?;
            Ingredient::insert_all(tx, id, &recipe.ingredients)?;
            StepRows::delete_for_recipe(tx, id)?;
            StepRows::insert_all(tx, id, &recipe.steps)?;
            Ok(())
        })?;

        info!("Updated recipe {}: {}", id, recipe.name);
        Ok(())
    }

    /// Delete a recipe; returns whether anything was removed
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let removed = super::transaction(&mut self.conn, |tx| Recipe::delete(tx, id))?;
        if removed {
            info!("Deleted recipe {}", id);
        } else {
            debug!("Delete requested for missing recipe {}", id);
        }
        Ok(removed)
    }

    /// Replace the whole collection in one transaction
    ///
    /// Ids restart at 1. On failure the previous collection is left intact.
    pub fn replace_all(&mut self, recipes: Vec<Recipe>) -> Result<Vec<Recipe>> {
        let stored = super::transaction(&mut self.conn, |tx| {
            let removed = Recipe::delete_all(tx)?;
            debug!("Removed {} recipe(s) before replacing collection", removed);

            let mut stored = Vec::with_capacity(recipes.len());
            for mut recipe in recipes {
                recipe.id = None;
                let id = recipe.insert(tx)?;
                Ingredient::insert_all(tx, id, &recipe.ingredients)?;
                StepRows::insert_all(tx, id, &recipe.steps)?;
                stored.push(recipe);
            }
            Ok(stored)
        })?;

        info!("Replaced recipe collection with {} recipe(s)", stored.len());
        Ok(stored)
    }
}

fn load_children(conn: &Connection, recipe: &mut Recipe) -> Result<()> {
    if let Some(id) = recipe.id {
        recipe.ingredients = Ingredient::find_by_recipe(conn, id)?;
        recipe.steps = StepRows::find_by_recipe(conn, id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str, cooking_time: u32) -> Recipe {
        Recipe::new(name, cooking_time, 2).unwrap()
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = RecipeStore::in_memory().unwrap();

        let first = store.create(recipe("Tea", 5)).unwrap();
        let second = store.create(recipe("Toast", 3)).unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(store.get_by_id(2).unwrap().unwrap().name, "Toast");
    }

    #[test]
    fn test_create_ignores_supplied_id() {
        let mut store = RecipeStore::in_memory().unwrap();
        store.create(recipe("Tea", 5)).unwrap();

        let mut copy = store.get_by_id(1).unwrap().unwrap();
        copy.name = "Second Tea".to_string();
        let created = store.create(copy).unwrap();

        assert_eq!(created.id, Some(2));
        assert_eq!(store.len().unwrap(), 2);
        assert_eq!(store.get_by_id(1).unwrap().unwrap().name, "Tea");
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = RecipeStore::in_memory().unwrap();
        store.create(recipe("A", 1)).unwrap();
        let b = store.create(recipe("B", 1)).unwrap();

        assert!(store.delete(b.id.unwrap()).unwrap());
        let c = store.create(recipe("C", 1)).unwrap();

        assert_eq!(c.id, Some(3));
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = RecipeStore::in_memory().unwrap();
        assert!(store.get_by_id(42).unwrap().is_none());
    }

    #[test]
    fn test_update_persists_children() {
        let mut store = RecipeStore::in_memory().unwrap();
        let mut stored = store.create(recipe("Curry", 45)).unwrap();

        stored.add_ingredient("Rice", 200.0, "g").unwrap();
        stored.add_ingredient("Chili", 2.0, "").unwrap();
        stored.add_step("Cook rice").unwrap();
        stored.add_step("Make sauce").unwrap();
        store.update(&stored).unwrap();

        let loaded = store.get_by_id(stored.id.unwrap()).unwrap().unwrap();
        assert_eq!(loaded, stored);

        stored.remove_step(0).unwrap();
        store.update(&stored).unwrap();
        let loaded = store.get_by_id(stored.id.unwrap()).unwrap().unwrap();
        assert_eq!(loaded.steps, vec!["Make sauce"]);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut store = RecipeStore::in_memory().unwrap();
        let mut ghost = recipe("Ghost", 10);
        ghost.id = Some(99);

        assert!(matches!(store.update(&ghost), Err(Error::NotFound(99))));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_update_unsaved_is_validation_error() {
        let mut store = RecipeStore::in_memory().unwrap();
        assert!(matches!(
            store.update(&recipe("Draft", 10)),
            Err(Error::Validation { field: "id", .. })
        ));
    }

    #[test]
    fn test_delete_missing_returns_false() {
        let mut store = RecipeStore::in_memory().unwrap();
        store.create(recipe("Tea", 5)).unwrap();

        assert!(!store.delete(7).unwrap());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_list_is_ordered_and_stable() {
        let mut store = RecipeStore::in_memory().unwrap();
        for name in ["C", "A", "B"] {
            store.create(recipe(name, 10)).unwrap();
        }

        let first: Vec<_> = store.list().unwrap().into_iter().map(|r| r.name).collect();
        let second: Vec<_> = store.list().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(first, vec!["C", "A", "B"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_replace_all_restarts_ids() {
        let mut store = RecipeStore::in_memory().unwrap();
        for name in ["Old 1", "Old 2", "Old 3"] {
            store.create(recipe(name, 10)).unwrap();
        }

        let stored = store
            .replace_all(vec![recipe("New 1", 5), recipe("New 2", 50)])
            .unwrap();

        assert_eq!(stored[0].id, Some(1));
        assert_eq!(stored[1].id, Some(2));
        let names: Vec<_> = store.list().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["New 1", "New 2"]);
    }
}
