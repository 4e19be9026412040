// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use recipebox::{Recipe, RecipeStore};
use tempfile::TempDir;

/// Create an empty on-disk store.
///
/// Returns (TempDir, db_path, store) - keep the TempDir alive to prevent cleanup.
pub fn setup_store() -> (TempDir, String, RecipeStore) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir
        .path()
        .join("recipes.db")
        .to_str()
        .unwrap()
        .to_string();

    let store = RecipeStore::open(&db_path).unwrap();
    (temp_dir, db_path, store)
}

/// Build a valid recipe with the given steps
pub fn recipe(name: &str, cooking_time: u32, steps: &[&str]) -> Recipe {
    let mut recipe = Recipe::new(name, cooking_time, 2).unwrap();
    for step in steps {
        recipe.add_step(step).unwrap();
    }
    recipe
}
