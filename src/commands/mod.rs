// src/commands/mod.rs
//! Command handlers for the recipebox CLI
//!
//! Handlers take an already-open store and, for interactive commands, a
//! `Prompter`. They print results to stdout and return errors untouched;
//! `main` decides how each error is reported.

mod ingredient;
mod quick;
mod recipe;
mod step;
mod system;

pub use ingredient::cmd_add_ingredient;
pub use quick::cmd_quick;
pub use recipe::{cmd_create, cmd_delete, cmd_format, cmd_list, cmd_view};
pub use step::{cmd_add_step, cmd_remove_step};
pub use system::{cmd_completions, cmd_reset_data};

use anyhow::Result;
use recipebox::db::seed;
use recipebox::{Error, Recipe, RecipeStore};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Open the store at `db_path`, seeding the bundled recipes when the
/// database file is being created for the first time
pub fn open_store(db_path: &str) -> Result<RecipeStore> {
    open_store_with(db_path, seed::default_recipes)
}

/// Like [`open_store`], with the seed recipes supplied by `defaults`
///
/// A new file whose seeding fails is removed, so the next open starts over.
fn open_store_with<F>(db_path: &str, defaults: F) -> Result<RecipeStore>
where
    F: FnOnce() -> recipebox::Result<Vec<Recipe>>,
{
    let fresh = !Path::new(db_path).exists();
    let mut store = RecipeStore::open(db_path)?;

    if fresh {
        let seeded = defaults().and_then(|recipes| store.replace_all(recipes));
        match seeded {
            Ok(stored) => info!(
                "Created new recipe database at {} with {} default recipe(s)",
                db_path,
                stored.len()
            ),
            Err(e) => {
                drop(store);
                if let Err(rm) = fs::remove_file(db_path) {
                    warn!("Failed to remove unseeded database {}: {}", db_path, rm);
                }
                return Err(e.into());
            }
        }
    }

    Ok(store)
}

/// Fetch a recipe or fail with a not-found error
fn find_recipe(store: &RecipeStore, id: i64) -> Result<Recipe> {
    Ok(store.get_by_id(id)?.ok_or(Error::NotFound(id))?)
}

#[cfg(test)]
pub(crate) mod test_support {
    use recipebox::{LinePrompt, Recipe, RecipeStore};
    use std::io::Cursor;

    pub type ScriptedPrompt = LinePrompt<Cursor<Vec<u8>>, Vec<u8>>;

    /// A prompter that answers with the given lines
    pub fn scripted(answers: &[&str]) -> ScriptedPrompt {
        let mut input = answers.join("\n");
        input.push('\n');
        LinePrompt::new(Cursor::new(input.into_bytes()), Vec::new())
    }

    /// In-memory store holding one recipe with the given steps
    pub fn store_with_recipe(steps: &[&str]) -> (RecipeStore, i64) {
        let mut store = RecipeStore::in_memory().unwrap();
        let mut recipe = Recipe::new("Pancakes", 20, 4).unwrap();
        for step in steps {
            recipe.add_step(step).unwrap();
        }
        let id = store.create(recipe).unwrap().id.unwrap();
        (store, id)
    }
}
