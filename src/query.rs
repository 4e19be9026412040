// src/query.rs

//! Derived views over the stored recipe collection

use crate::db::RecipeStore;
use crate::error::Result;
use crate::recipe::Recipe;
use tracing::debug;

/// Threshold used by `quick` when no time is given, in minutes
pub const DEFAULT_QUICK_MINUTES: u32 = 30;

/// Recipes with `cooking_time <= max_time`, in store order
///
/// `None` uses [`DEFAULT_QUICK_MINUTES`].
pub fn quick_recipes(store: &RecipeStore, max_time: Option<u32>) -> Result<Vec<Recipe>> {
    let max_time = max_time.unwrap_or(DEFAULT_QUICK_MINUTES);
    let quick = filter_quick(store.list()?, max_time);
    debug!("{} recipe(s) ready within {} minutes", quick.len(), max_time);
    Ok(quick)
}

/// Keep only the recipes ready within `max_time` minutes, preserving order
pub fn filter_quick(recipes: impl IntoIterator<Item = Recipe>, max_time: u32) -> Vec<Recipe> {
    recipes
        .into_iter()
        .filter(|recipe| recipe.is_quick(max_time))
        .collect()
}
