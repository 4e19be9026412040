// src/db/models/mod.rs

//! Row-level database access for recipe entities
//!
//! These impls attach SQL to the plain model types from [`crate::recipe`].
//! They operate on a borrowed `Connection` (or `Transaction`) and never open
//! transactions themselves; `RecipeStore` decides the transaction boundaries.

mod ingredient;
mod recipe;
mod step;

pub use step::StepRows;
