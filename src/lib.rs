// src/lib.rs

//! Recipebox - a command-line recipe manager
//!
//! # Architecture
//!
//! - `recipe`: the recipe model; pure construction and mutation, no I/O
//! - `db`: SQLite persistence; `RecipeStore` owns the collection
//! - `query`: filtered views such as quick recipes
//! - `render`: console formatting
//! - `prompt`: the `Prompter` capability used by interactive commands
//! - `reset`: procedures behind `reset-data`

pub mod db;
mod error;
pub mod prompt;
pub mod query;
pub mod recipe;
pub mod render;
pub mod reset;

pub use db::RecipeStore;
pub use error::{Error, Result};
pub use prompt::{LinePrompt, Prompter};
pub use query::{DEFAULT_QUICK_MINUTES, quick_recipes};
pub use recipe::{Ingredient, Recipe};
pub use reset::{ResetProcedure, SeedReset, ShellReset};
