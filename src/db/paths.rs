// src/db/paths.rs
//! Centralized path derivation for the recipe database

use std::path::{Path, PathBuf};

/// File name of the recipe database inside its data directory
pub const DB_FILE_NAME: &str = "recipes.db";

/// Default database path: `<data_dir>/recipebox/recipes.db`, or
/// `./recipes.db` when the platform has no data directory
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("recipebox"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DB_FILE_NAME)
}

/// Get the directory containing the database
pub fn db_dir(db_path: &str) -> PathBuf {
    Path::new(db_path)
        .parent()
        .unwrap_or(Path::new("."))
        .to_path_buf()
}
