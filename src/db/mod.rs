// src/db/mod.rs

//! SQLite persistence for recipes
//!
//! - `open` / `open_in_memory` / `transaction` are the low-level connection helpers
//! - `models` holds the row-level SQL for recipes, ingredients, and steps
//! - `RecipeStore` is the owned handle the CLI talks to; every write it
//!   performs runs inside a single transaction

pub mod models;
pub mod paths;
pub mod schema;
pub mod seed;
mod store;

pub use store::RecipeStore;

use crate::error::Result;
use rusqlite::{Connection, Transaction};
use std::fs;
use tracing::debug;

/// Open a database connection, creating and migrating the file as needed
pub fn open(db_path: &str) -> Result<Connection> {
    let dir = paths::db_dir(db_path);
    if !dir.as_os_str().is_empty() && !dir.exists() {
        debug!("Creating database directory: {}", dir.display());
        fs::create_dir_all(&dir)?;
    }

    let conn = Connection::open(db_path)?;
    configure(&conn)?;
    schema::migrate(&conn)?;
    Ok(conn)
}

/// Open a private in-memory database with the current schema
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    schema::migrate(&conn)?;
    Ok(conn)
}

/// Run `f` inside a transaction, committing only if it succeeds
///
/// If `f` returns an error the transaction is rolled back when it is dropped.
pub fn transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    let tx = conn.transaction()?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}

fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(())
}
