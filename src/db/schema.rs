// src/db/schema.rs

//! Database schema definitions and migrations
//!
//! Each entry in `MIGRATIONS` brings the schema up by one version. The
//! `schema_version` table records which versions have been applied.

use crate::error::Result;
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

type Migration = fn(&Connection) -> Result<()>;

/// Migrations in application order; index 0 is version 1
const MIGRATIONS: &[Migration] = &[migrate_v1];

/// Current schema version
pub const SCHEMA_VERSION: i32 = MIGRATIONS.len() as i32;

/// Initialize the schema version tracking table
fn init_schema_version(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;
    Ok(())
}

/// Get the current schema version from the database
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    init_schema_version(conn)?;

    let version = conn
        .query_row(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?
        .unwrap_or(0);

    Ok(version)
}

/// Set the schema version
fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Apply all pending migrations to bring the database up to date
pub fn migrate(conn: &Connection) -> Result<()> {
    let current_version = get_schema_version(conn)?;
    debug!("Current schema version: {}", current_version);

    if current_version >= SCHEMA_VERSION {
        return Ok(());
    }

    for (idx, migration) in MIGRATIONS.iter().enumerate() {
        let version = idx as i32 + 1;
        if version <= current_version {
            continue;
        }
        info!("Applying migration to version {}", version);
        migration(conn)?;
        set_schema_version(conn, version)?;
    }

    info!(
        "Schema migration complete. Now at version {}",
        SCHEMA_VERSION
    );
    Ok(())
}

/// Initial schema - Version 1
///
/// - recipes: one row per recipe; AUTOINCREMENT keeps ids from being reused
/// - ingredients: ordered ingredient lines, keyed by (recipe_id, position)
/// - steps: ordered instructions, keyed by (recipe_id, position)
fn migrate_v1(conn: &Connection) -> Result<()> {
    debug!("Creating schema version 1");

    conn.execute_batch(
        "
        CREATE TABLE recipes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK(length(trim(name)) > 0),
            cooking_time INTEGER NOT NULL CHECK(cooking_time >= 0),
            servings INTEGER NOT NULL CHECK(servings > 0),
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT
        );

        CREATE INDEX idx_recipes_cooking_time ON recipes(cooking_time);

        CREATE TABLE ingredients (
            recipe_id INTEGER NOT NULL,
            position INTEGER NOT NULL,
            name TEXT NOT NULL,
            amount REAL NOT NULL,
            unit TEXT NOT NULL DEFAULT '',
            PRIMARY KEY (recipe_id, position),
            FOREIGN KEY (recipe_id) REFERENCES recipes(id) ON DELETE CASCADE
        );

        CREATE TABLE steps (
            recipe_id INTEGER NOT NULL,
            position INTEGER NOT NULL,
            instruction TEXT NOT NULL,
            PRIMARY KEY (recipe_id, position),
            FOREIGN KEY (recipe_id) REFERENCES recipes(id) ON DELETE CASCADE
        );
        ",
    )?;

    Ok(())
}
