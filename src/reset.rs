// src/reset.rs

//! Data reset procedures used by `reset-data`
//!
//! The CLI treats a reset as an opaque, side-effecting call that may fail.
//! Two procedures ship: reloading the bundled defaults in-process, or running
//! a user-configured shell command.

use crate::db::{RecipeStore, seed};
use crate::error::{Error, Result};
use std::process::Command;
use tracing::{debug, info};

/// Something that restores the recipe collection to a known state
pub trait ResetProcedure {
    /// Short description shown before asking for confirmation
    fn describe(&self) -> String;

    /// Perform the reset
    fn run(&self, store: &mut RecipeStore) -> Result<()>;
}

/// Replace the collection with the bundled default recipes
///
/// Runs as a single transaction: on failure nothing is changed.
#[derive(Debug, Default)]
pub struct SeedReset;

impl ResetProcedure for SeedReset {
    fn describe(&self) -> String {
        "replace all recipes with the bundled defaults".to_string()
    }

    fn run(&self, store: &mut RecipeStore) -> Result<()> {
        let recipes = seed::default_recipes()?;
        let stored = store.replace_all(recipes)?;
        info!("Reset recipe collection to {} default recipe(s)", stored.len());
        Ok(())
    }
}

/// Run an external shell command, e.g. a project script that restores a
/// database snapshot
///
/// The command receives the database path in `RECIPEBOX_DB`. Whatever it
/// does to the data is its own business; a non-zero exit is reported as a
/// failure.
#[derive(Debug)]
pub struct ShellReset {
    command: String,
}

impl ShellReset {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl ResetProcedure for ShellReset {
    fn describe(&self) -> String {
        format!("run `{}`", self.command)
    }

    fn run(&self, store: &mut RecipeStore) -> Result<()> {
        debug!("Running reset command: {}", self.command);

        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(&self.command);
        if let Some(path) = store.path() {
            cmd.env("RECIPEBOX_DB", path);
        }

        let status = cmd
            .status()
            .map_err(|e| Error::Reset(format!("could not run `{}`: {}", self.command, e)))?;

        if !status.success() {
            return Err(Error::Reset(format!(
                "`{}` exited with {}",
                self.command, status
            )));
        }

        info!("Reset command completed: {}", self.command);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;

    #[test]
    fn test_seed_reset_replaces_collection() {
        let mut store = RecipeStore::in_memory().unwrap();
        store.create(Recipe::new("Mine", 3, 1).unwrap()).unwrap();

        SeedReset.run(&mut store).unwrap();

        let recipes = store.list().unwrap();
        let defaults = seed::default_recipes().unwrap();
        assert_eq!(recipes.len(), defaults.len());
        assert!(recipes.iter().all(|r| r.name != "Mine"));
        assert_eq!(recipes[0].id, Some(1));
    }

    #[test]
    fn test_shell_reset_success() {
        let mut store = RecipeStore::in_memory().unwrap();
        ShellReset::new("true").run(&mut store).unwrap();
    }

    #[test]
    fn test_shell_reset_failure_leaves_data() {
        let mut store = RecipeStore::in_memory().unwrap();
        store.create(Recipe::new("Keep me", 3, 1).unwrap()).unwrap();

        let result = ShellReset::new("exit 3").run(&mut store);

        assert!(matches!(result, Err(Error::Reset(_))));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_describe() {
        assert_eq!(ShellReset::new("make reset").describe(), "run `make reset`");
        assert!(SeedReset.describe().contains("defaults"));
    }
}
