// src/cli/mod.rs
//! CLI definitions for recipebox
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! - Browsing: `list`, `view`, `format`, `quick`
//! - Editing: `create`, `add-ingredient`, `add-step`, `remove-step`, `delete`
//! - Maintenance: `reset-data`, `completions`

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use recipebox::DEFAULT_QUICK_MINUTES;
use recipebox::db::paths;

#[derive(Parser)]
#[command(name = "recipebox")]
#[command(author = "Recipebox Contributors")]
#[command(version)]
#[command(about = "Manage your recipes from the command line", long_about = None)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Database location shared by every command that touches recipes
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Path to the database file [default: <data dir>/recipebox/recipes.db]
    #[arg(short, long, env = "RECIPEBOX_DB")]
    pub db_path: Option<String>,
}

impl DbArgs {
    /// The configured path, or the platform default
    pub fn resolve(&self) -> String {
        self.db_path
            .clone()
            .unwrap_or_else(|| paths::default_db_path().to_string_lossy().into_owned())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all recipes
    List {
        #[command(flatten)]
        db: DbArgs,
    },

    /// Show the stored details of a recipe
    View {
        /// Recipe ID
        id: i64,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Print a recipe formatted for reading
    Format {
        /// Recipe ID
        id: i64,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Create a new recipe (interactive)
    Create {
        #[command(flatten)]
        db: DbArgs,
    },

    /// Add an ingredient to a recipe (interactive)
    AddIngredient {
        /// Recipe ID
        id: i64,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Add a step to a recipe (interactive)
    AddStep {
        /// Recipe ID
        id: i64,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Remove a step from a recipe
    RemoveStep {
        /// Recipe ID
        id: i64,

        /// Step number, starting at 1 (prompts when omitted)
        step_index: Option<usize>,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Delete a recipe (asks for confirmation)
    Delete {
        /// Recipe ID
        id: i64,

        #[command(flatten)]
        db: DbArgs,
    },

    /// List recipes ready within the given number of minutes
    Quick {
        /// Maximum cooking time in minutes
        #[arg(default_value_t = DEFAULT_QUICK_MINUTES)]
        time: u32,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Reset the recipe collection (asks for confirmation)
    ResetData {
        /// Shell command to run instead of restoring the bundled recipes
        #[arg(long, env = "RECIPEBOX_RESET_COMMAND")]
        reset_command: Option<String>,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_quick_defaults_to_thirty() {
        let cli = Cli::try_parse_from(["recipebox", "quick", "--db-path", "x.db"]).unwrap();
        match cli.command {
            Commands::Quick { time, db } => {
                assert_eq!(time, DEFAULT_QUICK_MINUTES);
                assert_eq!(db.resolve(), "x.db");
            }
            _ => panic!("expected quick"),
        }
    }

    #[test]
    fn test_remove_step_optional_index() {
        let cli = Cli::try_parse_from(["recipebox", "remove-step", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::RemoveStep { id: 3, step_index: None, .. }
        ));

        let cli = Cli::try_parse_from(["recipebox", "remove-step", "3", "2"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::RemoveStep { id: 3, step_index: Some(2), .. }
        ));
    }

    #[test]
    fn test_strict_argument_validation() {
        assert!(Cli::try_parse_from(["recipebox"]).is_err());
        assert!(Cli::try_parse_from(["recipebox", "cook"]).is_err());
        assert!(Cli::try_parse_from(["recipebox", "view"]).is_err());
        assert!(Cli::try_parse_from(["recipebox", "view", "abc"]).is_err());
        assert!(Cli::try_parse_from(["recipebox", "quick", "-5"]).is_err());
    }
}
