// src/commands/system.rs
//! Maintenance commands: data reset and shell completions

use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use recipebox::{Prompter, RecipeStore, ResetProcedure};
use std::io;
use tracing::info;

/// Reset the recipe collection after confirmation
///
/// Returns whether the reset ran. A failing procedure is returned as an
/// error for `main` to report.
pub fn cmd_reset_data(
    store: &mut RecipeStore,
    prompter: &mut dyn Prompter,
    procedure: &dyn ResetProcedure,
) -> Result<bool> {
    let question = format!(
        "This will {}. Existing recipes may be lost. Continue?",
        procedure.describe()
    );
    if !prompter.confirm(&question, false)? {
        println!("Reset cancelled.");
        return Ok(false);
    }

    info!("Resetting recipe data: {}", procedure.describe());
    procedure.run(store)?;
    println!("Recipe data has been reset.");
    Ok(true)
}

/// Print a completion script for `shell` to stdout
pub fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "recipebox", &mut io::stdout());
    Ok(())
}
