// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use recipebox::{LinePrompt, ResetProcedure, SeedReset, ShellReset};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let (message, code) = report(&e);
            eprintln!("{}", message);
            ExitCode::from(code)
        }
    }
}

/// The stderr line and process exit status for a failed command
fn report(e: &anyhow::Error) -> (String, u8) {
    match e.downcast_ref::<recipebox::Error>() {
        // A missing recipe is a user-level condition, not a failure
        Some(err) if err.is_not_found() => (format!("warning: {}", err), 0),
        _ => (format!("error: {:#}", e), 1),
    }
}

/// Log to stderr so command output on stdout stays clean
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List { db } => {
            let store = commands::open_store(&db.resolve())?;
            commands::cmd_list(&store)
        }
        Commands::View { id, db } => {
            let store = commands::open_store(&db.resolve())?;
            commands::cmd_view(&store, id)
        }
        Commands::Format { id, db } => {
            let store = commands::open_store(&db.resolve())?;
            commands::cmd_format(&store, id)
        }
        Commands::Create { db } => {
            let mut store = commands::open_store(&db.resolve())?;
            commands::cmd_create(&mut store, &mut LinePrompt::stdio())?;
            Ok(())
        }
        Commands::AddIngredient { id, db } => {
            let mut store = commands::open_store(&db.resolve())?;
            commands::cmd_add_ingredient(&mut store, &mut LinePrompt::stdio(), id)
        }
        Commands::AddStep { id, db } => {
            let mut store = commands::open_store(&db.resolve())?;
            commands::cmd_add_step(&mut store, &mut LinePrompt::stdio(), id)
        }
        Commands::RemoveStep { id, step_index, db } => {
            let mut store = commands::open_store(&db.resolve())?;
            commands::cmd_remove_step(&mut store, &mut LinePrompt::stdio(), id, step_index)?;
            Ok(())
        }
        Commands::Delete { id, db } => {
            let mut store = commands::open_store(&db.resolve())?;
            commands::cmd_delete(&mut store, &mut LinePrompt::stdio(), id)?;
            Ok(())
        }
        Commands::Quick { time, db } => {
            let store = commands::open_store(&db.resolve())?;
            commands::cmd_quick(&store, time)
        }
        Commands::ResetData { reset_command, db } => {
            let mut store = commands::open_store(&db.resolve())?;
            let procedure: Box<dyn ResetProcedure> = match reset_command {
                Some(command) => Box::new(ShellReset::new(command)),
                None => Box::new(SeedReset),
            };
            debug!("Reset procedure: {}", procedure.describe());
            commands::cmd_reset_data(&mut store, &mut LinePrompt::stdio(), procedure.as_ref())?;
            Ok(())
        }
        Commands::Completions { shell } => commands::cmd_completions(shell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox::Error;

    #[test]
    fn test_report_not_found_is_warning() {
        let (message, code) = report(&Error::NotFound(99).into());
        assert_eq!(message, "warning: Recipe 99 not found");
        assert_eq!(code, 0);
    }

    #[test]
    fn test_report_other_errors_fail() {
        let (message, code) = report(&Error::Index { number: 5, len: 4 }.into());
        assert_eq!(message, "error: Step 5 is out of range (recipe has 4 step(s))");
        assert_eq!(code, 1);

        let (message, code) = report(&Error::Reset("exit status 2".to_string()).into());
        assert_eq!(message, "error: Reset failed: exit status 2");
        assert_eq!(code, 1);
    }

    #[test]
    fn test_report_keeps_context() {
        let err = anyhow::Error::from(Error::NotFound(3)).context("Loading recipe");
        let (message, code) = report(&err);
        assert_eq!(message, "warning: Recipe 3 not found");
        assert_eq!(code, 0);
    }
}
