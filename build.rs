// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: database path
fn db_path_arg() -> Arg {
    Arg::new("db_path")
        .short('d')
        .long("db-path")
        .value_name("PATH")
        .env("RECIPEBOX_DB")
        .help("Database path [default: <data dir>/recipebox/recipes.db]")
}

/// Common argument: recipe id
fn id_arg() -> Arg {
    Arg::new("id").required(true).help("Recipe ID")
}

fn build_cli() -> Command {
    Command::new("recipebox")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Recipebox Contributors")
        .about("Manage your recipes from the command line")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::SetTrue)
                .help("Show debug logging on stderr"),
        )
        .subcommand(
            Command::new("list")
                .about("List all recipes")
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("view")
                .about("Show the stored details of a recipe")
                .arg(id_arg())
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("format")
                .about("Print a recipe formatted for reading")
                .arg(id_arg())
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("create")
                .about("Create a new recipe (interactive)")
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("add-ingredient")
                .about("Add an ingredient to a recipe (interactive)")
                .arg(id_arg())
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("add-step")
                .about("Add a step to a recipe (interactive)")
                .arg(id_arg())
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("remove-step")
                .about("Remove a step from a recipe")
                .arg(id_arg())
                .arg(
                    Arg::new("step_index")
                        .help("Step number, starting at 1 (prompts when omitted)"),
                )
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a recipe (asks for confirmation)")
                .arg(id_arg())
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("quick")
                .about("List recipes ready within the given number of minutes")
                .arg(
                    Arg::new("time")
                        .default_value("30")
                        .help("Maximum cooking time in minutes"),
                )
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("reset-data")
                .about("Reset the recipe collection (asks for confirmation)")
                .arg(
                    Arg::new("reset_command")
                        .long("reset-command")
                        .env("RECIPEBOX_RESET_COMMAND")
                        .help("Shell command to run instead of restoring the bundled recipes"),
                )
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("recipebox.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
