//! qauto CLI
//!
//! Keeps a Quasar app's `quasar.conf.js` component, directive and plugin
//! lists in step with what the sources actually use.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;
mod logging;
mod output;
mod sources;

use std::path::Path;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::{Cli, Commands};
use context::ProjectContext;
use error::Result;

/// Exit status of `check` when items are missing.
const EXIT_MISSING: i32 = 2;

fn main() {
    match run() {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let cwd = std::env::current_dir()?;
    let root = ProjectContext::resolve(cli.root.as_deref(), &cwd);
    tracing::debug!("project root: {}", root.display());

    match cli.command {
        Some(cmd) => execute_command(cmd, &root),
        None => {
            // No command provided - show help hint
            println!(
                "{} Framework usage synchronizer",
                "qauto".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "qauto --help".cyan());
            Ok(0)
        }
    }
}

fn execute_command(cmd: Commands, root: &Path) -> Result<i32> {
    match cmd {
        Commands::Run { pass, mode, json } => {
            commands::run_run(root, &pass, mode, json)?;
            Ok(0)
        }
        Commands::Check { pass, json } => {
            let clean = commands::run_check(root, &pass, json)?;
            Ok(if clean { 0 } else { EXIT_MISSING })
        }
        Commands::Init {
            mode,
            no_sort,
            force,
            interactive,
        } => {
            commands::run_init(root, mode, no_sort, force, interactive)?;
            Ok(0)
        }
        Commands::List { group, catalogue } => {
            let context = ProjectContext::load(root, None)?;
            commands::run_list(&context, catalogue.as_deref(), group.as_deref())?;
            Ok(0)
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "qauto", &mut std::io::stdout());
            Ok(0)
        }
    }
}
