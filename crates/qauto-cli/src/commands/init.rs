//! Init command implementation
//!
//! Writes `qauto.toml` into the project root.

use std::path::Path;

use colored::Colorize;
use qauto_fs::{ConfigStore, NormalizedPath};
use qauto_meta::{FixMode, PROJECT_CONFIG_FILE, ProjectConfig, SessionSettings};

use crate::error::{CliError, Result};
use crate::interactive::interactive_init;

/// Run the init command
pub fn run_init(
    path: &Path,
    mode: Option<FixMode>,
    no_sort: bool,
    force: bool,
    interactive: bool,
) -> Result<()> {
    let mut settings = SessionSettings::default();
    if let Some(mode) = mode {
        settings.fix_mode = mode;
    }
    settings.sort = !no_sort;

    if interactive {
        settings = interactive_init(&settings)?;
    }

    println!(
        "{} Initializing qauto in {}",
        "=>".blue().bold(),
        path.display().to_string().cyan()
    );

    let config = write_project_config(path, settings, force)?;

    let conf_file = NormalizedPath::new(path).join(&config.paths.config_file);
    if !conf_file.is_file() {
        println!(
            "{} {} not found; create it before running {}.",
            "warning:".yellow().bold(),
            config.paths.config_file,
            "qauto run".cyan()
        );
    }

    println!(
        "{} Wrote {} (fix mode: {}, sort: {}).",
        "OK".green().bold(),
        PROJECT_CONFIG_FILE,
        config.session.fix_mode,
        config.session.sort
    );
    Ok(())
}

/// Write a project configuration with the given session settings.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_project_config(
    path: &Path,
    session: SessionSettings,
    force: bool,
) -> Result<ProjectConfig> {
    let root = NormalizedPath::new(path);
    if !root.is_dir() {
        return Err(CliError::user(format!("{} is not a directory", root)));
    }

    let target = root.join(PROJECT_CONFIG_FILE);
    if target.exists() && !force {
        return Err(CliError::user(format!(
            "{} already exists. Use --force to overwrite it.",
            target
        )));
    }

    let config = ProjectConfig {
        session,
        ..ProjectConfig::default()
    };
    ConfigStore::new().save(&target, &config)?;
    tracing::info!(path = %target, "project configuration written");
    Ok(config)
}
