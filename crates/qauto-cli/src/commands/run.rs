//! Run and check command implementations
//!
//! Both drive one pass of a [`Session`] over the project sources. `run`
//! uses the configured fix mode; `check` forces warn mode and reports
//! whether anything is missing.

use std::path::Path;

use colored::Colorize;
use qauto_core::{LogSink, PassReport, SelectionPrompt, Session};
use qauto_fs::{NormalizedPath, io};
use qauto_meta::{FixMode, SessionSettings};

use crate::cli::PassArgs;
use crate::context::ProjectContext;
use crate::error::{CliError, Result};
use crate::interactive::TerminalPrompt;
use crate::output::{ConsoleSink, print_outcome};
use crate::sources::SourceWalker;

/// Session settings after applying command-line overrides.
pub fn effective_settings(
    context: &ProjectContext,
    pass: &PassArgs,
    mode: Option<FixMode>,
) -> SessionSettings {
    let mut settings = context.config.session.clone();
    if let Some(mode) = mode {
        settings.fix_mode = mode;
    }
    if let Some(sort) = pass.sort_override() {
        settings.sort = sort;
    }
    settings
}

fn open_session(context: &ProjectContext, pass: &PassArgs, settings: SessionSettings) -> Result<Session> {
    let config_file = match &pass.config {
        Some(file) => context.root.join(&file.to_string_lossy()),
        None => context.config_file(),
    };
    let catalogue = match &pass.catalogue {
        Some(dir) => context.root.join(&dir.to_string_lossy()),
        None => context.catalogue_dir(),
    };

    if !catalogue.is_dir() {
        return Err(CliError::user(format!(
            "Catalogue directory {} not found. Is the framework installed?",
            catalogue
        )));
    }

    Ok(Session::open(&catalogue, &config_file, settings)?)
}

/// Scan the selected sources and complete one pass.
///
/// The process ends with this pass, so a pending sort-order rewrite is
/// settled here: applied and folded into the report when `apply_pending`
/// is set, dropped otherwise.
pub async fn run_pass(
    context: &ProjectContext,
    pass: &PassArgs,
    settings: SessionSettings,
    prompt: &dyn SelectionPrompt,
    sink: &mut dyn LogSink,
    apply_pending: bool,
) -> Result<PassReport> {
    let mut session = open_session(context, pass, settings)?;
    let root = context.root.to_native();
    let files = SourceWalker::new(&root, &context.config.scan).collect(&pass.paths)?;

    session.begin_pass();
    for file in &files {
        match io::read_text(&NormalizedPath::new(file)) {
            Ok(text) => session.analyse(&text),
            Err(e) => tracing::warn!("skipping {}: {}", file.display(), e),
        }
    }

    let mut report = session.complete_pass(prompt, sink).await;
    if apply_pending {
        match session.apply_pending_sort() {
            Ok(Some(applied)) => report.merge_apply(applied),
            Ok(None) => {}
            Err(e) => {
                tracing::error!("sort-order rewrite failed: {}", e);
                report.errors.push(e.to_string());
            }
        }
    } else {
        session.discard_pending_sort();
    }
    session.reset();
    Ok(report)
}

fn execute_pass(
    root: &Path,
    pass: &PassArgs,
    mode: Option<FixMode>,
    json: bool,
    apply_pending: bool,
) -> Result<PassReport> {
    let context = ProjectContext::load(root, pass.settings.as_deref())?;
    let settings = effective_settings(&context, pass, mode);
    tracing::debug!(mode = %settings.fix_mode, sort = settings.sort, "starting pass");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let report = if json {
        let mut buffered: Vec<String> = Vec::new();
        let report = runtime.block_on(run_pass(&context, pass, settings, &TerminalPrompt, &mut buffered, apply_pending))?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        report
    } else {
        let report = runtime.block_on(run_pass(
            &context,
            pass,
            settings,
            &TerminalPrompt,
            &mut ConsoleSink,
            apply_pending,
        ))?;
        print_outcome(&report);
        report
    };

    Ok(report)
}

/// Run the run command
pub fn run_run(root: &Path, pass: &PassArgs, mode: Option<FixMode>, json: bool) -> Result<()> {
    let report = execute_pass(root, pass, mode, json, true)?;

    if !report.is_success() {
        return Err(CliError::user(format!(
            "Pass finished with {} error(s)",
            report.errors.len()
        )));
    }
    Ok(())
}

/// Run the check command
///
/// Returns whether the configuration declares everything the sources use.
/// The configuration file is never written.
pub fn run_check(root: &Path, pass: &PassArgs, json: bool) -> Result<bool> {
    let report = execute_pass(root, pass, Some(FixMode::Warn), json, false)?;

    if !report.is_success() {
        return Err(CliError::user(format!(
            "Check finished with {} error(s)",
            report.errors.len()
        )));
    }
    if report.missing_count() > 0 && !json {
        println!();
        println!("Run {} to add them.", "qauto run --mode automatic".cyan());
    }
    Ok(report.missing_count() == 0)
}
