//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based interactive selection.

use async_trait::async_trait;
use colored::Colorize;
use dialoguer::{Confirm, MultiSelect, Select};
use qauto_core::{GroupItems, SelectionPrompt};
use qauto_meta::{FixMode, SessionSettings};

use crate::error::{CliError, Result};

/// One selectable line per missing item, in group order.
fn candidate_entries(candidates: &GroupItems) -> Vec<(String, String)> {
    candidates
        .iter()
        .flat_map(|(group, items)| items.iter().map(move |item| (group.clone(), item.clone())))
        .collect()
}

fn ask_missing(candidates: &GroupItems) -> qauto_core::Result<Vec<String>> {
    let entries = candidate_entries(candidates);
    let labels: Vec<String> = entries
        .iter()
        .map(|(group, item)| format!("{}: {}", group.green(), item))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Select items to add to the configuration file (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()
        .map_err(|e| qauto_core::Error::prompt(e.to_string()))?;

    Ok(chosen.into_iter().map(|i| entries[i].1.clone()).collect())
}

/// Manual-mode prompt backed by the terminal.
///
/// dialoguer blocks the calling thread, so the question runs on the
/// blocking pool and the session awaits the answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

#[async_trait]
impl SelectionPrompt for TerminalPrompt {
    async fn select(&self, candidates: &GroupItems) -> qauto_core::Result<Vec<String>> {
        let candidates = candidates.clone();
        tokio::task::spawn_blocking(move || ask_missing(&candidates))
            .await
            .map_err(|e| qauto_core::Error::prompt(format!("prompt task failed: {e}")))?
    }
}

/// Run interactive init prompts
///
/// Asks for the fix mode and the sort option, starting from `defaults`.
pub fn interactive_init(defaults: &SessionSettings) -> Result<SessionSettings> {
    println!();

    let descriptions: Vec<&str> = FixMode::ALL.iter().map(FixMode::describe).collect();
    let default_idx = FixMode::ALL
        .iter()
        .position(|m| *m == defaults.fix_mode)
        .unwrap_or_default();
    let mode_idx = Select::new()
        .with_prompt("How should missing components, directives and plugins be handled?")
        .items(&descriptions)
        .default(default_idx)
        .interact()?;
    let fix_mode = FixMode::ALL[mode_idx];

    let sort = Confirm::new()
        .with_prompt("Sort components, directives and plugins alphabetically?")
        .default(defaults.sort)
        .interact()?;

    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Fix mode".dimmed(), fix_mode.to_string().cyan());
    println!("  {}: {}", "Sort".dimmed(), sort.to_string().cyan());
    println!();

    let proceed = Confirm::new()
        .with_prompt("Proceed?")
        .default(true)
        .interact()?;

    if !proceed {
        return Err(CliError::user("Init cancelled by user."));
    }

    Ok(SessionSettings { fix_mode, sort })
}
