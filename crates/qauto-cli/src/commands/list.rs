//! List command implementation

use std::path::Path;

use colored::Colorize;
use qauto_meta::{CatalogueLoader, Whitelist};

use crate::context::ProjectContext;
use crate::error::{CliError, Result};

/// Groups to print, in catalogue order.
fn selected_groups<'a>(whitelist: &'a Whitelist, group: Option<&str>) -> Result<Vec<&'a str>> {
    let groups: Vec<&str> = whitelist.groups().collect();
    match group {
        None => Ok(groups),
        Some(wanted) => groups
            .iter()
            .find(|g| **g == wanted)
            .map(|g| vec![*g])
            .ok_or_else(|| {
                CliError::user(format!(
                    "Unknown group '{}'. Valid: {}",
                    wanted,
                    groups.join(", ")
                ))
            }),
    }
}

/// Run the list command
pub fn run_list(context: &ProjectContext, catalogue: Option<&Path>, group: Option<&str>) -> Result<()> {
    let dir = match catalogue {
        Some(dir) => context.root.join(&dir.to_string_lossy()),
        None => context.catalogue_dir(),
    };
    let whitelist = CatalogueLoader::new().load(&dir)?;

    println!("{}", "Recognizable Items".bold());
    println!();

    for group in selected_groups(&whitelist, group)? {
        let items = whitelist.items(group);
        println!("{} ({}):", group.cyan().bold(), items.len());
        for item in items {
            if item.injection_method.is_empty() {
                println!("  {}", item.name.green());
            } else {
                println!("  {:<24} {}", item.name.green(), item.injection_method.dimmed());
            }
        }
        println!();
    }

    println!(
        "{} {} items from {}.",
        "Total:".dimmed(),
        whitelist.len(),
        dir.to_string().dimmed()
    );
    Ok(())
}
