//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use qauto_meta::FixMode;

/// qauto - Keep quasar.conf.js in step with the framework items your app uses
#[derive(Parser, Debug)]
#[command(name = "qauto")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the nearest directory with qauto.toml or quasar.conf.js)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Scan sources and update the configuration file
    ///
    /// Examples:
    ///   qauto run                    # Scan src/ with settings from qauto.toml
    ///   qauto run --mode automatic   # Add everything that is missing
    ///   qauto run src/pages --json   # Scan one directory, print a JSON report
    Run {
        #[command(flatten)]
        pass: PassArgs,

        /// Fix mode (automatic, manual, warn)
        #[arg(short, long, value_parser = parse_mode)]
        mode: Option<FixMode>,

        /// Output the pass report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report missing items without writing; exits with status 2 if any
    Check {
        #[command(flatten)]
        pass: PassArgs,

        /// Output the pass report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create qauto.toml in the project root
    ///
    /// Examples:
    ///   qauto init                   # Warn-only, sorted lists
    ///   qauto init --mode manual     # Ask before adding items
    ///   qauto init --interactive     # Guided setup
    Init {
        /// Fix mode to record
        #[arg(short, long, value_parser = parse_mode)]
        mode: Option<FixMode>,

        /// Keep insertion order instead of sorting lists
        #[arg(long)]
        no_sort: bool,

        /// Overwrite an existing qauto.toml
        #[arg(long)]
        force: bool,

        /// Interactive mode for guided setup
        #[arg(short, long)]
        interactive: bool,
    },

    /// List the items the catalogue makes recognizable
    List {
        /// Only show one group (e.g. components)
        #[arg(short, long)]
        group: Option<String>,

        /// Catalogue directory (overrides qauto.toml)
        #[arg(long, value_name = "DIR")]
        catalogue: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by commands that run a pass
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PassArgs {
    /// Files or directories to scan (default: src)
    pub paths: Vec<PathBuf>,

    /// Sort written lists alphabetically
    #[arg(long, overrides_with = "no_sort")]
    pub sort: bool,

    /// Keep insertion order in written lists
    #[arg(long, overrides_with = "sort")]
    pub no_sort: bool,

    /// Configuration file to keep in sync (overrides qauto.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Catalogue directory (overrides qauto.toml)
    #[arg(long, value_name = "DIR")]
    pub catalogue: Option<PathBuf>,

    /// Settings file to read instead of qauto.toml
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,
}

impl PassArgs {
    /// The sort flag, if one was given.
    pub fn sort_override(&self) -> Option<bool> {
        match (self.sort, self.no_sort) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn parse_mode(value: &str) -> Result<FixMode, String> {
    value.parse().map_err(|e: qauto_meta::Error| e.to_string())
}
