//! Project configuration for qauto
//!
//! The host reads `qauto.toml` from the project root:
//!
//! ```toml
//! [session]
//! fix_mode = "manual"
//! sort = true
//!
//! [paths]
//! config_file = "quasar.conf.js"
//! catalogue = "node_modules/quasar/dist/api"
//!
//! [scan]
//! extensions = ["js", "vue"]
//! exclude = ["node_modules"]
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default project configuration file name.
pub const PROJECT_CONFIG_FILE: &str = "qauto.toml";

/// What a session does with missing items at the end of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixMode {
    /// Add every missing item to the configuration file.
    Automatic,
    /// Ask which missing items to add.
    Manual,
    /// Report missing items and change nothing.
    #[default]
    Warn,
}

impl FixMode {
    pub const ALL: [FixMode; 3] = [FixMode::Automatic, FixMode::Manual, FixMode::Warn];

    /// One-line description used by interactive setup.
    pub fn describe(&self) -> &'static str {
        match self {
            FixMode::Automatic => {
                "Automatic - Add components, directives and plugins when they are found to be missing."
            }
            FixMode::Manual => {
                "Manual - Present a list of missing components, directives and plugins and you choose what should be added."
            }
            FixMode::Warn => {
                "Warn Only - Present a list of missing components, directives and plugins and nothing more."
            }
        }
    }
}

impl FromStr for FixMode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "automatic" | "auto" => Ok(FixMode::Automatic),
            "manual" => Ok(FixMode::Manual),
            "warn" | "warn-only" | "warn_only" => Ok(FixMode::Warn),
            _ => Err(Error::InvalidFixMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for FixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixMode::Automatic => write!(f, "automatic"),
            FixMode::Manual => write!(f, "manual"),
            FixMode::Warn => write!(f, "warn"),
        }
    }
}

/// Session behaviour settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    #[serde(default)]
    pub fix_mode: FixMode,
    /// Sort written group lists alphabetically
    #[serde(default = "default_sort")]
    pub sort: bool,
}

fn default_sort() -> bool {
    true
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            fix_mode: FixMode::default(),
            sort: default_sort(),
        }
    }
}

/// Locations of the files a session works on, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSettings {
    #[serde(default = "default_config_file")]
    pub config_file: String,
    #[serde(default = "default_catalogue")]
    pub catalogue: String,
}

fn default_config_file() -> String {
    "quasar.conf.js".to_string()
}

fn default_catalogue() -> String {
    "node_modules/quasar/dist/api".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            config_file: default_config_file(),
            catalogue: default_catalogue(),
        }
    }
}

/// Which source files the host feeds to a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSettings {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Directory names never descended into
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["js".to_string(), "vue".to_string()]
}

fn default_exclude() -> Vec<String> {
    vec!["node_modules".to_string()]
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: default_exclude(),
        }
    }
}

/// Contents of `qauto.toml`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub paths: PathSettings,
    #[serde(default)]
    pub scan: ScanSettings,
}
