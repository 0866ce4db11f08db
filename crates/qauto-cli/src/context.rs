//! Project context detection
//!
//! Finds the project root from any directory inside it and loads the
//! project configuration, so commands work from anywhere in the app.

use std::path::{Path, PathBuf};

use qauto_fs::{ConfigStore, NormalizedPath};
use qauto_meta::{PROJECT_CONFIG_FILE, PathSettings, ProjectConfig};

use crate::error::{CliError, Result};

/// Walk up from `start` to the nearest directory holding `qauto.toml` or
/// the default configuration file.
pub fn detect_root(start: &Path) -> Option<PathBuf> {
    let default_config = PathSettings::default().config_file;

    start.ancestors().find_map(|dir| {
        let marked = dir.join(PROJECT_CONFIG_FILE).is_file() || dir.join(&default_config).is_file();
        marked.then(|| dir.to_path_buf())
    })
}

/// A project root with its loaded configuration
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub root: NormalizedPath,
    pub config: ProjectConfig,
}

impl ProjectContext {
    /// Resolve the root from an explicit `-C` value or by detection from `cwd`.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
        match explicit {
            Some(dir) if dir.is_absolute() => dir.to_path_buf(),
            Some(dir) => cwd.join(dir),
            None => detect_root(cwd).unwrap_or_else(|| cwd.to_path_buf()),
        }
    }

    /// Load the project configuration for `root`.
    ///
    /// `settings` names an explicit settings file, which must exist. Without
    /// it, `qauto.toml` is read when present and defaults are used otherwise.
    pub fn load(root: &Path, settings: Option<&Path>) -> Result<Self> {
        let root = NormalizedPath::new(root);
        if !root.is_dir() {
            return Err(CliError::user(format!("Project root {} is not a directory", root)));
        }

        let store = ConfigStore::new();
        let config = match settings {
            Some(file) => {
                let path = root.join(&file.to_string_lossy());
                if !path.is_file() {
                    return Err(CliError::user(format!("Settings file {} not found", path)));
                }
                store.load(&path)?
            }
            None => {
                let path = root.join(PROJECT_CONFIG_FILE);
                if path.is_file() {
                    store.load(&path)?
                } else {
                    tracing::debug!("no {} in {}, using defaults", PROJECT_CONFIG_FILE, root);
                    ProjectConfig::default()
                }
            }
        };

        Ok(Self { root, config })
    }

    /// Path of the configuration file kept in sync.
    pub fn config_file(&self) -> NormalizedPath {
        self.root.join(&self.config.paths.config_file)
    }

    /// Path of the catalogue directory.
    pub fn catalogue_dir(&self) -> NormalizedPath {
        self.root.join(&self.config.paths.catalogue)
    }

    pub fn settings_file(&self) -> NormalizedPath {
        self.root.join(PROJECT_CONFIG_FILE)
    }
}
