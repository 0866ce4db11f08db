//! Source file discovery for a pass

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use qauto_meta::ScanSettings;

use crate::error::{CliError, Result};

/// Default directory scanned when no paths are given.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Collects the files a pass should analyse.
///
/// Directory walks honour `.gitignore` and skip hidden entries and any
/// directory named in `exclude`. Files named explicitly are taken as long
/// as their extension matches.
pub struct SourceWalker<'a> {
    root: &'a Path,
    settings: &'a ScanSettings,
}

impl<'a> SourceWalker<'a> {
    pub fn new(root: &'a Path, settings: &'a ScanSettings) -> Self {
        Self { root, settings }
    }

    /// Files under `paths` (relative to the root), sorted and deduplicated.
    pub fn collect(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let targets: Vec<PathBuf> = if paths.is_empty() {
            vec![self.root.join(DEFAULT_SOURCE_DIR)]
        } else {
            paths.iter().map(|p| self.root.join(p)).collect()
        };

        let mut files = Vec::new();
        for target in &targets {
            if target.is_file() {
                if self.has_extension(target) {
                    files.push(target.clone());
                }
                continue;
            }
            if !target.is_dir() {
                return Err(CliError::user(format!(
                    "Source path {} does not exist",
                    target.display()
                )));
            }
            self.walk(target, &mut files)?;
        }

        files.sort();
        files.dedup();
        tracing::debug!("found {} source files", files.len());
        Ok(files)
    }

    fn walk(&self, dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        let exclude = self.settings.exclude.clone();
        let mut builder = WalkBuilder::new(dir);
        builder
            .hidden(true)
            .git_ignore(true)
            .git_exclude(true)
            .require_git(false);
        builder.filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            !(is_dir && entry.file_name().to_str().is_some_and(|n| exclude.iter().any(|e| e == n)))
        });

        for result in builder.build() {
            let entry = result?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            if self.has_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(())
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.settings.extensions.iter().any(|e| e == ext))
    }
}
