//! In-memory configuration text with a persisted snapshot

use qauto_blocks::{find_groups, replace_group};
use qauto_fs::{NormalizedPath, io};

use crate::analysis::extend_unique;
use crate::{Error, Result};

/// The configuration file's raw text, owned by a session.
///
/// `text` is what the patcher works on; `persisted` is what was last read
/// from or written to disk. A write only happens when the two differ.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    path: NormalizedPath,
    text: String,
    persisted: String,
}

impl ConfigDocument {
    /// Read the configuration file.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigurationNotFound` if the file does not exist.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigurationNotFound {
                path: path.to_native(),
            });
        }
        let text = io::read_text(path)?;
        Ok(Self::from_text(path.clone(), text))
    }

    /// Wrap text that is known to match what is on disk at `path`.
    pub fn from_text(path: NormalizedPath, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            path,
            persisted: text.clone(),
            text,
        }
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the in-memory text differs from the persisted snapshot.
    pub fn is_dirty(&self) -> bool {
        self.text != self.persisted
    }

    /// Items the configuration currently declares for `group`.
    ///
    /// Items from every literal for the group, first occurrence first. A
    /// group without a recognizable literal declares nothing.
    pub fn declared(&self, group: &str) -> Vec<String> {
        let mut items = Vec::new();
        for literal in self.literals(group) {
            extend_unique(&mut items, literal.items.iter());
        }
        items
    }

    /// Whether every literal for `group` already lists exactly `items`.
    ///
    /// With no literal in the file this holds only for an empty list.
    pub fn declares_exactly(&self, group: &str, items: &[String]) -> bool {
        let literals = self.literals(group);
        if literals.is_empty() {
            return items.is_empty();
        }
        literals.iter().all(|literal| literal.items == items)
    }

    fn literals(&self, group: &str) -> Vec<qauto_blocks::GroupLiteral> {
        find_groups(&self.text, group).unwrap_or_else(|e| {
            tracing::warn!(group, "could not match group literal: {}", e);
            Vec::new()
        })
    }

    /// Substitute `items` for the group's literal in the in-memory text.
    pub fn patch_group(&mut self, group: &str, items: &[String]) -> Result<()> {
        self.text = replace_group(&self.text, group, items)?;
        Ok(())
    }

    /// Drop in-memory edits, returning to the persisted snapshot.
    pub fn discard_changes(&mut self) {
        self.text.clone_from(&self.persisted);
    }

    /// Write the text to disk if it changed since the last write.
    ///
    /// Returns whether a write happened. On failure the snapshot is left
    /// untouched so a later call retries the same content.
    pub fn persist(&mut self) -> Result<bool> {
        if !self.is_dirty() {
            return Ok(false);
        }

        io::replace_text(&self.path, &self.text).map_err(|source| {
            Error::ConfigurationUnwritable {
                path: self.path.to_native(),
                source,
            }
        })?;

        self.persisted.clone_from(&self.text);
        tracing::info!(path = %self.path, "configuration file updated");
        Ok(true)
    }
}
