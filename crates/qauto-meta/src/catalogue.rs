//! Catalogue of recognizable framework items
//!
//! A catalogue is a directory holding one descriptor record per item. The
//! record's file stem is the item's canonical name:
//!
//! ```text
//! dist/api/
//!   QBtn.json          { "type": "component", ... }
//!   ClosePopup.json    { "type": "directive", ... }
//!   Notify.json        { "type": "plugin", "injection": "$q.notify", ... }
//! ```
//!
//! Loading classifies every record into a group (the pluralized type) and
//! yields a [`Whitelist`].

use std::fs;

use indexmap::IndexMap;
use qauto_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One recognizable item, as read from the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    /// Canonical item name, e.g. `QBtn`.
    pub name: String,
    /// Group key, e.g. `components`.
    pub group: String,
    /// Injection marker such as `$q.notify`; empty when the item has none.
    pub injection_method: String,
}

impl ItemDescriptor {
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        injection_method: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            injection_method: injection_method.into(),
        }
    }
}

/// The subset of a descriptor record the loader reads.
///
/// Records carry much more (props, events, slots); unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescriptorRecord {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub injection: Option<String>,
}

/// Recognizable items keyed by group, in catalogue order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    groups: IndexMap<String, Vec<ItemDescriptor>>,
}

impl Whitelist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a whitelist from descriptors, keeping their order.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = ItemDescriptor>) -> Self {
        let mut whitelist = Self::new();
        for descriptor in descriptors {
            whitelist.insert(descriptor);
        }
        whitelist
    }

    /// Append a descriptor to its group, creating the group on first use.
    pub fn insert(&mut self, descriptor: ItemDescriptor) {
        self.groups
            .entry(descriptor.group.clone())
            .or_default()
            .push(descriptor);
    }

    /// Group names in first-seen order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Items of one group; empty for unknown groups.
    pub fn items(&self, group: &str) -> &[ItemDescriptor] {
        self.groups.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    /// Total number of items across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Loads a [`Whitelist`] from a catalogue directory.
#[derive(Debug, Default)]
pub struct CatalogueLoader {
    store: ConfigStore,
}

impl CatalogueLoader {
    pub fn new() -> Self {
        Self {
            store: ConfigStore::new(),
        }
    }

    /// Read every descriptor record in `dir`.
    ///
    /// Records are visited in file-name order. Files with an extension the
    /// store cannot read are skipped. The first malformed record aborts the
    /// load; no partial whitelist is returned.
    ///
    /// # Errors
    ///
    /// - [`Error::CatalogueUnreadable`] if `dir` cannot be listed
    /// - [`Error::MalformedDescriptor`] if a record cannot be parsed or has no `type`
    pub fn load(&self, dir: &NormalizedPath) -> Result<Whitelist> {
        let unreadable = |source| Error::CatalogueUnreadable {
            path: dir.to_native(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir.to_native()).map_err(unreadable)? {
            let path = NormalizedPath::new(entry.map_err(unreadable)?.path());
            if !path.is_file() {
                continue;
            }
            if !self.store.supports(&path) {
                tracing::debug!("Skipping non-descriptor file {}", path);
                continue;
            }
            paths.push(path);
        }
        paths.sort();

        let mut whitelist = Whitelist::new();
        for path in &paths {
            whitelist.insert(self.load_descriptor(path)?);
        }

        for group in whitelist.groups() {
            tracing::debug!(group, items = whitelist.items(group).len(), "catalogue group loaded");
        }
        Ok(whitelist)
    }

    fn load_descriptor(&self, path: &NormalizedPath) -> Result<ItemDescriptor> {
        let malformed = |message: String| Error::MalformedDescriptor {
            path: path.to_native(),
            message,
        };

        let record: DescriptorRecord = self
            .store
            .load(path)
            .map_err(|e| malformed(e.to_string()))?;

        let kind = record
            .kind
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| malformed("missing `type` field".to_string()))?;

        let name = path
            .file_stem()
            .ok_or_else(|| malformed("record has no file name".to_string()))?;

        Ok(ItemDescriptor::new(
            name,
            group_for_type(kind.trim()),
            record.injection.unwrap_or_default(),
        ))
    }
}

/// Group key for an item type: `component` -> `components`.
pub fn group_for_type(kind: &str) -> String {
    format!("{kind}s")
}
