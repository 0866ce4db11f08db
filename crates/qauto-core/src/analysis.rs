//! Accumulated usage diff for one pass
//!
//! Every scan of a pass folds into three group-keyed lists:
//!
//! - `existing`: what the configuration declares
//! - `missing`: used but undeclared
//! - `merged`: existing plus everything used
//!
//! Lists are deduplicated and keep first-seen order; nothing is removed
//! until [`AnalysisState::clear`].

use indexmap::IndexMap;
use serde::Serialize;

/// Group name -> ordered item names.
pub type GroupItems = IndexMap<String, Vec<String>>;

/// Append the items of `extra` not yet in `target`, keeping order.
pub(crate) fn extend_unique<'a>(target: &mut Vec<String>, extra: impl IntoIterator<Item = &'a String>) {
    for item in extra {
        if !target.contains(item) {
            target.push(item.clone());
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisState {
    existing: GroupItems,
    missing: GroupItems,
    merged: GroupItems,
}

impl AnalysisState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scan result for `group` into the state.
    ///
    /// `declared` is what the configuration currently lists for the group.
    /// Returns the items newly recorded as missing by this call.
    pub fn record(&mut self, group: &str, declared: &[String], scanned: &[String]) -> Vec<String> {
        let new_missing: Vec<String> = {
            let recorded = self.missing.get(group);
            scanned
                .iter()
                .filter(|item| !declared.contains(item))
                .filter(|item| !recorded.is_some_and(|m| m.contains(item)))
                .cloned()
                .collect()
        };
        if !new_missing.is_empty() {
            extend_unique(self.missing.entry(group.to_string()).or_default(), &new_missing);
        }

        if !declared.is_empty() || !scanned.is_empty() {
            let merged = self.merged.entry(group.to_string()).or_default();
            extend_unique(merged, declared);
            extend_unique(merged, scanned);
        }

        self.existing.insert(group.to_string(), declared.to_vec());
        new_missing
    }

    pub fn existing(&self) -> &GroupItems {
        &self.existing
    }

    pub fn missing(&self) -> &GroupItems {
        &self.missing
    }

    pub fn merged(&self) -> &GroupItems {
        &self.merged
    }

    pub fn existing_in(&self, group: &str) -> &[String] {
        self.existing.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn missing_in(&self, group: &str) -> &[String] {
        self.missing.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn merged_in(&self, group: &str) -> &[String] {
        self.merged.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of missing items across all groups.
    pub fn missing_count(&self) -> usize {
        self.missing.values().map(Vec::len).sum()
    }

    pub fn has_missing(&self) -> bool {
        self.missing_count() > 0
    }

    pub fn clear(&mut self) {
        self.existing.clear();
        self.missing.clear();
        self.merged.clear();
    }
}
