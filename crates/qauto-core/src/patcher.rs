//! Applying an analysis to the configuration text

use serde::Serialize;

use crate::analysis::{AnalysisState, extend_unique};
use crate::document::ConfigDocument;
use crate::{Error, Result};

/// Which missing items an apply may add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every merged item.
    All,
    /// Declared items plus the missing items named here.
    Only(Vec<String>),
}

impl Selection {
    /// Selection from a prompt answer.
    pub fn approved(items: Vec<String>) -> Self {
        Self::Only(items)
    }
}

/// Outcome of an apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    /// Whether the file was written.
    pub written: bool,
    /// Groups whose literal was rewritten.
    pub updated: Vec<String>,
    /// Groups with changes but no literal in the file.
    pub skipped: Vec<String>,
}

/// The list a group should end up with.
pub fn planned_items(
    state: &AnalysisState,
    group: &str,
    selection: &Selection,
    sort: bool,
) -> Vec<String> {
    let mut items = match selection {
        Selection::All => state.merged_in(group).to_vec(),
        Selection::Only(approved) => {
            let mut items = state.existing_in(group).to_vec();
            extend_unique(
                &mut items,
                state
                    .missing_in(group)
                    .iter()
                    .filter(|item| approved.contains(item)),
            );
            items
        }
    };
    if sort {
        items.sort();
    }
    items
}

/// Rewrite every merged group in `document` and persist if anything changed.
///
/// Groups whose planned list already matches the file are left byte for
/// byte. Groups without a literal are skipped. If persisting fails the
/// in-memory edits are discarded, so the document still matches the disk.
pub fn apply_changes(
    document: &mut ConfigDocument,
    state: &AnalysisState,
    selection: &Selection,
    sort: bool,
) -> Result<ApplyReport> {
    let mut report = ApplyReport::default();

    for group in state.merged().keys() {
        let items = planned_items(state, group, selection, sort);
        if document.declares_exactly(group, &items) {
            continue;
        }

        match document.patch_group(group, &items) {
            Ok(()) => {
                tracing::debug!(group = group.as_str(), items = items.len(), "group rewritten");
                report.updated.push(group.clone());
            }
            Err(Error::Blocks(qauto_blocks::Error::GroupPatternNotFound { .. })) => {
                tracing::warn!(group = group.as_str(), "no array literal for group, skipping");
                report.skipped.push(group.clone());
            }
            Err(e) => {
                document.discard_changes();
                return Err(e);
            }
        }
    }

    match document.persist() {
        Ok(written) => {
            report.written = written;
            Ok(report)
        }
        Err(e) => {
            document.discard_changes();
            Err(e)
        }
    }
}
