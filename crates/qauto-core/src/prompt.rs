//! Selection prompt boundary for manual mode

use async_trait::async_trait;

use crate::Result;
use crate::analysis::GroupItems;

/// Asks which missing items to add.
///
/// The session submits candidates grouped by group name and awaits the
/// approved names. Implementations may block on a terminal, a socket, or
/// anything else; the session is suspended until the future resolves.
#[async_trait]
pub trait SelectionPrompt: Send + Sync {
    async fn select(&self, candidates: &GroupItems) -> Result<Vec<String>>;
}

/// Prompt that answers with a fixed list, filtered to the candidates.
#[derive(Debug, Clone, Default)]
pub struct FixedSelection {
    approved: Vec<String>,
}

impl FixedSelection {
    pub fn new(approved: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            approved: approved.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl SelectionPrompt for FixedSelection {
    async fn select(&self, candidates: &GroupItems) -> Result<Vec<String>> {
        Ok(candidates
            .values()
            .flatten()
            .filter(|item| self.approved.contains(item))
            .cloned()
            .collect())
    }
}

/// Prompt that approves every candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproveAll;

#[async_trait]
impl SelectionPrompt for ApproveAll {
    async fn select(&self, candidates: &GroupItems) -> Result<Vec<String>> {
        Ok(candidates.values().flatten().cloned().collect())
    }
}
