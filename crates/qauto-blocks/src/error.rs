//! Error types for qauto-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The group's array literal does not appear in the text.
    #[error("Group `{group}` has no array literal in the configuration text")]
    GroupPatternNotFound { group: String },

    #[error("Invalid group pattern: {0}")]
    Regex(#[from] regex::Error),
}
