//! Error types for qauto-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] qauto_fs::Error),

    /// The catalogue directory is missing or cannot be listed.
    #[error("Catalogue unreadable at {path}: {source}")]
    CatalogueUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A descriptor record could not be parsed or has no `type` field.
    #[error("Malformed descriptor {path}: {message}")]
    MalformedDescriptor { path: PathBuf, message: String },

    #[error("Invalid fix mode: {mode} (expected automatic, manual or warn)")]
    InvalidFixMode { mode: String },
}
