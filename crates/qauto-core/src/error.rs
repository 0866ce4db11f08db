//! Error types for qauto-core

use std::path::PathBuf;

/// Result type for qauto-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in qauto-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found when opening a session
    #[error("Configuration file not found at {path}")]
    ConfigurationNotFound { path: PathBuf },

    /// Persisting the patched configuration failed
    #[error("Could not write configuration file {path}: {source}")]
    ConfigurationUnwritable {
        path: PathBuf,
        #[source]
        source: qauto_fs::Error,
    },

    /// The selection prompt failed or was aborted
    #[error("Selection prompt failed: {message}")]
    Prompt { message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from qauto-fs
    #[error(transparent)]
    Fs(#[from] qauto_fs::Error),

    /// Catalogue or settings error from qauto-meta
    #[error(transparent)]
    Meta(#[from] qauto_meta::Error),

    /// Group literal error from qauto-blocks
    #[error(transparent)]
    Blocks(#[from] qauto_blocks::Error),
}

impl Error {
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }
}
