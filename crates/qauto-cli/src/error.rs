//! Error types for qauto-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from qauto-core
    #[error(transparent)]
    Core(#[from] qauto_core::Error),

    /// Error from qauto-meta
    #[error(transparent)]
    Meta(#[from] qauto_meta::Error),

    /// Error from qauto-fs
    #[error(transparent)]
    Fs(#[from] qauto_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("Could not encode report: {0}")]
    Json(#[from] serde_json::Error),

    /// Source tree walk error
    #[error("Could not walk sources: {0}")]
    Walk(#[from] ignore::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
