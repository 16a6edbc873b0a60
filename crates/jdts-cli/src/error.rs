//! Error types for jdts-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from jdts-config
    #[error(transparent)]
    Config(#[from] jdts_config::Error),

    /// Error from jdts-core
    #[error(transparent)]
    Core(#[from] jdts_core::Error),

    /// Error from jdts-parser
    #[error(transparent)]
    Parser(#[from] jdts_parser::Error),

    /// Error from jdts-fs
    #[error(transparent)]
    Fs(#[from] jdts_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output encoding error
    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

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
