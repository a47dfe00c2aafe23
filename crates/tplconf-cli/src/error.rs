//! Error types for tplconf-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from tplconf-core
    #[error(transparent)]
    Core(#[from] tplconf_core::Error),

    /// Output serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
