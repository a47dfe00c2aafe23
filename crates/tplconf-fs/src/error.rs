//! Error types for tplconf-fs

use std::path::PathBuf;

/// Result type for tplconf-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tplconf-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No configuration file found in {search_dir}; tried: {}", .candidates.join(", "))]
    NotFound {
        search_dir: PathBuf,
        candidates: Vec<String>,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when no configuration file could be located, or the located
    /// file disappeared before it was read.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
        }
    }
}
