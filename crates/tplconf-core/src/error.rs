//! Error types for tplconf-core

/// Result type for tplconf-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or querying configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Lookup miss when the caller asked for a hard failure
    #[error("Key '{path}' does not exist")]
    KeyNotFound { path: String },

    /// Value present but not of the requested type
    #[error("Key '{path}' holds a {found}, expected {expected}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Value present but not deserializable into the requested type
    #[error("Key '{path}' could not be deserialized: {source}")]
    Deserialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from tplconf-fs
    #[error(transparent)]
    Fs(#[from] tplconf_fs::Error),

    /// Format error from tplconf-content
    #[error(transparent)]
    Content(#[from] tplconf_content::Error),
}

impl Error {
    /// No configuration file could be located.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Fs(e) => e.is_not_found(),
            Self::Content(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// The located file has a suffix with no registered parser.
    pub fn is_unsupported_extension(&self) -> bool {
        matches!(self, Self::Content(e) if e.is_unsupported_extension())
    }

    /// The parser rejected the file content.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Content(e) if e.is_parse_error())
    }

    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }
}
