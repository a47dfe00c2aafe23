//! Error types for tplconf-content

/// Result type for tplconf-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tplconf-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse {format} content from {origin}: {message}")]
    ParseError {
        format: String,
        origin: String,
        message: String,
    },

    #[error("Unsupported extension: '{extension}' ({path})")]
    UnsupportedExtension { extension: String, path: String },

    #[error("Top-level value in {origin} must be a mapping, found {found}")]
    NotAMapping { origin: String, found: String },

    #[error(transparent)]
    Fs(#[from] tplconf_fs::Error),
}

impl Error {
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            format: format.into(),
            origin: "<string>".into(),
            message: message.into(),
        }
    }

    /// Attach the file the failing content came from.
    pub fn with_origin(self, origin: impl Into<String>) -> Self {
        match self {
            Self::ParseError {
                format, message, ..
            } => Self::ParseError {
                format,
                origin: origin.into(),
                message,
            },
            Self::NotAMapping { found, .. } => Self::NotAMapping {
                origin: origin.into(),
                found,
            },
            other => other,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError { .. } | Self::NotAMapping { .. })
    }

    pub fn is_unsupported_extension(&self) -> bool {
        matches!(self, Self::UnsupportedExtension { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Fs(e) if e.is_not_found())
    }
}
