//! Format detection and handler trait

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::value::ConfigValue;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Detect format from a file extension, with or without the leading dot.
    ///
    /// Matching is exact: `.YAML` is not a recognized suffix.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.') {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Display name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }

    /// Handler that decodes this format
    pub fn handler(&self) -> Box<dyn FormatHandler> {
        match self {
            Self::Yaml => Box::new(crate::handlers::YamlHandler::new()),
            Self::Json => Box::new(crate::handlers::JsonHandler::new()),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for format-specific decoders
pub trait FormatHandler: Send + Sync {
    /// Format identifier
    fn format(&self) -> Format;

    /// Decode source text into a value tree
    fn parse(&self, source: &str) -> Result<ConfigValue>;
}
