//! JSON format handler

use crate::error::{Error, Result};
use crate::format::{Format, FormatHandler};
use crate::value::ConfigValue;

/// Handler for JSON files
#[derive(Debug, Default)]
pub struct JsonHandler;

impl JsonHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FormatHandler for JsonHandler {
    fn format(&self) -> Format {
        Format::Json
    }

    fn parse(&self, source: &str) -> Result<ConfigValue> {
        serde_json::from_str(source).map_err(|e| Error::parse("JSON", e.to_string()))
    }
}
