//! Parser dispatch by file suffix

use tplconf_fs::{NormalizedPath, io};

use crate::error::{Error, Result};
use crate::format::Format;
use crate::value::{ConfigValue, Mapping, kind_name};

/// Read and decode the configuration file at `path`.
///
/// The suffix is checked before the file is read, so a `.txt` file is
/// rejected even when its content is valid JSON.
pub fn parse_file(path: &NormalizedPath) -> Result<Mapping> {
    let suffix = path.suffix();
    let format = Format::from_extension(&suffix).ok_or_else(|| Error::UnsupportedExtension {
        extension: suffix.clone(),
        path: path.to_string(),
    })?;

    tracing::debug!(path = %path, %format, "Opening config file");
    let content = io::read_text(path)?;

    parse_str(&content, format).map_err(|e| {
        let e = e.with_origin(path.to_string());
        tracing::warn!("Error loading config file '{}': {}", path, e);
        e
    })
}

/// Decode `source` as `format` into a top-level mapping.
///
/// A `null` document (including an empty YAML file) yields an empty mapping.
pub fn parse_str(source: &str, format: Format) -> Result<Mapping> {
    match format.handler().parse(source)? {
        ConfigValue::Object(map) => Ok(map),
        ConfigValue::Null => Ok(Mapping::new()),
        other => Err(Error::NotAMapping {
            origin: "<string>".into(),
            found: kind_name(&other).into(),
        }),
    }
}
