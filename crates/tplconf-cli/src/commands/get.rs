//! Get command implementation

use std::path::Path;

use tplconf_core::{ConfigFile, ConfigValue, LoaderOptions, Lookup};

use crate::error::Result;

/// Print the value at `key`
///
/// A missing key prints `default` when given and nothing otherwise,
/// unless `raise` turns the miss into an error.
pub fn run_get(
    path: &Path,
    options: LoaderOptions,
    key: &str,
    default: Option<&str>,
    raise: bool,
) -> Result<()> {
    let config = ConfigFile::load_with(path, options)?;

    let mut lookup = Lookup::new().raise_when_missing(raise);
    if let Some(default) = default {
        lookup = lookup.default_value(default);
    }

    if let Some(value) = config.get_with(key, &lookup)? {
        println!("{}", render(&value)?);
    }
    Ok(())
}

fn render(value: &ConfigValue) -> Result<String> {
    Ok(match value {
        ConfigValue::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other)?,
    })
}
