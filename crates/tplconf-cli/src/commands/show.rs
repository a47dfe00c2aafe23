//! Show command implementation

use std::path::Path;

use colored::Colorize;
use tplconf_core::{ConfigFile, LoaderOptions, kind_name};

use crate::error::Result;

/// Print the located file followed by every resolved entry
pub fn run_show(path: &Path, options: LoaderOptions, json: bool) -> Result<()> {
    let config = ConfigFile::load_with(path, options)?;

    if json {
        println!("{config}");
        return Ok(());
    }

    println!("{}: {}", "Config".dimmed(), config.source_path().as_str().cyan());
    println!();

    if config.is_empty() {
        println!("  {}", "No entries".dimmed());
        return Ok(());
    }

    for (key, value) in config.entries() {
        println!(
            "{} {}",
            key.bold(),
            format!("({})", kind_name(value)).dimmed()
        );
        let pretty = serde_json::to_string_pretty(value)?;
        for line in pretty.lines() {
            println!("  {line}");
        }
    }

    Ok(())
}
