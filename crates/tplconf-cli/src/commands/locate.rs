//! Locate command implementation

use std::path::Path;

use tplconf_core::{ConfigFile, LoaderOptions};

use crate::error::Result;

/// Print the file that would be loaded from `path`
pub fn run_locate(path: &Path, options: &LoaderOptions) -> Result<()> {
    let found = ConfigFile::locate(path, options)?;
    println!("{found}");
    Ok(())
}
