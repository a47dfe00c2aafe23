//! Configuration file discovery
//!
//! A base path that already names a file is used as-is. A directory is
//! searched for `{name}{ext}` for each candidate suffix in order.

use crate::{Error, NormalizedPath, Result};

/// Candidate files for `name` under `base`, in priority order.
pub fn candidates(base: &NormalizedPath, name: &str, extensions: &[String]) -> Vec<NormalizedPath> {
    extensions
        .iter()
        .map(|ext| base.join(&format!("{name}{ext}")))
        .collect()
}

/// Resolve `base` to the configuration file to load.
///
/// No extension check happens here; an unrecognized suffix is rejected
/// when the file is parsed.
pub fn locate(base: &NormalizedPath, name: &str, extensions: &[String]) -> Result<NormalizedPath> {
    if base.is_file() {
        tracing::debug!(path = %base, "Using explicit config file");
        return Ok(base.clone());
    }

    let tried = candidates(base, name, extensions);
    if let Some(found) = tried.iter().find(|candidate| candidate.is_file()) {
        tracing::debug!(path = %found, "Located config file");
        return Ok(found.clone());
    }

    let candidates: Vec<String> = tried.iter().map(ToString::to_string).collect();
    tracing::error!(
        search_dir = %base,
        "None of these config files exist:\n{}\nCreate one of them in '{}'",
        candidates.join("\n"),
        base
    );

    Err(Error::NotFound {
        search_dir: base.to_native(),
        candidates,
    })
}
