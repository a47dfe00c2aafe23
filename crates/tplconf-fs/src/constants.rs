//! Defaults used when searching a directory for a configuration file.

/// Base file name searched for when the given path is a directory.
pub const DEFAULT_CONFIG_NAME: &str = "config";

/// Candidate suffixes in priority order. The first existing file wins.
pub const DEFAULT_EXTENSIONS: [&str; 3] = [".yaml", ".yml", ".json"];

/// Owned copy of [`DEFAULT_EXTENSIONS`].
pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}
