//! Shared test utilities for the tplconf workspace.
//!
//! Dev-dependency only; never published.
//!
//! - [`fixture_tree`]: the reference configuration used across suites
//! - [`TestConfigDir`]: a temporary directory that writes config files in
//!   whichever format the file name implies

use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The reference tree: scalars, nested mappings, a list, and placeholders
/// referencing each of them.
pub fn fixture_tree() -> Value {
    json!({
        "a": 10,
        "b": 20,
        "c": {
            "d": 30,
            "e": {
                "f": 40
            }
        },
        "g": [1, 2, 3, 4, 5],
        "h": "{{a}}",
        "i": "{{g}}",
        "j": ["{{a}}", "{{b}}", "{{e}}", ["{{h}}"]],
        "k": {"l": "{{j}}", "m": [{"ee": "{{e}}"}]}
    })
}

/// A temporary directory holding config files.
///
/// # Example
///
/// ```rust,no_run
/// use tplconf_test_utils::{TestConfigDir, fixture_tree};
///
/// let dir = TestConfigDir::new();
/// let file = dir.write_tree("config.yaml", &fixture_tree());
/// assert!(file.is_file());
/// ```
pub struct TestConfigDir {
    temp_dir: TempDir,
}

impl Default for TestConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfigDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of `name` inside the directory, whether or not it exists.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write raw text to `name`.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Serialize `tree` into `name`: YAML for `.yaml`/`.yml`, pretty JSON
    /// for anything else.
    pub fn write_tree(&self, name: &str, tree: &Value) -> PathBuf {
        let content = if name.ends_with(".yaml") || name.ends_with(".yml") {
            serde_yaml::to_string(tree).unwrap()
        } else {
            serde_json::to_string_pretty(tree).unwrap()
        };
        self.write(name, &content)
    }

    /// Write [`fixture_tree`] as YAML followed by a stray line that makes
    /// the document unparseable.
    pub fn write_invalid_yaml(&self, name: &str) -> PathBuf {
        let mut content = serde_yaml::to_string(&fixture_tree()).unwrap();
        content.push_str("invalidate this");
        self.write(name, &content)
    }

    /// Overwrite an existing file with `tree`.
    pub fn rewrite_tree(&self, name: &str, tree: &Value) {
        assert!(self.path(name).is_file(), "{name} does not exist yet");
        self.write_tree(name, tree);
    }
}
