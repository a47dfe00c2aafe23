//! Config file loading and reloading
//!
//! [`ConfigFile`] ties the pieces together: locate the file once, then on
//! every (re)load parse it, resolve placeholders, and swap the result into
//! the store.

use std::fmt;
use std::ops::Deref;
use std::path::Path;

use tplconf_content::{ConfigValue, Mapping, kind_name, parse_file};
use tplconf_fs::{DEFAULT_CONFIG_NAME, NormalizedPath, default_extensions, locate};

use crate::Result;
use crate::resolver::{Resolver, SubstitutionMode};
use crate::store::ConfigStore;

/// Options controlling discovery and resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderOptions {
    /// Base file name searched for in a directory
    pub name: String,
    /// Candidate suffixes, highest priority first
    pub extensions: Vec<String>,
    /// Log every loaded entry after each load
    pub print_when_create: bool,
    /// Caller-supplied placeholder bindings, consulted before the file's
    /// own entries
    pub definitions: Mapping,
    pub substitution: SubstitutionMode,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_CONFIG_NAME.to_string(),
            extensions: default_extensions(),
            print_when_create: true,
            definitions: Mapping::new(),
            substitution: SubstitutionMode::default(),
        }
    }
}

impl LoaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn print_when_create(mut self, print: bool) -> Self {
        self.print_when_create = print;
        self
    }

    /// Replace all definitions.
    pub fn definitions(mut self, definitions: Mapping) -> Self {
        self.definitions = definitions;
        self
    }

    /// Add one definition.
    pub fn define(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.definitions.insert(key.into(), value.into());
        self
    }

    /// Snapshot the process environment into the definitions.
    ///
    /// Existing definitions with the same name are overwritten.
    pub fn env_definitions(mut self) -> Self {
        for (key, value) in std::env::vars() {
            self.definitions.insert(key, ConfigValue::String(value));
        }
        self
    }

    pub fn substitution(mut self, mode: SubstitutionMode) -> Self {
        self.substitution = mode;
        self
    }
}

/// A loaded, placeholder-resolved configuration file.
///
/// Dereferences to its [`ConfigStore`] for lookups. Not internally
/// synchronized: [`reload`](Self::reload) takes `&mut self`, so sharing an
/// instance across threads needs an external lock.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    search_path: NormalizedPath,
    source_path: NormalizedPath,
    options: LoaderOptions,
    store: ConfigStore,
}

impl ConfigFile {
    /// Load from a file or directory with default options.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, LoaderOptions::default())
    }

    /// Load from a file or directory.
    ///
    /// A file path is used directly; a directory is searched for
    /// `{name}{ext}` in extension order.
    pub fn load_with(path: impl AsRef<Path>, options: LoaderOptions) -> Result<Self> {
        let search_path = NormalizedPath::new(path).absolute();
        let source_path = locate(&search_path, &options.name, &options.extensions)?;

        let mut config = Self {
            search_path,
            source_path,
            options,
            store: ConfigStore::default(),
        };
        config.reload()?;
        Ok(config)
    }

    /// The file [`load_with`](Self::load_with) would read, without reading it.
    pub fn locate(path: impl AsRef<Path>, options: &LoaderOptions) -> Result<NormalizedPath> {
        let search_path = NormalizedPath::new(path).absolute();
        Ok(locate(&search_path, &options.name, &options.extensions)?)
    }

    /// Re-read the located file and re-resolve every entry.
    ///
    /// The new entries replace the old ones only on success; on error the
    /// previous entries stay in place.
    pub fn reload(&mut self) -> Result<&mut Self> {
        let raw = parse_file(&self.source_path)?;
        let entries =
            Resolver::new(self.options.substitution).resolve_all(&raw, &self.options.definitions);

        tracing::debug!(path = %self.source_path, keys = entries.len(), "Loaded config");
        if self.options.print_when_create {
            for (key, value) in &entries {
                log_entry(key, value);
            }
        }

        self.store.replace(entries);
        Ok(self)
    }

    /// The path given at construction, made absolute.
    pub fn search_path(&self) -> &NormalizedPath {
        &self.search_path
    }

    /// The file actually loaded.
    pub fn source_path(&self) -> &NormalizedPath {
        &self.source_path
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn into_store(self) -> ConfigStore {
        self.store
    }
}

impl Deref for ConfigFile {
    type Target = ConfigStore;

    fn deref(&self) -> &ConfigStore {
        &self.store
    }
}

impl fmt::Display for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dump = serde_json::to_string_pretty(self.store.entries()).map_err(|_| fmt::Error)?;
        write!(
            f,
            "Configuration loaded from file: '{}'\n{}",
            self.source_path, dump
        )
    }
}

fn log_entry(key: &str, value: &ConfigValue) {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    tracing::info!(
        key = %key,
        kind = kind_name(value),
        "Loaded config entry '{}':\n{}",
        key,
        pretty
    );
}
