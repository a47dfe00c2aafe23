//! Resolved configuration entries and dotted-path access

use serde::de::DeserializeOwned;
use tplconf_content::{ConfigValue, Mapping, get_at_path, kind_name, parse_path};

use crate::{Error, Result};

/// Miss policy for a single lookup.
///
/// Defaults match [`ConfigStore::get`]: no default value, warn on miss,
/// never fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    default: Option<ConfigValue>,
    print_when_missing: bool,
    raise_when_missing: bool,
}

impl Default for Lookup {
    fn default() -> Self {
        Self {
            default: None,
            print_when_missing: true,
            raise_when_missing: false,
        }
    }
}

impl Lookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value returned when the path is missing.
    pub fn default_value(mut self, value: impl Into<ConfigValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Whether a miss emits a warning.
    pub fn print_when_missing(mut self, print: bool) -> Self {
        self.print_when_missing = print;
        self
    }

    /// Whether a miss fails with [`Error::KeyNotFound`].
    pub fn raise_when_missing(mut self, raise: bool) -> Self {
        self.raise_when_missing = raise;
        self
    }
}

/// Fully resolved configuration entries.
///
/// Lookups hand out shared references or clones; the entries can only be
/// replaced wholesale by the owning loader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    entries: Mapping,
}

impl ConfigStore {
    pub fn new(entries: Mapping) -> Self {
        Self { entries }
    }

    /// All top-level entries, in file order.
    pub fn entries(&self) -> &Mapping {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the value at a dotted path, without logging.
    pub fn lookup(&self, path: &str) -> Option<&ConfigValue> {
        get_at_path(&self.entries, &parse_path(path))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Value at `path`, or `None` with a warning when it is missing.
    pub fn get(&self, path: &str) -> Option<ConfigValue> {
        self.lookup(path).cloned().or_else(|| {
            warn_missing(path, None);
            None
        })
    }

    /// Value at `path`, or `default` with a warning when it is missing.
    pub fn get_or(&self, path: &str, default: impl Into<ConfigValue>) -> ConfigValue {
        match self.lookup(path) {
            Some(value) => value.clone(),
            None => {
                let default = default.into();
                warn_missing(path, Some(&default));
                default
            }
        }
    }

    /// Value at `path` under an explicit miss policy.
    ///
    /// A miss anywhere along the path never yields a partial result: it
    /// either fails naming the full path or falls back to the default.
    pub fn get_with(&self, path: &str, lookup: &Lookup) -> Result<Option<ConfigValue>> {
        if let Some(value) = self.lookup(path) {
            return Ok(Some(value.clone()));
        }
        if lookup.raise_when_missing {
            return Err(Error::KeyNotFound {
                path: path.to_string(),
            });
        }
        if lookup.print_when_missing {
            warn_missing(path, lookup.default.as_ref());
        }
        Ok(lookup.default.clone())
    }

    /// Value at `path`, failing with [`Error::KeyNotFound`] when missing.
    pub fn require(&self, path: &str) -> Result<ConfigValue> {
        self.lookup(path)
            .cloned()
            .ok_or_else(|| Error::KeyNotFound {
                path: path.to_string(),
            })
    }

    pub fn get_str(&self, path: &str) -> Result<Option<String>> {
        self.get_typed(path, "string", |v| v.as_str().map(str::to_string))
    }

    pub fn get_i64(&self, path: &str) -> Result<Option<i64>> {
        self.get_typed(path, "int", ConfigValue::as_i64)
    }

    /// Integers are widened.
    pub fn get_f64(&self, path: &str) -> Result<Option<f64>> {
        self.get_typed(path, "float", ConfigValue::as_f64)
    }

    pub fn get_bool(&self, path: &str) -> Result<Option<bool>> {
        self.get_typed(path, "bool", ConfigValue::as_bool)
    }

    /// Deserialize the value at `path` into `T`.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let Some(value) = self.get(path) else {
            return Ok(None);
        };
        serde_json::from_value(value)
            .map(Some)
            .map_err(|source| Error::Deserialize {
                path: path.to_string(),
                source,
            })
    }

    pub(crate) fn replace(&mut self, entries: Mapping) {
        self.entries = entries;
    }

    fn get_typed<T>(
        &self,
        path: &str,
        expected: &'static str,
        convert: impl FnOnce(&ConfigValue) -> Option<T>,
    ) -> Result<Option<T>> {
        let Some(value) = self.get(path) else {
            return Ok(None);
        };
        convert(&value).map(Some).ok_or(Error::TypeMismatch {
            path: path.to_string(),
            expected,
            found: kind_name(&value),
        })
    }
}

fn warn_missing(path: &str, default: Option<&ConfigValue>) {
    let default = default.map_or_else(|| "None".to_string(), ConfigValue::to_string);
    tracing::warn!("Key '{}' does not exist! Returning default value: '{}'", path, default);
}
