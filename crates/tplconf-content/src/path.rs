//! Dotted-path traversal
//!
//! A path such as `database.primary.host` indexes nested mappings one key
//! at a time. Only mappings can be indexed: a segment that lands on a
//! sequence or scalar is a miss.
//!
//! # Examples
//!
//! ```
//! use tplconf_content::path::{get_at_path, parse_path};
//! use serde_json::json;
//!
//! let root = json!({"c": {"d": 30}, "g": [1, 2]});
//! let root = root.as_object().unwrap();
//!
//! assert_eq!(get_at_path(root, &parse_path("c.d")), Some(&json!(30)));
//! assert_eq!(get_at_path(root, &parse_path("g.0")), None);
//! ```

use crate::value::{ConfigValue, Mapping};

/// Split a dotted path into its key segments.
///
/// No escaping is supported; keys containing `.` cannot be addressed.
pub fn parse_path(path: &str) -> Vec<&str> {
    path.split('.').collect()
}

/// Look up the value at `segments` below `root`.
///
/// Returns `None` if any segment is missing or lands on a non-mapping.
pub fn get_at_path<'a>(root: &'a Mapping, segments: &[&str]) -> Option<&'a ConfigValue> {
    let (first, rest) = segments.split_first()?;
    let value = root.get(*first)?;

    if rest.is_empty() {
        return Some(value);
    }

    match value {
        ConfigValue::Object(map) => get_at_path(map, rest),
        _ => None,
    }
}
