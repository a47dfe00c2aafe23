//! Placeholder resolution
//!
//! String scalars may embed `{{name}}` tokens. Resolution walks each
//! source mapping in order and, for every non-mapping binding `name: v`,
//! replaces each literal `{{name}}` inside the target with the string form
//! of `v`. Mapping bindings are descended into with the same target, so a
//! nested key still binds under its bare name rather than a dotted path.
//!
//! Top-level entries are resolved in file order against the caller's
//! definitions first and then the entries already resolved. An entry can
//! therefore reference an earlier one but not a later one; a forward
//! reference stays as literal token text.

use tplconf_content::{ConfigValue, Mapping, stringify};

/// How a bound value is inserted into a string that references it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubstitutionMode {
    /// Textual replacement with the value's string form, everywhere.
    #[default]
    Stringify,
    /// A string that is exactly one token becomes a copy of the bound
    /// value, keeping its type. Partial occurrences are still stringified.
    Splice,
}

/// The placeholder text for `key`, e.g. `{{APP_PATH}}`.
pub fn token(key: &str) -> String {
    format!("{{{{{key}}}}}")
}

/// Substitutes `{{name}}` tokens in value trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    mode: SubstitutionMode,
}

impl Resolver {
    pub fn new(mode: SubstitutionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> SubstitutionMode {
        self.mode
    }

    /// Resolve every top-level entry of `raw`, in order.
    ///
    /// Each entry sees `definitions` and then the entries resolved before it.
    pub fn resolve_all(&self, raw: &Mapping, definitions: &Mapping) -> Mapping {
        let mut resolved = Mapping::new();
        for (key, value) in raw {
            let value = self.resolve(value, &[definitions, &resolved]);
            resolved.insert(key.clone(), value);
        }
        resolved
    }

    /// Resolve `value` against each source in turn.
    pub fn resolve(&self, value: &ConfigValue, sources: &[&Mapping]) -> ConfigValue {
        sources
            .iter()
            .fold(value.clone(), |acc, source| self.resolve_against(acc, source))
    }

    fn resolve_against(&self, value: ConfigValue, source: &Mapping) -> ConfigValue {
        let before = value.clone();
        let mut value = value;

        for (key, bound) in source {
            value = match bound {
                ConfigValue::Object(nested) => self.resolve_against(value, nested),
                _ => self.replace(value, &token(key), bound, &stringify(bound)),
            };
        }

        // A splice of a null binding must not erase the entry.
        if value.is_null() { before } else { value }
    }

    fn replace(
        &self,
        value: ConfigValue,
        token: &str,
        bound: &ConfigValue,
        replacement: &str,
    ) -> ConfigValue {
        match value {
            ConfigValue::String(s) => self.replace_in_str(s, token, bound, replacement),
            ConfigValue::Array(items) => ConfigValue::Array(
                items
                    .into_iter()
                    .map(|item| self.replace(item, token, bound, replacement))
                    .collect(),
            ),
            ConfigValue::Object(map) => ConfigValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, self.replace(v, token, bound, replacement)))
                    .collect(),
            ),
            scalar => scalar,
        }
    }

    fn replace_in_str(
        &self,
        s: String,
        token: &str,
        bound: &ConfigValue,
        replacement: &str,
    ) -> ConfigValue {
        if !s.contains(token) {
            return ConfigValue::String(s);
        }
        if self.mode == SubstitutionMode::Splice && s == token {
            return bound.clone();
        }
        ConfigValue::String(s.replace(token, replacement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn mapping(value: ConfigValue) -> Mapping {
        value.as_object().cloned().unwrap()
    }

    fn resolve_file(raw: ConfigValue) -> ConfigValue {
        ConfigValue::Object(Resolver::default().resolve_all(&mapping(raw), &Mapping::new()))
    }

    #[test]
    fn test_token_format() {
        assert_eq!(token("a"), "{{a}}");
        assert_eq!(token("APP_PATH"), "{{APP_PATH}}");
    }

    #[test]
    fn test_self_reference_becomes_string() {
        let out = resolve_file(json!({"a": 10, "h": "{{a}}"}));
        assert_eq!(out["h"], json!("10"));
    }

    #[test]
    fn test_list_reference_is_stringified() {
        let out = resolve_file(json!({"g": [1, 2, 3], "i": "{{g}}"}));
        assert_eq!(out["i"], json!("[1, 2, 3]"));
    }

    #[test]
    fn test_substring_replacement_keeps_surrounding_text() {
        let out = resolve_file(json!({"root": "/opt", "logs": "{{root}}/logs/{{root}}"}));
        assert_eq!(out["logs"], json!("/opt/logs//opt"));
    }

    #[test]
    fn test_no_whitespace_tolerance() {
        let out = resolve_file(json!({"a": 1, "b": "{{ a }}", "c": "{a}"}));
        assert_eq!(out["b"], json!("{{ a }}"));
        assert_eq!(out["c"], json!("{a}"));
    }

    #[test]
    fn test_forward_reference_stays_literal() {
        let out = resolve_file(json!({"early": "{{late}}", "late": 5}));
        assert_eq!(out["early"], json!("{{late}}"));
    }

    #[test]
    fn test_nested_source_keys_bind_by_bare_name() {
        let out = resolve_file(json!({
            "c": {"d": 30, "e": {"f": 40}},
            "x": "{{d}}-{{f}}",
            "y": "{{c}} {{e}}",
            "z": "{{c.d}}"
        }));
        assert_eq!(out["x"], json!("30-40"));
        // Mapping bindings are scanned, never substituted themselves.
        assert_eq!(out["y"], json!("{{c}} {{e}}"));
        assert_eq!(out["z"], json!("{{c.d}}"));
    }

    #[test]
    fn test_recurses_into_sequences_and_mappings() {
        let out = resolve_file(json!({
            "a": 10,
            "b": 20,
            "h": "{{a}}",
            "j": ["{{a}}", "{{b}}", "{{e}}", ["{{h}}"]],
            "k": {"l": "{{j}}", "m": [{"ee": "{{e}}"}]}
        }));
        assert_eq!(out["j"], json!(["10", "20", "{{e}}", ["10"]]));
        assert_eq!(out["k"]["l"], json!("['10', '20', '{{e}}', ['10']]"));
        assert_eq!(out["k"]["m"], json!([{"ee": "{{e}}"}]));
    }

    #[test]
    fn test_non_string_scalars_untouched() {
        let out = resolve_file(json!({"a": 1, "n": null, "t": true, "f": 1.5}));
        assert_eq!(out, json!({"a": 1, "n": null, "t": true, "f": 1.5}));
    }

    #[test]
    fn test_mapping_keys_are_not_substituted() {
        let out = resolve_file(json!({"a": "k", "m": {"{{a}}": "{{a}}"}}));
        assert_eq!(out["m"], json!({"{{a}}": "k"}));
    }

    #[test]
    fn test_definitions_take_priority_over_entries() {
        let defs = mapping(json!({"a": "from-defs"}));
        let raw = mapping(json!({"a": "from-file", "b": "{{a}}"}));

        let out = Resolver::default().resolve_all(&raw, &defs);

        assert_eq!(out["b"], json!("from-defs"));
    }

    #[test]
    fn test_definitions_reach_forward_names() {
        let defs = mapping(json!({"HOME": "/home/me", "nested": {"USER": "me"}}));
        let raw = mapping(json!({"p": "{{HOME}}/{{USER}}"}));

        let out = Resolver::default().resolve_all(&raw, &defs);

        assert_eq!(out["p"], json!("/home/me/me"));
    }

    #[test]
    fn test_replacement_text_can_be_resolved_by_later_keys() {
        // `b` expands to text containing `{{a}}`, which the later binding of
        // `a` in the same source then replaces.
        let source = mapping(json!({"b": "{{a}}!", "a": "x"}));
        let out = Resolver::default().resolve(&json!("{{b}}"), &[&source]);
        assert_eq!(out, json!("x!"));
    }

    #[test]
    fn test_null_binding_stringifies_to_none() {
        let out = resolve_file(json!({"n": null, "s": "value={{n}}"}));
        assert_eq!(out["s"], json!("value=None"));
    }

    #[test]
    fn test_splice_keeps_structure_for_exact_token() {
        let raw = mapping(json!({"g": [1, 2, 3], "i": "{{g}}", "s": "list {{g}}", "a": 10, "h": "{{a}}"}));

        let out = Resolver::new(SubstitutionMode::Splice).resolve_all(&raw, &Mapping::new());

        assert_eq!(out["i"], json!([1, 2, 3]));
        assert_eq!(out["s"], json!("list [1, 2, 3]"));
        assert_eq!(out["h"], json!(10));
    }

    #[test]
    fn test_splice_of_null_falls_back_to_original() {
        let raw = mapping(json!({"n": null, "x": "{{n}}"}));

        let out = Resolver::new(SubstitutionMode::Splice).resolve_all(&raw, &Mapping::new());

        assert_eq!(out["x"], json!("{{n}}"));
    }

    #[test]
    fn test_resolution_is_idempotent_over_same_input() {
        let raw = mapping(json!({"a": 10, "h": "{{a}}", "j": ["{{h}}"]}));
        let resolver = Resolver::default();
        assert_eq!(
            resolver.resolve_all(&raw, &Mapping::new()),
            resolver.resolve_all(&raw, &Mapping::new())
        );
    }
}
