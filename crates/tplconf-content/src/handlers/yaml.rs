//! YAML format handler using serde_yaml

use serde_yaml::Value as YamlValue;

use crate::error::{Error, Result};
use crate::format::{Format, FormatHandler};
use crate::value::{ConfigValue, Mapping};

/// Handler for YAML files using serde_yaml
#[derive(Debug, Default)]
pub struct YamlHandler;

impl YamlHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FormatHandler for YamlHandler {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn parse(&self, source: &str) -> Result<ConfigValue> {
        let mut yaml_value: YamlValue =
            serde_yaml::from_str(source).map_err(|e| Error::parse("YAML", e.to_string()))?;
        // `<<: *anchor` merge keys are resolved before conversion.
        yaml_value
            .apply_merge()
            .map_err(|e| Error::parse("YAML", e.to_string()))?;
        Ok(yaml_to_config(&yaml_value))
    }
}

/// Convert a YAML tree into a [`ConfigValue`], keeping mapping order.
fn yaml_to_config(value: &YamlValue) -> ConfigValue {
    match value {
        YamlValue::Null => ConfigValue::Null,
        YamlValue::Bool(b) => ConfigValue::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                ConfigValue::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                ConfigValue::Number(u.into())
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(ConfigValue::Number)
                    .unwrap_or(ConfigValue::Null)
            } else {
                ConfigValue::Null
            }
        }
        YamlValue::String(s) => ConfigValue::String(s.clone()),
        YamlValue::Sequence(seq) => ConfigValue::Array(seq.iter().map(yaml_to_config).collect()),
        YamlValue::Mapping(map) => {
            let mut out = Mapping::new();
            for (k, v) in map {
                out.insert(key_to_string(k), yaml_to_config(v));
            }
            ConfigValue::Object(out)
        }
        YamlValue::Tagged(tagged) => yaml_to_config(&tagged.value),
    }
}

// Lookups are by string, so scalar keys like `1:` or `true:` are stringified.
fn key_to_string(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Null => "null".to_string(),
        YamlValue::Tagged(tagged) => key_to_string(&tagged.value),
        complex => serde_yaml::to_string(complex)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
