//! Decoding of JSON and YAML text into [`Value`].
//!
//! Parsing is delegated to `serde_json` and `serde_yaml`; this module only
//! converts their value trees into the crate's own representation.

use super::node::{Number, Value};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

/// Parses a JSON document into a [`Value`].
///
/// # Errors
///
/// Returns an error if the text is not valid JSON.
pub fn parse_json(content: &str) -> Result<Value> {
    let value: JsonValue = serde_json::from_str(content).context("Failed to parse JSON")?;
    Ok(Value::from(value))
}

/// Parses a YAML document into a [`Value`].
///
/// # Errors
///
/// Returns an error if the text is not valid YAML.
pub fn parse_yaml(content: &str) -> Result<Value> {
    let value: YamlValue = serde_yaml::from_str(content).context("Failed to parse YAML")?;
    Ok(Value::from(value))
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(n),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            JsonValue::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(value: &JsonValue) -> Self {
        Value::from(value.clone())
    }
}

impl From<YamlValue> for Value {
    fn from(value: YamlValue) -> Self {
        match value {
            YamlValue::Null => Value::Null,
            YamlValue::Bool(b) => Value::Bool(b),
            YamlValue::Number(n) => convert_yaml_number(&n),
            YamlValue::String(s) => Value::String(s),
            YamlValue::Sequence(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            YamlValue::Mapping(map) => {
                let mut entries = IndexMap::with_capacity(map.len());
                for (k, v) in map {
                    entries.insert(yaml_key_to_string(k), Value::from(v));
                }
                Value::Mapping(entries)
            }
            // Tags carry no meaning for lookup; keep the tagged value itself.
            YamlValue::Tagged(tagged) => Value::from(tagged.value),
        }
    }
}

fn convert_yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(Number::from(i))
    } else if let Some(u) = n.as_u64() {
        Value::Number(Number::from(u))
    } else {
        n.as_f64().map_or(Value::Null, Value::from_f64)
    }
}

/// YAML allows any node as a mapping key; lookups are by string, so scalar
/// keys are written out in their plain form and complex keys as compact JSON.
fn yaml_key_to_string(key: YamlValue) -> String {
    match key {
        YamlValue::String(s) => s,
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        other => Value::from(other).to_string(),
    }
}
