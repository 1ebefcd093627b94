//! Rendering of query results.

use crate::document::node::Value;
use anyhow::{Context, Result};
use serde::Serialize;
use std::str::FromStr;

/// Text form used when printing a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML
    Yaml,
    /// Plain string form; sequence elements one per line
    Raw,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "raw" => Ok(OutputFormat::Raw),
            other => anyhow::bail!("Unknown output format '{}', expected json, yaml or raw", other),
        }
    }
}

/// Renders a value as text.
///
/// JSON output is indented by `indent_size` spaces per level; an indent of
/// zero produces compact single-line JSON. The result never ends with a
/// trailing newline.
///
/// # Examples
///
/// ```
/// use keytrail::document::node::Value;
/// use keytrail::file::writer::{render, OutputFormat};
///
/// let value = Value::Sequence(vec![Value::from("a"), Value::from("b")]);
/// assert_eq!(render(&value, OutputFormat::Json, 0).unwrap(), r#"["a","b"]"#);
/// assert_eq!(render(&value, OutputFormat::Raw, 2).unwrap(), "a\nb");
/// ```
pub fn render(value: &Value, format: OutputFormat, indent_size: usize) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(value, indent_size),
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(value).context("Failed to serialize YAML")?;
            Ok(yaml.trim_end().to_string())
        }
        OutputFormat::Raw => Ok(match value {
            Value::Sequence(items) => items
                .iter()
                .map(|item| item.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
            other => other.to_string(),
        }),
    }
}

fn render_json(value: &Value, indent_size: usize) -> Result<String> {
    if indent_size == 0 {
        return serde_json::to_string(value).context("Failed to serialize JSON");
    }

    let indent = " ".repeat(indent_size);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    String::from_utf8(buffer).context("Serialized JSON was not UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_json_pretty() {
        let value = Value::from(json!({"a": ["x", 1]}));
        let rendered = render(&value, OutputFormat::Json, 2).unwrap();
        assert_eq!(rendered, "{\n  \"a\": [\n    \"x\",\n    1\n  ]\n}");
    }

    #[test]
    fn test_render_json_custom_indent() {
        let value = Value::from(json!({"a": 1}));
        let rendered = render(&value, OutputFormat::Json, 4).unwrap();
        assert_eq!(rendered, "{\n    \"a\": 1\n}");
    }

    #[test]
    fn test_render_scalar_json_is_quoted() {
        let rendered = render(&Value::from("none"), OutputFormat::Json, 2).unwrap();
        assert_eq!(rendered, "\"none\"");
    }

    #[test]
    fn test_render_yaml() {
        let value = Value::from(json!({"a": "b"}));
        assert_eq!(render(&value, OutputFormat::Yaml, 2).unwrap(), "a: b");
    }

    #[test]
    fn test_render_raw_scalar_is_unquoted() {
        assert_eq!(
            render(&Value::from("plain"), OutputFormat::Raw, 2).unwrap(),
            "plain"
        );
    }

    #[test]
    fn test_render_record_as_mapping() {
        let record = Value::Record(vec![("port".to_string(), Value::from(80u64))]);
        assert_eq!(
            render(&record, OutputFormat::Json, 0).unwrap(),
            r#"{"port":80}"#
        );
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("raw".parse::<OutputFormat>().unwrap(), OutputFormat::Raw);
        assert!("toml".parse::<OutputFormat>().is_err());
    }
}
