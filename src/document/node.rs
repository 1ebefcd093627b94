//! Dynamic value representation traversed by the query engine.
//!
//! `Value` is a tagged union over everything a decoded JSON or YAML document
//! (or a converted Rust record) can contain. The query engine never mutates a
//! `Value`; it only borrows it and clones the pieces it returns.
//!
//! # Example
//!
//! ```
//! use keytrail::document::node::Value;
//! use indexmap::IndexMap;
//!
//! let mut user = IndexMap::new();
//! user.insert("name".to_string(), Value::from("Alice"));
//! user.insert("admin".to_string(), Value::Bool(true));
//! let root = Value::Mapping(user);
//!
//! assert!(!root.is_empty());
//! assert_eq!(root.to_string(), r#"{"name":"Alice","admin":true}"#);
//! ```

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

pub use serde_json::Number;

/// A dynamically-typed value.
///
/// `Mapping` compares equal regardless of entry order. `Record` keeps its
/// fields in declaration order and compares them in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An absent value (`null` / `~`)
    Null,
    /// A string scalar
    String(String),
    /// A numeric scalar (integer or finite float)
    Number(Number),
    /// A boolean scalar
    Bool(bool),
    /// Keyed entries; iteration follows insertion order
    Mapping(IndexMap<String, Value>),
    /// An ordered list
    Sequence(Vec<Value>),
    /// Named fields of a fixed-shape record, in declaration order
    Record(Vec<(String, Value)>),
}

impl Value {
    /// Returns true if the value counts as empty for traversal purposes.
    ///
    /// An empty mapping is empty. A sequence is empty when every element is
    /// itself empty, so `[]` and `[{}, [{}]]` are both empty. Scalars and
    /// records are never empty.
    ///
    /// Nested sequences are checked with an explicit stack, so arbitrarily
    /// deep input cannot exhaust the call stack here.
    pub fn is_empty(&self) -> bool {
        let mut pending = vec![self];
        while let Some(value) = pending.pop() {
            match value {
                Value::Mapping(entries) if entries.is_empty() => {}
                Value::Sequence(items) => pending.extend(items),
                _ => return false,
            }
        }
        true
    }

    /// Builds a number from a float. Non-finite floats have no JSON form and
    /// become `Null`.
    pub fn from_f64(f: f64) -> Self {
        Number::from_f64(f).map_or(Value::Null, Value::Number)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::from(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Number(Number::from(u))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::from_f64(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::String(s) => s.hash(state),
            Value::Number(n) => n.hash(state),
            Value::Bool(b) => b.hash(state),
            Value::Mapping(entries) => {
                // Equality ignores entry order, so hashing must too.
                let mut keys: Vec<&String> = entries.keys().collect();
                keys.sort();
                keys.len().hash(state);
                for key in keys {
                    key.hash(state);
                    entries[key].hash(state);
                }
            }
            Value::Sequence(items) => items.hash(state),
            Value::Record(fields) => fields.hash(state),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(n) => n.serialize(serializer),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Record(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }
    }
}

/// The string form of a value: strings are written raw, other scalars as
/// their literal, containers as compact JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::String(s) => write!(f, "{}", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Mapping(_) | Value::Sequence(_) | Value::Record(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                write!(f, "{}", json)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(value: &Value) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn mapping(entries: &[(&str, Value)]) -> Value {
        Value::Mapping(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_empty_mapping_is_empty() {
        assert!(Value::Mapping(IndexMap::new()).is_empty());
    }

    #[test]
    fn test_nested_empty_sequence_is_empty() {
        let value = Value::Sequence(vec![
            Value::Mapping(IndexMap::new()),
            Value::Sequence(vec![Value::Mapping(IndexMap::new())]),
        ]);
        assert!(value.is_empty());
        assert!(Value::Sequence(vec![]).is_empty());
    }

    #[test]
    fn test_deeply_nested_empty_sequence() {
        let mut value = Value::Mapping(IndexMap::new());
        for _ in 0..2_000 {
            value = Value::Sequence(vec![value]);
        }
        assert!(value.is_empty());

        let mut value = Value::from("x");
        for _ in 0..2_000 {
            value = Value::Sequence(vec![Value::Sequence(vec![]), value]);
        }
        assert!(!value.is_empty());
    }

    #[test]
    fn test_scalars_and_records_are_never_empty() {
        assert!(!Value::from("").is_empty());
        assert!(!Value::Null.is_empty());
        assert!(!Value::Record(vec![]).is_empty());
        assert!(!Value::Sequence(vec![Value::from("")]).is_empty());
    }

    #[test]
    fn test_mapping_equality_ignores_order() {
        let a = mapping(&[("x", Value::from(1i64)), ("y", Value::from(2i64))]);
        let b = mapping(&[("y", Value::from(2i64)), ("x", Value::from(1i64))]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_record_equality_respects_order() {
        let a = Value::Record(vec![
            ("x".to_string(), Value::Null),
            ("y".to_string(), Value::Null),
        ]);
        let b = Value::Record(vec![
            ("y".to_string(), Value::Null),
            ("x".to_string(), Value::Null),
        ]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Value::from("plain").to_string(), "plain");
        assert_eq!(Value::from(42i64).to_string(), "42");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(
            Value::Sequence(vec![Value::from("a"), Value::Bool(false)]).to_string(),
            r#"["a",false]"#
        );
        let record = Value::Record(vec![("name".to_string(), Value::from("r"))]);
        assert_eq!(record.to_string(), r#"{"name":"r"}"#);
    }

    #[test]
    fn test_non_finite_float_becomes_null() {
        assert_eq!(Value::from(f64::NAN), Value::Null);
        assert_eq!(Value::from(f64::INFINITY), Value::Null);
        assert!(matches!(Value::from(1.5), Value::Number(_)));
    }
}
