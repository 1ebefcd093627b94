//! Conversion of Rust records into [`Value`].
//!
//! Any `Serialize` type can be turned into a `Value` once, at the boundary,
//! so the query engine can look up struct fields by name without knowing the
//! concrete type. Structs become [`Value::Record`] with fields in declaration
//! order; everything else maps onto the closest dynamic shape.
//!
//! # Example
//!
//! ```
//! use keytrail::document::record::to_value;
//! use keytrail::document::node::Value;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! let value = to_value(&Server { host: "localhost".into(), port: 8080 }).unwrap();
//! assert!(matches!(value, Value::Record(_)));
//! ```

use super::node::{Number, Value};
use indexmap::IndexMap;
use serde::ser::{self, Serialize, Serializer};
use std::fmt;

/// Errors raised while converting a record into a [`Value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A map key was not a scalar and cannot be used for lookup.
    UnsupportedKey { found: String },
    /// Raised by a `Serialize` implementation.
    Custom { message: String },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::UnsupportedKey { found } => {
                write!(f, "Unsupported map key {}, expected a scalar", found)
            }
            RecordError::Custom { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for RecordError {}

impl ser::Error for RecordError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        RecordError::Custom {
            message: msg.to_string(),
        }
    }
}

/// Converts any serializable value into a [`Value`].
///
/// # Errors
///
/// Returns an error if a map key is not a scalar, or if the type's
/// `Serialize` implementation reports one.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, RecordError> {
    value.serialize(ValueSerializer)
}

struct ValueSerializer;

impl Serializer for ValueSerializer {
    type Ok = Value;
    type Error = RecordError;

    type SerializeSeq = SeqBuilder;
    type SerializeTuple = SeqBuilder;
    type SerializeTupleStruct = SeqBuilder;
    type SerializeTupleVariant = VariantBuilder<SeqBuilder>;
    type SerializeMap = MapBuilder;
    type SerializeStruct = RecordBuilder;
    type SerializeStructVariant = VariantBuilder<RecordBuilder>;

    fn serialize_bool(self, v: bool) -> Result<Value, RecordError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, RecordError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, RecordError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, RecordError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, RecordError> {
        Ok(Value::Number(Number::from(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, RecordError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, RecordError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, RecordError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, RecordError> {
        Ok(Value::Number(Number::from(v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, RecordError> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, RecordError> {
        Ok(Value::from_f64(v))
    }

    fn serialize_char(self, v: char) -> Result<Value, RecordError> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, RecordError> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, RecordError> {
        Ok(Value::Sequence(
            v.iter().map(|b| Value::Number(Number::from(*b))).collect(),
        ))
    }

    fn serialize_none(self) -> Result<Value, RecordError> {
        Ok(Value::Null)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value, RecordError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, RecordError> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, RecordError> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, RecordError> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, RecordError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, RecordError> {
        Ok(wrap_variant(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqBuilder, RecordError> {
        Ok(SeqBuilder {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqBuilder, RecordError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqBuilder, RecordError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantBuilder<SeqBuilder>, RecordError> {
        Ok(VariantBuilder {
            variant,
            inner: SeqBuilder {
                items: Vec::with_capacity(len),
            },
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapBuilder, RecordError> {
        Ok(MapBuilder {
            entries: IndexMap::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<RecordBuilder, RecordError> {
        Ok(RecordBuilder {
            fields: Vec::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantBuilder<RecordBuilder>, RecordError> {
        Ok(VariantBuilder {
            variant,
            inner: RecordBuilder {
                fields: Vec::with_capacity(len),
            },
        })
    }
}

/// Data-carrying enum variants become a single-entry mapping keyed by the
/// variant name, matching serde's externally tagged representation.
fn wrap_variant(variant: &str, value: Value) -> Value {
    let mut entries = IndexMap::with_capacity(1);
    entries.insert(variant.to_string(), value);
    Value::Mapping(entries)
}

struct SeqBuilder {
    items: Vec<Value>,
}

impl ser::SerializeSeq for SeqBuilder {
    type Ok = Value;
    type Error = RecordError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RecordError> {
        self.items.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, RecordError> {
        Ok(Value::Sequence(self.items))
    }
}

impl ser::SerializeTuple for SeqBuilder {
    type Ok = Value;
    type Error = RecordError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RecordError> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, RecordError> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SeqBuilder {
    type Ok = Value;
    type Error = RecordError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RecordError> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, RecordError> {
        ser::SerializeSeq::end(self)
    }
}

struct RecordBuilder {
    fields: Vec<(String, Value)>,
}

impl ser::SerializeStruct for RecordBuilder {
    type Ok = Value;
    type Error = RecordError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), RecordError> {
        self.fields.push((key.to_string(), to_value(value)?));
        Ok(())
    }

    fn end(self) -> Result<Value, RecordError> {
        Ok(Value::Record(self.fields))
    }
}

struct MapBuilder {
    entries: IndexMap<String, Value>,
    pending_key: Option<String>,
}

impl ser::SerializeMap for MapBuilder {
    type Ok = Value;
    type Error = RecordError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), RecordError> {
        let key = match to_value(key)? {
            Value::String(s) => s,
            scalar @ (Value::Number(_) | Value::Bool(_) | Value::Null) => scalar.to_string(),
            other => {
                return Err(RecordError::UnsupportedKey {
                    found: other.to_string(),
                })
            }
        };
        self.pending_key = Some(key);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RecordError> {
        let key = self.pending_key.take().ok_or_else(|| RecordError::Custom {
            message: "serialize_value called before serialize_key".to_string(),
        })?;
        self.entries.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, RecordError> {
        Ok(Value::Mapping(self.entries))
    }
}

struct VariantBuilder<B> {
    variant: &'static str,
    inner: B,
}

impl ser::SerializeTupleVariant for VariantBuilder<SeqBuilder> {
    type Ok = Value;
    type Error = RecordError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RecordError> {
        ser::SerializeSeq::serialize_element(&mut self.inner, value)
    }

    fn end(self) -> Result<Value, RecordError> {
        let inner = ser::SerializeSeq::end(self.inner)?;
        Ok(wrap_variant(self.variant, inner))
    }
}

impl ser::SerializeStructVariant for VariantBuilder<RecordBuilder> {
    type Ok = Value;
    type Error = RecordError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), RecordError> {
        ser::SerializeStruct::serialize_field(&mut self.inner, key, value)
    }

    fn end(self) -> Result<Value, RecordError> {
        let inner = ser::SerializeStruct::end(self.inner)?;
        Ok(wrap_variant(self.variant, inner))
    }
}
