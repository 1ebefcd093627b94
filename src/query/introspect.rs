//! Uniform view over the container kinds of a [`Value`].
//!
//! Mappings, sequences and records all hold children, but they name them
//! differently. The walker and the searcher only ever talk to values through
//! [`Value::shape`], [`Value::children`] and [`Value::field`], so neither has
//! to match on the concrete variant itself.

use crate::document::node::Value;

/// The structural kind of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Mapping,
    Sequence,
    Record,
    Scalar,
}

/// How a child is addressed within its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKey<'a> {
    /// A mapping key or record field name
    Name(&'a str),
    /// A sequence position
    Index(usize),
}

impl<'a> ChildKey<'a> {
    /// Returns the name for keyed children; sequence positions have none.
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            ChildKey::Name(name) => Some(name),
            ChildKey::Index(_) => None,
        }
    }
}

/// Iterator over the direct children of a value.
pub enum Children<'a> {
    Mapping(indexmap::map::Iter<'a, String, Value>),
    Sequence(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Record(std::slice::Iter<'a, (String, Value)>),
    Empty,
}

impl<'a> Iterator for Children<'a> {
    type Item = (ChildKey<'a>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Children::Mapping(iter) => iter
                .next()
                .map(|(key, value)| (ChildKey::Name(key.as_str()), value)),
            Children::Sequence(iter) => iter
                .next()
                .map(|(idx, value)| (ChildKey::Index(idx), value)),
            Children::Record(iter) => iter
                .next()
                .map(|(name, value)| (ChildKey::Name(name.as_str()), value)),
            Children::Empty => None,
        }
    }
}

impl Value {
    pub fn shape(&self) -> Shape {
        match self {
            Value::Mapping(_) => Shape::Mapping,
            Value::Sequence(_) => Shape::Sequence,
            Value::Record(_) => Shape::Record,
            Value::Null | Value::String(_) | Value::Number(_) | Value::Bool(_) => Shape::Scalar,
        }
    }

    /// Iterates direct children: mapping entries in insertion order, sequence
    /// elements in list order, record fields in declaration order. Scalars
    /// yield nothing.
    pub fn children(&self) -> Children<'_> {
        match self {
            Value::Mapping(entries) => Children::Mapping(entries.iter()),
            Value::Sequence(items) => Children::Sequence(items.iter().enumerate()),
            Value::Record(fields) => Children::Record(fields.iter()),
            _ => Children::Empty,
        }
    }

    /// Looks up a child by key (mappings) or field name (records).
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Mapping(entries) => entries.get(name),
            Value::Record(fields) => fields
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }
}
