//! Match collection and result selection.

use super::policy::Selection;
use crate::document::node::Value;
use indexmap::IndexSet;

/// An ordered, duplicate-free collection of matched values.
///
/// Values keep the order in which they were first inserted. Inserting a
/// value equal to one already present is a no-op.
#[derive(Debug, Clone, Default)]
pub struct MatchSet {
    values: IndexSet<Value>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, returning false if an equal value was already present.
    pub fn insert(&mut self, value: Value) -> bool {
        self.values.insert(value)
    }

    /// Appends the values of `other` that are not already present, keeping
    /// `other`'s order.
    pub fn merge(&mut self, other: MatchSet) {
        self.values.extend(other.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reorders the values by their string form.
    pub fn sort_by_display(&mut self) {
        self.values.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.values.into_iter().collect()
    }
}

impl FromIterator<Value> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Reduces a match set to a single result.
///
/// An empty set yields `default`. `All` returns a lone match as-is and
/// several matches as a sequence, never a one-element sequence.
pub fn select(matches: MatchSet, default: &Value, selection: Selection) -> Value {
    if matches.is_empty() {
        return default.clone();
    }

    let mut values = matches.values;
    match selection {
        Selection::First => values
            .into_iter()
            .next()
            .unwrap_or_else(|| default.clone()),
        Selection::Last => values.pop().unwrap_or_else(|| default.clone()),
        Selection::All => {
            if values.len() == 1 {
                values.pop().unwrap_or_else(|| default.clone())
            } else {
                Value::Sequence(values.into_iter().collect())
            }
        }
    }
}
