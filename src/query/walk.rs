//! Guided descent along an explicit key path.

use super::introspect::Shape;
use super::path::KeyPath;
use super::policy::Selection;
use super::select::{select, MatchSet};
use crate::document::node::Value;
use tracing::{debug, trace, warn};

/// Nesting depth past which traversal gives up.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Walks a value one key per container level.
///
/// Mappings and records consume the next key. Sequences do not: every element
/// is walked with the same remaining path and the per-element results are
/// gathered into a [`MatchSet`] and reduced with the selection policy.
#[derive(Debug, Clone)]
pub struct Walker {
    max_depth: usize,
}

impl Default for Walker {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Walker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Walks `root` along `keys`, returning `default` when nothing is found
    /// or when `policy` is not `first`, `last` or `all`.
    pub fn walk<S: AsRef<str>>(
        &self,
        root: &Value,
        keys: &[S],
        default: &str,
        policy: &str,
    ) -> Value {
        let default = Value::String(default.to_string());
        let selection = match policy.parse::<Selection>() {
            Ok(selection) => selection,
            Err(err) => {
                debug!(%err, "walk input rejected, returning default");
                return default;
            }
        };
        let path: KeyPath = keys.iter().map(|key| key.as_ref()).collect();
        self.walk_path(root, &path, &default, selection)
    }

    /// Typed form of [`Walker::walk`].
    pub fn walk_path(
        &self,
        root: &Value,
        path: &KeyPath,
        default: &Value,
        selection: Selection,
    ) -> Value {
        if let Err(err) = path.validate() {
            debug!(%err, "walk input rejected, returning default");
            return default.clone();
        }
        self.descend(root, path.keys(), default, selection, 0)
    }

    fn descend(
        &self,
        value: &Value,
        keys: &[String],
        default: &Value,
        selection: Selection,
        depth: usize,
    ) -> Value {
        if value.is_empty() {
            return default.clone();
        }

        let Some((key, rest)) = keys.split_first() else {
            return value.clone();
        };

        if depth > self.max_depth {
            warn!(depth, max_depth = self.max_depth, "walk depth limit reached");
            return default.clone();
        }

        match value.shape() {
            Shape::Mapping | Shape::Record => match value.field(key) {
                Some(child) => self.descend(child, rest, default, selection, depth + 1),
                None => {
                    trace!(key = key.as_str(), depth, "key not present");
                    default.clone()
                }
            },
            Shape::Sequence => {
                let mut matches = MatchSet::new();
                for (_, element) in value.children() {
                    let found = self.descend(element, keys, default, selection, depth + 1);
                    // A result equal to the default is indistinguishable from a miss.
                    if found != *default {
                        matches.insert(found);
                    }
                }
                select(matches, default, selection)
            }
            Shape::Scalar => default.clone(),
        }
    }
}

/// Walks `value` along `keys` with the default depth limit.
///
/// # Examples
///
/// ```
/// use keytrail::document::node::Value;
/// use keytrail::query::path_walk;
/// use serde_json::json;
///
/// let doc = Value::from(json!({"a": {"b": [{"c": "x"}, {"c": "y"}]}}));
/// assert_eq!(path_walk(&doc, &["a", "b", "c"], "none", "last"), Value::from("y"));
/// assert_eq!(path_walk(&doc, &["a", "z"], "none", "all"), Value::from("none"));
/// ```
pub fn path_walk<S: AsRef<str>>(value: &Value, keys: &[S], default: &str, policy: &str) -> Value {
    Walker::default().walk(value, keys, default, policy)
}
