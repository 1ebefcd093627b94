//! Unguided search for a key anywhere in a value.

use super::path::KeyPath;
use super::policy::Selection;
use super::select::{select, MatchSet};
use super::walk::DEFAULT_MAX_DEPTH;
use crate::document::node::Value;
use tracing::{debug, trace, warn};

/// Order in which matches are presented to the selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOrder {
    /// Depth-first encounter order
    #[default]
    Encounter,
    /// Sorted by each match's string form, independent of traversal order
    Lexicographic,
}

/// Collects every value stored under a given key or field name, at any depth.
#[derive(Debug, Clone)]
pub struct Searcher {
    max_depth: usize,
    order: SearchOrder,
}

impl Default for Searcher {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            order: SearchOrder::default(),
        }
    }
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_order(mut self, order: SearchOrder) -> Self {
        self.order = order;
        self
    }

    /// Searches `root` for `key`, returning `default` when nothing is found
    /// or when `policy` is not `first`, `last` or `all`.
    pub fn search(&self, root: &Value, key: &str, default: &str, policy: &str) -> Value {
        let default = Value::String(default.to_string());
        match policy.parse::<Selection>() {
            Ok(selection) => self.search_key(root, key, &default, selection),
            Err(err) => {
                debug!(%err, "search input rejected, returning default");
                default
            }
        }
    }

    /// Typed form of [`Searcher::search`].
    pub fn search_key(
        &self,
        root: &Value,
        key: &str,
        default: &Value,
        selection: Selection,
    ) -> Value {
        if root.is_empty() {
            debug!("search root is empty, returning default");
            return default.clone();
        }
        if let Err(err) = KeyPath::new([key]).validate() {
            debug!(%err, "search input rejected, returning default");
            return default.clone();
        }

        let mut matches = self.collect(root, key, 0);
        debug!(key, matches = matches.len(), "search complete");
        if self.order == SearchOrder::Lexicographic {
            matches.sort_by_display();
        }
        select(matches, default, selection)
    }

    /// Gathers matches below `node`.
    ///
    /// A keyed child whose name equals `key` is recorded before its own
    /// subtree is searched, so an ancestor match precedes its descendants.
    /// Sequence elements have no name and are only descended into.
    pub fn collect(&self, node: &Value, key: &str, depth: usize) -> MatchSet {
        let mut matches = MatchSet::new();
        if depth > self.max_depth {
            warn!(depth, max_depth = self.max_depth, "search depth limit reached");
            return matches;
        }

        for (child_key, child) in node.children() {
            if child_key.name() == Some(key) {
                trace!(key, depth, "key matched");
                matches.insert(child.clone());
            }
            matches.merge(self.collect(child, key, depth + 1));
        }
        matches
    }
}

/// Searches `value` for `key` in encounter order.
///
/// # Examples
///
/// ```
/// use keytrail::document::node::Value;
/// use keytrail::query::key_search;
/// use serde_json::json;
///
/// let doc = Value::from(json!({"a": "1", "b": {"a": "2"}}));
/// assert_eq!(key_search(&doc, "a", "none", "all"), Value::from(json!(["1", "2"])));
/// ```
pub fn key_search(value: &Value, key: &str, default: &str, policy: &str) -> Value {
    Searcher::default().search(value, key, default, policy)
}

/// Searches `value` for `key`, ordering matches by their string form before
/// the policy is applied. `first` and `last` then mean lexicographically
/// smallest and largest rather than first and last encountered.
pub fn key_search_sorted(value: &Value, key: &str, default: &str, policy: &str) -> Value {
    Searcher::default()
        .with_order(SearchOrder::Lexicographic)
        .search(value, key, default, policy)
}
