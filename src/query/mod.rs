//! Traversal engine for locating values in nested data.
//!
//! Two entry points share one value model and one result selection step:
//!
//! - [`path_walk`] descends an explicit key path, one key per level, and fans
//!   out across sequence elements.
//! - [`key_search`] visits every node and collects each value stored under
//!   the target key, at any depth. [`key_search_sorted`] does the same but
//!   orders the matches by their string form.
//!
//! Matches are gathered into a [`MatchSet`] and reduced with a [`Selection`]
//! policy (`first`, `last` or `all`). Whenever inputs are unusable or nothing
//! matches, the caller's default string is returned.
//!
//! # Examples
//!
//! ```
//! use keytrail::document::node::Value;
//! use keytrail::query::{key_search, path_walk};
//! use serde_json::json;
//!
//! let doc = Value::from(json!({"a": {"b": {"c": [{"d": "foo"}, {"d": "bar"}]}}}));
//!
//! let walked = path_walk(&doc, &["a", "b", "c", "d"], "none", "all");
//! let searched = key_search(&doc, "d", "none", "all");
//! assert_eq!(walked, searched);
//! ```

pub mod error;
pub mod introspect;
pub mod path;
pub mod policy;
pub mod search;
pub mod select;
pub mod walk;

pub use error::QueryError;
pub use introspect::{ChildKey, Shape};
pub use path::KeyPath;
pub use policy::Selection;
pub use search::{key_search, key_search_sorted, SearchOrder, Searcher};
pub use select::{select, MatchSet};
pub use walk::{path_walk, Walker, DEFAULT_MAX_DEPTH};
