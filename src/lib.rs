//! keytrail - find values in nested, dynamically-typed data.
//!
//! Documents are decoded (or Rust records converted) into a
//! [`Value`](document::Value) and queried in one of two ways: by walking an
//! explicit key path, or by searching for a key anywhere in the structure.
//! Either way the matches are reduced with a `first`/`last`/`all` policy and
//! a caller-supplied default stands in when nothing is found.

pub mod config;
pub mod document;
pub mod file;
pub mod query;

pub use document::record::to_value;
pub use document::Value;
pub use query::{key_search, key_search_sorted, path_walk};
