//! Error types for query input validation.
//!
//! The traversal functions never return these; they log them and fall back
//! to the caller's default value. They are exposed for callers that want to
//! validate a policy or key path up front.

use std::fmt;

/// Errors describing why a query's inputs are unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The selection policy was not one of `first`, `last` or `all`.
    InvalidPolicy { found: String },
    /// A key was empty once surrounding whitespace was trimmed.
    BlankKey { position: usize },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::InvalidPolicy { found } => write!(
                f,
                "Invalid return value '{}', expected one of first, last, all",
                found
            ),
            QueryError::BlankKey { position } => {
                write!(f, "Blank key at position {}", position)
            }
        }
    }
}

impl std::error::Error for QueryError {}
