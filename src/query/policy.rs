//! Selection policy applied to a set of matches.

use super::error::QueryError;
use std::fmt;
use std::str::FromStr;

/// Which of the collected matches a query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The first match in match-set order
    First,
    /// The last match in match-set order
    Last,
    /// Every match; a single match is returned unwrapped
    All,
}

impl Selection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Selection::First => "first",
            Selection::Last => "last",
            Selection::All => "all",
        }
    }
}

impl FromStr for Selection {
    type Err = QueryError;

    /// Parses the exact lowercase names `first`, `last` and `all`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Selection::First),
            "last" => Ok(Selection::Last),
            "all" => Ok(Selection::All),
            other => Err(QueryError::InvalidPolicy {
                found: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
