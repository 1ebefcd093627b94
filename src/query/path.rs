//! Key paths for guided descent.

use super::error::QueryError;

/// An ordered list of keys, one per container level.
///
/// An empty path is valid and addresses the root itself. A path containing
/// a key that is blank after trimming is invalid as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPath {
    keys: Vec<String>,
}

impl KeyPath {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits `a.b.c` style text into a path. Empty input yields the empty
    /// path; empty segments are kept so validation can reject them.
    pub fn from_dotted(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self::new(text.split('.'))
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Checks that every key is non-blank after trimming.
    pub fn validate(&self) -> Result<(), QueryError> {
        match self.keys.iter().position(|key| key.trim().is_empty()) {
            Some(position) => Err(QueryError::BlankKey { position }),
            None => Ok(()),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_is_valid() {
        let path = KeyPath::default();
        assert!(path.is_empty());
        assert_eq!(path.validate(), Ok(()));
    }

    #[test]
    fn test_blank_key_is_rejected() {
        let path = KeyPath::new(["a", "  ", "c"]);
        assert_eq!(path.validate(), Err(QueryError::BlankKey { position: 1 }));
    }

    #[test]
    fn test_keys_are_not_trimmed() {
        let path = KeyPath::new([" a "]);
        assert_eq!(path.validate(), Ok(()));
        assert_eq!(path.keys(), &[" a ".to_string()]);
    }

    #[test]
    fn test_from_dotted() {
        assert_eq!(KeyPath::from_dotted("a.b.c").len(), 3);
        assert!(KeyPath::from_dotted("").is_empty());
        assert!(KeyPath::from_dotted("a..c").validate().is_err());
    }
}
