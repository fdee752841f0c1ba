//! Decode error types.

use std::fmt;

/// One step of the location of a decode failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// What went wrong at the failing location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeErrorKind {
    #[error("expected a JSON object")]
    NotAnObject,

    #[error("missing required field")]
    MissingField,

    #[error("invalid type, expected {expected}")]
    InvalidType { expected: &'static str },

    #[error("unknown value '{value}', expected one of {expected}")]
    UnknownVariant { value: String, expected: String },
}

/// Failure to decode a model from JSON.
///
/// Only produced for required fields and enumeration values; optional-field
/// failures never reach the caller. The path runs from the outermost record
/// down to the offending key, e.g. `intents[1].intent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    pub path: Vec<PathSegment>,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn new(kind: DecodeErrorKind) -> Self {
        Self {
            path: Vec::new(),
            kind,
        }
    }

    pub fn not_an_object() -> Self {
        Self::new(DecodeErrorKind::NotAnObject)
    }

    pub fn missing(key: &str) -> Self {
        Self::new(DecodeErrorKind::MissingField).at_key(key)
    }

    pub fn invalid_type(key: &str, expected: &'static str) -> Self {
        Self::new(DecodeErrorKind::InvalidType { expected }).at_key(key)
    }

    pub fn unknown_variant(key: &str, value: impl Into<String>, expected: &[&str]) -> Self {
        Self::new(DecodeErrorKind::UnknownVariant {
            value: value.into(),
            expected: expected.join(", "),
        })
        .at_key(key)
    }

    /// Prefix the path with an enclosing object key.
    pub fn at_key(mut self, key: &str) -> Self {
        self.path.insert(0, PathSegment::Key(key.to_string()));
        self
    }

    /// Prefix the path with an enclosing array index.
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.insert(0, PathSegment::Index(index));
        self
    }

    /// The innermost object key, i.e. the field that failed.
    pub fn key(&self) -> Option<&str> {
        self.path.iter().rev().find_map(|seg| match seg {
            PathSegment::Key(k) => Some(k.as_str()),
            PathSegment::Index(_) => None,
        })
    }

    /// Dotted path rendering, `""` for the root.
    pub fn path_string(&self) -> String {
        let mut out = String::new();
        for seg in &self.path {
            match seg {
                PathSegment::Key(k) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(k);
                }
                PathSegment::Index(i) => {
                    out.push_str(&format!("[{}]", i));
                }
            }
        }
        out
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.path_string(), self.kind)
        }
    }
}

impl std::error::Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_path() {
        let err = DecodeError::not_an_object();
        assert_eq!(err.to_string(), "expected a JSON object");
        assert!(err.key().is_none());
    }

    #[test]
    fn test_display_with_key() {
        let err = DecodeError::missing("workspace_id");
        assert_eq!(err.to_string(), "workspace_id: missing required field");
        assert_eq!(err.key(), Some("workspace_id"));
    }

    #[test]
    fn test_nested_path_rendering() {
        let err = DecodeError::invalid_type("intent", "string")
            .at_index(1)
            .at_key("intents");
        assert_eq!(err.path_string(), "intents[1].intent");
        assert_eq!(err.key(), Some("intent"));
        assert_eq!(
            err.to_string(),
            "intents[1].intent: invalid type, expected string"
        );
    }

    #[test]
    fn test_unknown_variant_lists_expected() {
        let err = DecodeError::unknown_variant("status", "bogus", &["available", "training"]);
        assert_eq!(
            err.kind,
            DecodeErrorKind::UnknownVariant {
                value: "bogus".to_string(),
                expected: "available, training".to_string(),
            }
        );
    }
}
