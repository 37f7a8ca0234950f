//! Error types for schema decoding and transformation.

use crate::path::FieldPath;

/// Result type for transformer operations.
pub type Result<T, E = TransformError> = std::result::Result<T, E>;

/// Category of a [`TransformError`], for callers that only care about the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidSchema,
    InvalidRule,
    InvalidPattern,
    UnknownType,
    MalformedEnum,
    MalformedObject,
    MalformedArray,
}

/// Errors raised while decoding or transforming a schema.
///
/// Every variant carries the dotted path of the rule that caused it. The first
/// error aborts the whole transformation; no partial body is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// A schema (top level or nested) is not a mapping of field rules.
    #[error("schema at {path} must be an object mapping field names to rules, got {found}")]
    InvalidSchema { path: FieldPath, found: &'static str },

    /// A rule value, or one of its keys, has the wrong shape.
    #[error("invalid rule at {path}: {reason}")]
    InvalidRule { path: FieldPath, reason: String },

    /// A pattern shorthand does not compile as a regular expression.
    #[error("invalid pattern at {path}: {source}")]
    InvalidPattern {
        path: FieldPath,
        #[source]
        source: regex::Error,
    },

    /// A rule type (or array item type) is not in the registry.
    #[error(
        "rule type must be one of {}, but the following type was passed: {found} (at {path})",
        .known.join(", ")
    )]
    UnknownType {
        path: FieldPath,
        known: Vec<String>,
        found: String,
    },

    /// An enum rule without a usable list of values.
    #[error("enum rule at {path} {reason}")]
    MalformedEnum { path: FieldPath, reason: String },

    /// An object rule without a sub-schema.
    #[error("object rule at {path} needs a `rule` sub-schema")]
    MalformedObject { path: FieldPath },

    /// An array of objects without a sub-schema.
    #[error("array rule at {path} has itemType `object` but no `rule` sub-schema")]
    MalformedArray { path: FieldPath },
}

impl TransformError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSchema { .. } => ErrorKind::InvalidSchema,
            Self::InvalidRule { .. } => ErrorKind::InvalidRule,
            Self::InvalidPattern { .. } => ErrorKind::InvalidPattern,
            Self::UnknownType { .. } => ErrorKind::UnknownType,
            Self::MalformedEnum { .. } => ErrorKind::MalformedEnum,
            Self::MalformedObject { .. } => ErrorKind::MalformedObject,
            Self::MalformedArray { .. } => ErrorKind::MalformedArray,
        }
    }

    /// Path of the offending rule.
    pub fn path(&self) -> &FieldPath {
        match self {
            Self::InvalidSchema { path, .. }
            | Self::InvalidRule { path, .. }
            | Self::InvalidPattern { path, .. }
            | Self::UnknownType { path, .. }
            | Self::MalformedEnum { path, .. }
            | Self::MalformedObject { path }
            | Self::MalformedArray { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_lists_known_names() {
        let err = TransformError::UnknownType {
            path: FieldPath::root().field("f"),
            known: vec!["number".into(), "string".into()],
            found: "bogus".into(),
        };
        assert_eq!(
            err.to_string(),
            "rule type must be one of number, string, but the following type was passed: bogus (at f)"
        );
        assert_eq!(err.kind(), ErrorKind::UnknownType);
    }

    #[test]
    fn root_path_is_named() {
        let err = TransformError::InvalidSchema {
            path: FieldPath::root(),
            found: "array",
        };
        assert!(err.to_string().contains("<root>"));
        assert!(err.path().is_root());
    }
}
