//! Decoding schemas from JSON values.
//!
//! This is the only place that inspects the shape of authored rules; past
//! this point everything is a typed [`RawRule`].

use crate::error::{Result, TransformError};
use crate::path::FieldPath;
use crate::rule::{CanonicalRule, Format, Pattern, RawRule, Schema};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Keys of the canonical rule record. Anything else is ignored.
const KNOWN_KEYS: &[&str] = &[
    "type",
    "required",
    "require",
    "values",
    "itemType",
    "rule",
    "format",
    "min",
    "max",
    "allowEmpty",
    "empty",
];

/// Parse a JSON object of `field → rule` into a [`Schema`].
pub fn parse_schema(input: &Value) -> Result<Schema> {
    schema_at(input, &FieldPath::root())
}

/// Parse a single rule located at `path`.
pub fn parse_rule(input: &Value, path: &FieldPath) -> Result<RawRule> {
    match input {
        Value::String(s) => match pattern_literal(s) {
            Some((source, flags)) => Ok(RawRule::Pattern(compile(source, flags, path)?)),
            None => Ok(RawRule::Scalar(s.clone())),
        },
        Value::Array(values) => Ok(RawRule::Enumeration(values.clone())),
        Value::Null => Ok(RawRule::Canonical(CanonicalRule::default())),
        Value::Object(map) => Ok(RawRule::Canonical(parse_canonical(map, path)?)),
        other => Err(TransformError::InvalidRule {
            path: path.clone(),
            reason: format!(
                "expected a type name, a list of values, a pattern or an object, got {}",
                kind_of(other)
            ),
        }),
    }
}

fn schema_at(input: &Value, path: &FieldPath) -> Result<Schema> {
    let map = input.as_object().ok_or_else(|| TransformError::InvalidSchema {
        path: path.clone(),
        found: kind_of(input),
    })?;

    map.iter()
        .map(|(name, rule)| Ok((name.as_str(), parse_rule(rule, &path.field(name))?)))
        .collect()
}

fn parse_canonical(map: &Map<String, Value>, path: &FieldPath) -> Result<CanonicalRule> {
    for key in map.keys().filter(|key| !KNOWN_KEYS.contains(&key.as_str())) {
        tracing::trace!(%path, key = key.as_str(), "ignoring unknown rule key");
    }

    let ty = string_key(map, "type", path)?;
    let item_type = string_key(map, "itemType", path)?;

    // `require` is the spelling older schemas used.
    let required = match bool_key(map, "required", path)? {
        Some(required) => required,
        None => bool_key(map, "require", path)?.unwrap_or(false),
    };

    let allow_empty = match bool_key(map, "allowEmpty", path)? {
        Some(allow_empty) => Some(allow_empty),
        None => bool_key(map, "empty", path)?,
    };

    let format = match present(map, "format") {
        None => None,
        Some(Value::String(s)) => Some(parse_format(s, path)?),
        Some(other) => return Err(wrong_type(path, "format", "a string", other)),
    };

    // With an `itemType`, `rule` describes the items. Items other than
    // `object` may carry a validation rule in place of a sub-schema, which
    // has no bearing on the type.
    let rule = match (present(map, "rule"), item_type.as_deref()) {
        (None, _) => None,
        (Some(rule), None) => Some(schema_at(rule, path)?),
        (Some(rule), Some("object")) => Some(schema_at(rule, &path.items())?),
        (Some(rule), Some(_)) => match schema_at(rule, &path.items()) {
            Ok(schema) => Some(schema),
            Err(err) => {
                tracing::trace!(%path, %err, "ignoring item-level rule");
                None
            }
        },
    };

    Ok(CanonicalRule {
        ty,
        required,
        values: present(map, "values").cloned(),
        item_type,
        rule,
        format,
        min: number_key(map, "min", path)?,
        max: number_key(map, "max", path)?,
        allow_empty,
    })
}

fn parse_format(s: &str, path: &FieldPath) -> Result<Format> {
    match pattern_literal(s) {
        Some((source, flags)) => Ok(Format::Pattern(compile(source, flags, path)?)),
        None => Ok(Format::Named(s.to_string())),
    }
}

/// Split a `/source/flags` literal. Only JavaScript regex flags are accepted
/// after the closing slash.
fn pattern_literal(s: &str) -> Option<(&str, &str)> {
    let rest = s.strip_prefix('/')?;
    let end = rest.rfind('/')?;
    let (source, flags) = (&rest[..end], &rest[end + 1..]);
    flags
        .chars()
        .all(|c| matches!(c, 'g' | 'i' | 'm' | 's' | 'u' | 'y'))
        .then_some((source, flags))
}

fn compile(source: &str, flags: &str, path: &FieldPath) -> Result<Pattern> {
    let inline: String = flags.chars().filter(|c| matches!(c, 'i' | 'm' | 's')).collect();
    let source = if inline.is_empty() {
        source.to_string()
    } else {
        format!("(?{inline}){source}")
    };
    Pattern::new(&source).map_err(|source| TransformError::InvalidPattern {
        path: path.clone(),
        source,
    })
}

/// A key's value, treating `null` as absent.
fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}

fn string_key(map: &Map<String, Value>, key: &str, path: &FieldPath) -> Result<Option<String>> {
    match present(map, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(wrong_type(path, key, "a string", other)),
    }
}

fn bool_key(map: &Map<String, Value>, key: &str, path: &FieldPath) -> Result<Option<bool>> {
    match present(map, key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(wrong_type(path, key, "a boolean", other)),
    }
}

fn number_key(map: &Map<String, Value>, key: &str, path: &FieldPath) -> Result<Option<f64>> {
    match present(map, key) {
        None => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(other) => Err(wrong_type(path, key, "a number", other)),
    }
}

fn wrong_type(path: &FieldPath, key: &str, expected: &str, found: &Value) -> TransformError {
    TransformError::InvalidRule {
        path: path.clone(),
        reason: format!("`{key}` must be {expected}, got {}", kind_of(found)),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        parse_schema(&value).map_err(serde::de::Error::custom)
    }
}
