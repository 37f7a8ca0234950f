//! Rule model.
//!
//! Authors write rules in four shapes ([`RawRule`]). Handlers only ever see
//! the canonical record ([`CanonicalRule`]); [`RawRule::normalize`] is the one
//! place where the shorthand forms are expanded.

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

/// A schema: field name → rule, in authoring order.
///
/// Field order is significant; the generated body lists fields in the same
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: IndexMap<String, RawRule>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style.
    pub fn field(mut self, name: impl Into<String>, rule: impl Into<RawRule>) -> Self {
        self.insert(name, rule);
        self
    }

    /// Add or replace a field. A replaced field keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, rule: impl Into<RawRule>) -> Option<RawRule> {
        self.fields.insert(name.into(), rule.into())
    }

    pub fn get(&self, name: &str) -> Option<&RawRule> {
        self.fields.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawRule)> {
        self.fields.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, R> FromIterator<(K, R)> for Schema
where
    K: Into<String>,
    R: Into<RawRule>,
{
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, rule)| (name.into(), rule.into()))
                .collect(),
        }
    }
}

/// A rule as written by a schema author.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRule {
    /// A bare type name: `"string"`.
    Scalar(String),
    /// A list of literals, shorthand for an `enum` rule: `[1, 2, 3]`.
    Enumeration(Vec<Value>),
    /// A regular expression, shorthand for a `string` rule with that format.
    Pattern(Pattern),
    /// The full record.
    Canonical(CanonicalRule),
}

impl RawRule {
    /// Expand shorthand forms into the canonical record.
    ///
    /// Never fails: an empty record stays empty and is rejected later, when
    /// its (missing) type is looked up in the registry.
    pub fn normalize(&self) -> Cow<'_, CanonicalRule> {
        match self {
            RawRule::Scalar(name) => Cow::Owned(CanonicalRule::of_type(name.clone())),
            RawRule::Enumeration(values) => {
                Cow::Owned(CanonicalRule::enumeration(values.iter().cloned()))
            }
            RawRule::Pattern(pattern) => Cow::Owned(
                CanonicalRule::of_type("string").with_format(Format::Pattern(pattern.clone())),
            ),
            RawRule::Canonical(rule) => Cow::Borrowed(rule),
        }
    }
}

impl From<&str> for RawRule {
    fn from(name: &str) -> Self {
        RawRule::Scalar(name.to_string())
    }
}

impl From<String> for RawRule {
    fn from(name: String) -> Self {
        RawRule::Scalar(name)
    }
}

impl From<Vec<Value>> for RawRule {
    fn from(values: Vec<Value>) -> Self {
        RawRule::Enumeration(values)
    }
}

impl From<Regex> for RawRule {
    fn from(regex: Regex) -> Self {
        RawRule::Pattern(Pattern(regex))
    }
}

impl From<Pattern> for RawRule {
    fn from(pattern: Pattern) -> Self {
        RawRule::Pattern(pattern)
    }
}

impl From<CanonicalRule> for RawRule {
    fn from(rule: CanonicalRule) -> Self {
        RawRule::Canonical(rule)
    }
}

/// The normalized rule every handler consumes.
///
/// `format`, `min`, `max` and `allow_empty` are kept so callers can inspect
/// them, but they never change the emitted type: the type language describes
/// shape, not bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalRule {
    /// Registered type name. `None` only for an empty record.
    pub ty: Option<String>,
    /// Whether the field must be present.
    pub required: bool,
    /// Enum literals. Kept as written so a malformed list is reported by the
    /// enum handler rather than lost while decoding.
    pub values: Option<Value>,
    /// Array item type. `None` means `any[]`.
    pub item_type: Option<String>,
    /// Sub-schema for `object`, and for `array` with item type `object`.
    pub rule: Option<Schema>,
    pub format: Option<Format>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub allow_empty: Option<bool>,
}

impl CanonicalRule {
    pub fn of_type(ty: impl Into<String>) -> Self {
        Self {
            ty: Some(ty.into()),
            ..Self::default()
        }
    }

    pub fn enumeration<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::of_type("enum").with_values(Value::Array(values.into_iter().map(Into::into).collect()))
    }

    pub fn object(rule: Schema) -> Self {
        Self::of_type("object").with_rule(rule)
    }

    /// An array of `item_type` items.
    pub fn array(item_type: impl Into<String>) -> Self {
        Self::of_type("array").with_item_type(item_type)
    }

    /// An array of objects shaped by `rule`.
    pub fn array_of(rule: Schema) -> Self {
        Self::array("object").with_rule(rule)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_values(mut self, values: Value) -> Self {
        self.values = Some(values);
        self
    }

    pub fn with_item_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    pub fn with_rule(mut self, rule: Schema) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = Some(allow_empty);
        self
    }

    pub fn type_name(&self) -> Option<&str> {
        self.ty.as_deref()
    }
}

/// Format constraint of a string-like rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Format {
    Pattern(Pattern),
    /// A named format such as `YYYY-MM-DD`.
    Named(String),
}

/// A compiled regular expression, compared by its source text.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self)
    }

    pub fn regex(&self) -> &Regex {
        &self.0
    }
}

impl Deref for Pattern {
    type Target = Regex;

    fn deref(&self) -> &Regex {
        &self.0
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_str() == other.0.as_str()
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.0.as_str())
    }
}
