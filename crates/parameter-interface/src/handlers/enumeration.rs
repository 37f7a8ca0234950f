use crate::error::{Result, TransformError};
use crate::rule::CanonicalRule;
use crate::traits::TypeHandler;
use crate::transform::Context;
use serde_json::Value;

/// `enum`: a union of the rule's literal values, in order.
///
/// Strings are single-quoted; numbers and booleans are emitted bare.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumHandler;

impl TypeHandler for EnumHandler {
    fn expression(&self, rule: &CanonicalRule, cx: &Context<'_>) -> Result<String> {
        let values = rule
            .values
            .as_ref()
            .and_then(Value::as_array)
            .ok_or_else(|| malformed(cx, "needs an array of values"))?;
        if values.is_empty() {
            return Err(malformed(cx, "needs at least one value"));
        }

        let literals = values
            .iter()
            .map(|value| {
                literal(value).ok_or_else(|| {
                    let reason = format!("has a value that is not a number, string or boolean: {value}");
                    malformed(cx, &reason)
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(literals.join(" | "))
    }
}

fn malformed(cx: &Context<'_>, reason: &str) -> TransformError {
    TransformError::MalformedEnum {
        path: cx.path().clone(),
        reason: reason.to_string(),
    }
}

fn literal(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(quote(s)),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::transform::Transformer;
    use serde_json::json;

    fn render(rule: CanonicalRule) -> Result<String> {
        Transformer::builtin().transform_rule(&rule.into())
    }

    #[test]
    fn mixed_literals_keep_order() {
        let rule = CanonicalRule::enumeration([json!(1), json!("a"), json!(2)]);
        assert_eq!(render(rule).unwrap(), "1 | 'a' | 2");
    }

    #[test]
    fn booleans_and_floats_are_bare() {
        let rule = CanonicalRule::enumeration([json!(true), json!(1.5)]);
        assert_eq!(render(rule).unwrap(), "true | 1.5");
    }

    #[test]
    fn quotes_are_escaped() {
        let rule = CanonicalRule::enumeration(["it's", r"a\b"]);
        assert_eq!(render(rule).unwrap(), r"'it\'s' | 'a\\b'");
    }

    #[test]
    fn missing_values() {
        let err = render(CanonicalRule::of_type("enum")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedEnum);
    }

    #[test]
    fn values_not_a_list() {
        let rule = CanonicalRule::of_type("enum").with_values(json!("x"));
        assert_eq!(render(rule).unwrap_err().kind(), ErrorKind::MalformedEnum);
    }

    #[test]
    fn empty_values() {
        let rule = CanonicalRule::enumeration(Vec::<Value>::new());
        assert!(render(rule).unwrap_err().to_string().contains("at least one"));
    }

    #[test]
    fn nested_values_rejected() {
        let rule = CanonicalRule::enumeration([json!(1), json!({"a": 1})]);
        let err = render(rule).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedEnum);
        assert!(err.to_string().contains("not a number, string or boolean"));
    }
}
