use crate::error::{Result, TransformError};
use crate::rule::{CanonicalRule, RawRule};
use crate::traits::TypeHandler;
use crate::transform::Context;

/// Item type whose shape is given by the rule's sub-schema.
const OBJECT: &str = "object";

/// `object`: the nested body of the rule's sub-schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectHandler;

impl TypeHandler for ObjectHandler {
    fn expression(&self, rule: &CanonicalRule, cx: &Context<'_>) -> Result<String> {
        let schema = rule.rule.as_ref().ok_or_else(|| TransformError::MalformedObject {
            path: cx.path().clone(),
        })?;
        cx.transform_schema(schema)
    }
}

/// `array`: the item type followed by `[]`, or `any[]` without an item type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayHandler;

impl TypeHandler for ArrayHandler {
    fn expression(&self, rule: &CanonicalRule, cx: &Context<'_>) -> Result<String> {
        let Some(item_type) = rule.item_type.as_deref() else {
            return Ok("any[]".to_string());
        };

        // The item type never reaches the outer dispatch, so check it here.
        let items = cx.items();
        cx.registry().resolve(Some(item_type), items.path())?;

        // Items get the sub-schema too, so aliases of `object` and custom
        // handlers can use it.
        let item = match rule.rule.as_ref() {
            Some(schema) if item_type == OBJECT => items.transform_schema(schema)?,
            Some(schema) => {
                let item_rule = CanonicalRule::of_type(item_type).with_rule(schema.clone());
                items.transform_rule(&item_rule.into())?
            }
            None if item_type == OBJECT => {
                return Err(TransformError::MalformedArray {
                    path: cx.path().clone(),
                });
            }
            None => items.transform_rule(&RawRule::from(item_type))?,
        };

        if is_union(&item) {
            Ok(format!("({item})[]"))
        } else {
            Ok(format!("{item}[]"))
        }
    }
}

/// Whether `expr` has a `|` outside any brackets or string literal.
fn is_union(expr: &str) -> bool {
    let mut depth = 0usize;
    let mut quoted = false;
    let mut escaped = false;
    for c in expr.chars() {
        if quoted {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '\'' => quoted = false,
                _ => {}
            }
            continue;
        }
        match c {
            '\'' => quoted = true,
            '{' | '(' | '[' | '<' => depth += 1,
            '}' | ')' | ']' | '>' => depth = depth.saturating_sub(1),
            '|' if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::registry::TypeRegistry;
    use crate::rule::Schema;
    use crate::transform::Transformer;

    fn render(rule: CanonicalRule) -> Result<String> {
        Transformer::builtin().transform_rule(&rule.into())
    }

    #[test]
    fn array_without_item_type() {
        assert_eq!(render(CanonicalRule::of_type("array")).unwrap(), "any[]");
    }

    #[test]
    fn array_of_scalars() {
        assert_eq!(render(CanonicalRule::array("int")).unwrap(), "number[]");
        assert_eq!(render(CanonicalRule::array("url")).unwrap(), "string[]");
    }

    #[test]
    fn array_of_objects() {
        let rule = CanonicalRule::array_of(Schema::new().field("x", "string"));
        assert_eq!(render(rule).unwrap(), "{\nx?: string;\n}[]");
    }

    #[test]
    fn array_of_objects_without_rule() {
        let err = render(CanonicalRule::array("object")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedArray);
    }

    #[test]
    fn array_of_unknown_items() {
        let err = render(CanonicalRule::array("bogus")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownType);
        assert_eq!(err.path().as_str(), "[]");
    }

    #[test]
    fn array_of_arrays() {
        assert_eq!(render(CanonicalRule::array("array")).unwrap(), "any[][]");
    }

    #[test]
    fn union_items_are_parenthesized() {
        fn either(_: &CanonicalRule, _: &Context<'_>) -> Result<String> {
            Ok("'a' | 'b'".to_string())
        }
        let registry = TypeRegistry::builtin().with_handler("either", either);
        let transformer = Transformer::new(registry);
        let out = transformer
            .transform_rule(&CanonicalRule::array("either").into())
            .unwrap();
        assert_eq!(out, "('a' | 'b')[]");
    }

    #[test]
    fn aliased_object_items_get_sub_schema() {
        let transformer = Transformer::new(TypeRegistry::builtin().with_alias("record", "object"));
        let rule = CanonicalRule::array("record").with_rule(Schema::new().field("x", "int"));
        let out = transformer.transform_rule(&rule.into()).unwrap();
        assert_eq!(out, "{\nx?: number;\n}[]");
    }

    #[test]
    fn object_without_rule() {
        let err = render(CanonicalRule::of_type("object")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedObject);
    }

    #[test]
    fn union_detection() {
        assert!(is_union("1 | 2"));
        assert!(!is_union("{\nf?: 1 | 2;\n}"));
        assert!(!is_union("'a|b'"));
        assert!(!is_union(r"'it\'s|'"));
        assert!(!is_union("string"));
    }
}
