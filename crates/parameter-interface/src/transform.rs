//! The transformation engine.
//!
//! ```text
//! Schema ─┬─ field ─> RawRule::normalize ─> registry.resolve ─> handler ─> "name?: expr;"
//!         └─ ...                                                   │
//!                                    object / array ──> Context ───┘ (re-enters for sub-schemas)
//! ```

use crate::error::{Result, TransformError};
use crate::input;
use crate::path::FieldPath;
use crate::registry::TypeRegistry;
use crate::rule::{CanonicalRule, RawRule, Schema};
use serde_json::Value;
use std::sync::{Arc, OnceLock};

/// Compiles schemas into interface bodies using one registry.
///
/// Cheap to clone; the registry is shared, never copied or modified.
#[derive(Debug, Clone)]
pub struct Transformer {
    registry: Arc<TypeRegistry>,
}

impl Transformer {
    pub fn new(registry: impl Into<Arc<TypeRegistry>>) -> Self {
        Self {
            registry: registry.into(),
        }
    }

    /// A transformer over the built-in types.
    pub fn builtin() -> Self {
        Self::new(TypeRegistry::builtin())
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Compile `schema` into a brace-delimited interface body.
    ///
    /// Same as [`transform_schema`](Self::transform_schema).
    pub fn transform(&self, schema: &Schema) -> Result<String> {
        self.transform_schema(schema)
    }

    /// Compile `schema` into `{\n<field lines>\n}`, one `name?: type;` line
    /// per field in schema order.
    ///
    /// Field names are written as given, without quoting. Names that are not
    /// TypeScript identifiers (`a-b`, or anything with a newline) produce a
    /// body that is not valid TypeScript.
    pub fn transform_schema(&self, schema: &Schema) -> Result<String> {
        tracing::debug!(fields = schema.len(), "transforming schema");
        self.schema_at(schema, &FieldPath::root())
    }

    /// Compile a single rule into its bare type expression.
    pub fn transform_rule(&self, rule: &RawRule) -> Result<String> {
        self.rule_at(rule, &FieldPath::root())
    }

    /// Decode a JSON document into a schema, then compile it.
    pub fn transform_value(&self, value: &Value) -> Result<String> {
        let schema = input::parse_schema(value)?;
        self.transform_schema(&schema)
    }

    fn schema_at(&self, schema: &Schema, parent: &FieldPath) -> Result<String> {
        let lines = schema
            .iter()
            .map(|(name, rule)| {
                let path = parent.field(name);
                let canonical = rule.normalize();
                let expression = self.expression(&canonical, &path)?;
                let marker = if canonical.required { "" } else { "?" };
                Ok(format!("{name}{marker}: {expression};"))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut body = String::from("{\n");
        for line in &lines {
            body.push_str(line);
            body.push('\n');
        }
        body.push('}');
        Ok(body)
    }

    fn rule_at(&self, rule: &RawRule, path: &FieldPath) -> Result<String> {
        self.expression(&rule.normalize(), path)
    }

    fn expression(&self, rule: &CanonicalRule, path: &FieldPath) -> Result<String> {
        let handler = self.registry.resolve(rule.type_name(), path)?;
        tracing::trace!(%path, ty = rule.type_name(), "dispatching rule");
        let cx = Context {
            transformer: self,
            path: path.clone(),
        };
        handler.expression(rule, &cx)
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Compile `schema` with the built-in types.
///
/// The built-in transformer is created on first use and shared afterwards.
pub fn transform(schema: &Schema) -> Result<String> {
    static BUILTIN: OnceLock<Transformer> = OnceLock::new();
    BUILTIN.get_or_init(Transformer::builtin).transform(schema)
}

/// What a handler sees of the transformer dispatching its rule.
pub struct Context<'a> {
    transformer: &'a Transformer,
    path: FieldPath,
}

impl<'a> Context<'a> {
    /// Path of the rule being rendered.
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn registry(&self) -> &'a TypeRegistry {
        self.transformer.registry()
    }

    /// Render a sub-schema whose fields live under the current rule.
    pub fn transform_schema(&self, schema: &Schema) -> Result<String> {
        self.transformer.schema_at(schema, &self.path)
    }

    /// Render the bare type of a rule at the current path.
    pub fn transform_rule(&self, rule: &RawRule) -> Result<String> {
        self.transformer.rule_at(rule, &self.path)
    }

    /// Context for the items of the array at the current path.
    pub fn items(&self) -> Context<'a> {
        Context {
            transformer: self.transformer,
            path: self.path.items(),
        }
    }

    /// Error for a rule at the current path with the wrong shape.
    pub fn invalid_rule(&self, reason: impl Into<String>) -> TransformError {
        TransformError::InvalidRule {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }
}
