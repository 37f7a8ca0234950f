//! Traits for type handlers.

use crate::error::Result;
use crate::rule::CanonicalRule;
use crate::transform::Context;

/// Produces the type expression for rules of one registered type.
///
/// Handlers are stateless: the same rule always yields the same expression.
/// Nested schemas are rendered through the [`Context`], which re-enters the
/// transformer that is dispatching the rule.
///
/// # Implementing Custom Handlers
///
/// ```
/// use parameter_interface::{CanonicalRule, Context, Result, TypeHandler, TypeRegistry};
///
/// struct Timestamp;
///
/// impl TypeHandler for Timestamp {
///     fn expression(&self, _rule: &CanonicalRule, _cx: &Context<'_>) -> Result<String> {
///         Ok("Date".to_string())
///     }
/// }
///
/// let registry = TypeRegistry::builtin().with_handler("timestamp", Timestamp);
/// assert!(registry.contains("timestamp"));
/// ```
pub trait TypeHandler: Send + Sync {
    fn expression(&self, rule: &CanonicalRule, cx: &Context<'_>) -> Result<String>;
}

impl<F> TypeHandler for F
where
    F: Fn(&CanonicalRule, &Context<'_>) -> Result<String> + Send + Sync,
{
    fn expression(&self, rule: &CanonicalRule, cx: &Context<'_>) -> Result<String> {
        self(rule, cx)
    }
}
