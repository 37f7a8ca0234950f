//! Registry of type handlers.
//!
//! A registry is built once, with consuming builder calls, and is read-only
//! from then on. Transformers hold it behind an `Arc`, so one registry can be
//! shared by any number of transformers and threads.

use crate::error::{Result, TransformError};
use crate::handlers::{ArrayHandler, BOOLEAN, EnumHandler, NUMBER, ObjectHandler, STRING};
use crate::path::FieldPath;
use crate::traits::TypeHandler;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Name reported when a rule declares no type at all.
const MISSING_TYPE: &str = "undefined";

/// Mapping from type name to handler, in registration order.
#[derive(Clone, Default)]
pub struct TypeRegistry {
    handlers: IndexMap<String, Arc<dyn TypeHandler>>,
}

impl TypeRegistry {
    /// A registry with no types at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in types.
    ///
    /// `int`/`integer`, `dateTime`/`datetime` and `boolean`/`bool` are
    /// aliases sharing one handler.
    pub fn builtin() -> Self {
        Self::empty()
            .with_handler("number", NUMBER)
            .with_alias("int", "number")
            .with_alias("integer", "number")
            .with_handler("string", STRING)
            .with_alias("id", "string")
            .with_alias("date", "string")
            .with_alias("dateTime", "string")
            .with_alias("datetime", "string")
            .with_handler("boolean", BOOLEAN)
            .with_alias("bool", "boolean")
            .with_handler("array", ArrayHandler)
            .with_handler("object", ObjectHandler)
            .with_handler("enum", EnumHandler)
            .with_alias("email", "string")
            .with_alias("password", "string")
            .with_alias("url", "string")
    }

    /// Register `handler` under `name`, replacing any previous handler (the
    /// name keeps its original position).
    pub fn with_handler(mut self, name: impl Into<String>, handler: impl TypeHandler + 'static) -> Self {
        self.handlers.insert(name.into(), Arc::new(handler));
        self
    }

    /// Register `alias` as another name for the handler of `target`.
    ///
    /// Does nothing if `target` is not registered; the alias then stays
    /// unknown and rules using it fail at dispatch.
    pub fn with_alias(mut self, alias: impl Into<String>, target: &str) -> Self {
        if let Some(handler) = self.handlers.get(target).cloned() {
            self.handlers.insert(alias.into(), handler);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn TypeHandler> {
        self.handlers.get(name).map(|handler| handler.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// All registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Look up the handler for `name`, failing with an error that lists every
    /// registered name.
    pub fn resolve(&self, name: Option<&str>, path: &FieldPath) -> Result<&dyn TypeHandler> {
        name.and_then(|name| self.get(name))
            .ok_or_else(|| self.unknown_type(name.unwrap_or(MISSING_TYPE), path))
    }

    fn unknown_type(&self, found: &str, path: &FieldPath) -> TransformError {
        TransformError::UnknownType {
            path: path.clone(),
            known: self.names().map(String::from).collect(),
            found: found.to_string(),
        }
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
