//! Built-in type handlers.
//!
//! Each handler turns a canonical rule of its type into a TypeScript type
//! expression. All handlers implement [`TypeHandler`](crate::traits::TypeHandler)
//! for uniform dispatch through the registry.

mod collection;
mod enumeration;

pub use collection::{ArrayHandler, ObjectHandler};
pub use enumeration::EnumHandler;

use crate::error::Result;
use crate::rule::CanonicalRule;
use crate::traits::TypeHandler;
use crate::transform::Context;

/// `number`, `int`, `integer`.
pub const NUMBER: Primitive = Primitive::new("number");
/// `string` and the string-like formats (`id`, `date`, `email`, ...).
pub const STRING: Primitive = Primitive::new("string");
/// `boolean`, `bool`.
pub const BOOLEAN: Primitive = Primitive::new("boolean");

/// A type that always maps to the same keyword, whatever its constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Primitive {
    keyword: &'static str,
}

impl Primitive {
    pub const fn new(keyword: &'static str) -> Self {
        Self { keyword }
    }

    pub fn keyword(&self) -> &'static str {
        self.keyword
    }
}

impl TypeHandler for Primitive {
    fn expression(&self, _rule: &CanonicalRule, _cx: &Context<'_>) -> Result<String> {
        Ok(self.keyword.to_string())
    }
}
