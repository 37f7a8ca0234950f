//! Schema decoding.
//!
//! Schemas are usually authored as JSON (or any format that deserializes into
//! a [`serde_json::Value`]). The decoder maps each rule onto one of the
//! [`RawRule`](crate::rule::RawRule) shapes:
//!
//! | JSON | rule |
//! |---|---|
//! | `"string"` | type name |
//! | `[1, "a"]` | enum values |
//! | `"/^\\d+$/"` | pattern (a string wrapped in slashes) |
//! | `{ "type": ... }` | canonical record |

mod json;

pub use json::{parse_rule, parse_schema};
