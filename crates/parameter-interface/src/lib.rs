//! Compile parameter validation rules into TypeScript interface bodies.
//!
//! `parameter-interface` takes the rule schemas used to validate request
//! parameters (`{ age: { type: "int", required: true }, tags: ["a", "b"] }`)
//! and emits the TypeScript shape those rules imply. It never looks at data;
//! it only describes types.
//!
//! # Architecture
//!
//! ```text
//! Input             Rules                     Registry            Output
//! ─────────     ──────────────────      ─────────────────     ──────────────
//! JSON value ─> Schema ─> RawRule ─┐    number / string   ┐
//!               (input)            ├─> TypeRegistry ──────┼─> "{\nage: number;\ntags?: 'a' | 'b';\n}"
//!                  CanonicalRule <─┘    enum / object     │
//!                  (normalize)          array ... ────────┘  (object/array recurse)
//! ```
//!
//! # Example
//!
//! ```
//! use parameter_interface::{CanonicalRule, Schema, transform};
//!
//! let schema = Schema::new()
//!     .field("name", CanonicalRule::of_type("string").required())
//!     .field("age", "int")
//!     .field("tags", CanonicalRule::array("string"));
//!
//! let body = transform(&schema).unwrap();
//! assert_eq!(body, "{\nname: string;\nage?: number;\ntags?: string[];\n}");
//! ```
//!
//! # Custom Types
//!
//! ```
//! use parameter_interface::{CanonicalRule, Context, Result, Schema, Transformer, TypeRegistry};
//!
//! fn timestamp(_: &CanonicalRule, _: &Context<'_>) -> Result<String> {
//!     Ok("Date".to_string())
//! }
//!
//! let registry = TypeRegistry::builtin().with_handler("timestamp", timestamp);
//! let transformer = Transformer::new(registry);
//!
//! let body = transformer
//!     .transform(&Schema::new().field("at", "timestamp"))
//!     .unwrap();
//! assert_eq!(body, "{\nat?: Date;\n}");
//! ```

pub mod error;
pub mod handlers;
pub mod input;
pub mod path;
pub mod registry;
pub mod rule;
pub mod traits;
pub mod transform;

pub use error::{ErrorKind, Result, TransformError};
pub use input::{parse_rule, parse_schema};
pub use path::FieldPath;
pub use registry::TypeRegistry;
pub use rule::{CanonicalRule, Format, Pattern, RawRule, Schema};
pub use traits::TypeHandler;
pub use transform::{Context, Transformer, transform};
