//! Command-line front end for `parameter-interface`.
//!
//! Reads rule schemas from JSON or TOML files, compiles them with the
//! built-in [`Transformer`](parameter_interface::Transformer) and prints or
//! writes the resulting interface declarations.

pub mod commands;
pub mod config;
pub mod render;

pub use commands::{Cli, Command};
pub use config::{Config, OutputConfig};
