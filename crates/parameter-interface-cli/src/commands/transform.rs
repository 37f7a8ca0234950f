//! Transform command - compile a single schema.

use anyhow::Context as _;
use clap::Args;
use parameter_interface::Transformer;
use std::path::PathBuf;

use super::read_document;
use crate::config::{Config, OutputConfig};
use crate::render::render_interface;

/// Transform command arguments
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Schema file (JSON, or TOML by extension), use - for stdin
    pub input: PathBuf,

    /// Interface name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Add the `export` keyword
    #[arg(long)]
    pub export: bool,

    /// Print the raw body without the interface declaration
    #[arg(long)]
    pub body_only: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: TransformArgs, config: &Config) -> anyhow::Result<()> {
    let document = read_document(&args.input)?;
    let body = Transformer::builtin()
        .transform_value(&document)
        .with_context(|| format!("failed to transform {}", args.input.display()))?;

    let code = if args.body_only {
        format!("{body}\n")
    } else {
        let output = OutputConfig {
            export: args.export.then_some(true),
            ..Default::default()
        };
        let output = config.output.clone().merge(output);
        let name = args.name.as_deref().unwrap_or(output.interface_name());
        render_interface(name, &body, &output)
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, &code)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote interface");
        }
        None => print!("{code}"),
    }
    Ok(())
}
