//! Generate command - write one interface file per suite case.
//!
//! A suite is an object of `case name → schema`:
//!
//! ```json
//! {
//!   "require": { "int": { "type": "int", "required": true } },
//!   "enum": { "enum": [1, 2, 3] }
//! }
//! ```
//!
//! Each case becomes `<out-dir>/<case>.<extension>`. Every case is compiled
//! before anything is written, so a bad case leaves the output untouched.

use anyhow::{Context as _, bail};
use clap::Args;
use parameter_interface::Transformer;
use std::path::{Path, PathBuf};

use super::read_document;
use crate::config::{Config, OutputConfig};
use crate::render::render_interface;

/// Generate command arguments
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Suite file (JSON, or TOML by extension), use - for stdin
    pub suite: PathBuf,

    /// Output directory (defaults to `output.out_dir` from config)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Interface name used in every file
    #[arg(short, long)]
    pub name: Option<String>,

    /// File extension
    #[arg(long)]
    pub extension: Option<String>,

    /// Add the `export` keyword
    #[arg(long)]
    pub export: bool,
}

pub fn run(args: GenerateArgs, config: &Config) -> anyhow::Result<()> {
    let output = config.output.clone().merge(OutputConfig {
        interface_name: args.name,
        export: args.export.then_some(true),
        extension: args.extension,
        out_dir: args.out_dir,
        ..Default::default()
    });
    let Some(out_dir) = output.out_dir.clone() else {
        bail!("no output directory: pass --out-dir or set output.out_dir in config");
    };

    let suite = read_document(&args.suite)?;
    let Some(cases) = suite.as_object() else {
        bail!("{} must be an object of case name to schema", args.suite.display());
    };

    let transformer = Transformer::builtin();
    let mut files = Vec::with_capacity(cases.len());
    for (case, schema) in cases {
        check_case_name(case)?;
        let body = transformer
            .transform_value(schema)
            .with_context(|| format!("failed to transform case `{case}`"))?;
        let code = render_interface(output.interface_name(), &body, &output);
        files.push((out_dir.join(format!("{case}.{}", output.extension())), code));
    }

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    for (path, code) in &files {
        write_file(path, code)?;
    }
    tracing::info!(cases = files.len(), out_dir = %out_dir.display(), "generated interfaces");
    Ok(())
}

/// Case names become file names, so they must not escape the output directory.
fn check_case_name(case: &str) -> anyhow::Result<()> {
    if case.is_empty() || case == "." || case == ".." || case.contains(['/', '\\']) {
        bail!("invalid case name `{case}`: must be a plain file name");
    }
    Ok(())
}

fn write_file(path: &Path, code: &str) -> anyhow::Result<()> {
    std::fs::write(path, code).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote interface");
    Ok(())
}
