//! CLI commands.

pub mod generate;
pub mod transform;
pub mod types;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Compile parameter rule schemas into TypeScript interfaces
#[derive(Parser, Debug)]
#[command(name = "parameter-interface", version)]
pub struct Cli {
    /// More logging (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file, applied over the global and project config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile one schema and print it
    Transform(transform::TransformArgs),
    /// Compile every case of a suite into its own file
    Generate(generate::GenerateArgs),
    /// List the registered type names
    Types,
}

impl Cli {
    /// Resolve configuration for the current directory.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let root = std::env::current_dir().context("failed to read current directory")?;
        let config = Config::load(&root);
        match &self.config {
            Some(path) => Ok(config.merge(Config::load_file(path)?)),
            None => Ok(config),
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        let config = self.load_config()?;
        match self.command {
            Command::Transform(args) => transform::run(args, &config),
            Command::Generate(args) => generate::run(args, &config),
            Command::Types => types::run(),
        }
    }
}

/// Read a JSON or TOML document (by extension) from a file, or JSON from
/// stdin when `path` is `-`.
pub fn read_document(path: &Path) -> anyhow::Result<Value> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return serde_json::from_str(&buf).context("failed to parse JSON from stdin");
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&content).with_context(|| format!("failed to parse TOML {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn toml_documents_keep_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schema.toml");
        std::fs::write(
            &path,
            r#"
name = "string"
age = { type = "int", required = true }
level = [1, 2]
"#,
        )
        .unwrap();

        let value = read_document(&path).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["name", "age", "level"]);
    }

    #[test]
    fn missing_file() {
        let err = read_document(Path::new("/nonexistent/schema.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn cli_parses() {
        let cli = Cli::try_parse_from(["parameter-interface", "-vv", "transform", "schema.json", "--body-only"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Transform(ref args) if args.body_only));
    }
}
