//! Configuration for the CLI.
//!
//! Loads config from:
//! 1. Global: ~/.config/parameter-interface/config.toml
//! 2. Per-project: .parameter-interface/config.toml (overrides global)
//! 3. An explicit `--config` file (overrides both)
//!
//! Command-line flags override all of them.
//!
//! Example config.toml:
//! ```toml
//! [output]
//! interface_name = "Parameter"
//! export = true
//! indent = 2
//! extension = "d.ts"
//! out_dir = "types"
//! ```

use anyhow::Context as _;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_INTERFACE_NAME: &str = "Parameter";
const DEFAULT_INDENT: usize = 2;
const DEFAULT_EXTENSION: &str = "ts";

/// How generated interfaces are rendered and written.
///
/// Every field is optional so that a partial file only overrides what it
/// sets.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Name of the generated interface. Default: `Parameter`
    pub interface_name: Option<String>,
    /// Prefix declarations with `export`. Default: false
    pub export: Option<bool>,
    /// Spaces per nesting level. Default: 2
    pub indent: Option<usize>,
    /// Extension of generated files. Default: `ts`
    pub extension: Option<String>,
    /// Directory `generate` writes to.
    pub out_dir: Option<PathBuf>,
}

impl OutputConfig {
    pub fn interface_name(&self) -> &str {
        self.interface_name.as_deref().unwrap_or(DEFAULT_INTERFACE_NAME)
    }

    pub fn export(&self) -> bool {
        self.export.unwrap_or(false)
    }

    pub fn indent(&self) -> usize {
        self.indent.unwrap_or(DEFAULT_INDENT)
    }

    pub fn extension(&self) -> &str {
        self.extension
            .as_deref()
            .map(|ext| ext.trim_start_matches('.'))
            .unwrap_or(DEFAULT_EXTENSION)
    }

    /// Values set in `other` win.
    pub fn merge(self, other: Self) -> Self {
        Self {
            interface_name: other.interface_name.or(self.interface_name),
            export: other.export.or(self.export),
            indent: other.indent.or(self.indent),
            extension: other.extension.or(self.extension),
            out_dir: other.out_dir.or(self.out_dir),
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
}

impl Config {
    /// Load global config, then per-project config from `root`.
    ///
    /// Missing or unreadable files are skipped.
    pub fn load(root: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::load_optional(&global_path) {
                config = config.merge(global);
            }
        }

        let project_path = root.join(".parameter-interface").join("config.toml");
        if let Some(project) = Self::load_optional(&project_path) {
            config = config.merge(project);
        }

        config
    }

    /// Load a config file that must exist and parse.
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            output: self.output.merge(other.output),
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("parameter-interface").join("config.toml"))
    }

    fn load_optional(path: &Path) -> Option<Self> {
        if !path.is_file() {
            return None;
        }
        match Self::load_file(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %format!("{e:#}"), "ignoring config");
                None
            }
        }
    }
}
