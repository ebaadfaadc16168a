use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use theme_tokens_core::{Format, FormatOptions, InversionTable};
use tracing::{debug, warn};

pub const DEFAULT_CONFIG: &str = "theme-tokens.toml";

/// Where tokens come from, where derived files go, and how they are named.
///
/// ```toml
/// source = "tokens/dark-mode.json"
/// derived = "tokens/light-mode.json"
/// output_dir = "build/tokens"
/// formats = ["css", "scss", "ts"]
///
/// [options.varPrefix]
/// css = "--ds-"
/// styleLang = "$ds-"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    pub source: PathBuf,
    pub derived: PathBuf,
    pub output_dir: PathBuf,
    pub formats: Vec<Format>,
    /// JSON object of `<family>.<step>` pairs replacing the built-in table.
    pub inversion_table: Option<PathBuf>,
    pub warn_unmatched: bool,
    pub options: FormatOptions,
}
impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("tokens/dark-mode.json"),
            derived: PathBuf::from("tokens/light-mode.json"),
            output_dir: PathBuf::from("build/tokens"),
            formats: vec![Format::Css, Format::Scss, Format::Ts],
            inversion_table: None,
            warn_unmatched: false,
            options: FormatOptions::default(),
        }
    }
}
impl BuildConfig {
    /// Reads `path`, or returns the defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&data).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    pub fn inversion_table(&self) -> Result<InversionTable> {
        let Some(path) = &self.inversion_table else {
            return Ok(InversionTable::builtin());
        };
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read inversion table {}", path.display()))?;
        let table: InversionTable = serde_json::from_str(&data)
            .with_context(|| format!("invalid inversion table {}", path.display()))?;
        if table.is_empty() {
            warn!(path = %path.display(), "inversion table is empty, no color will be inverted");
        }
        Ok(table)
    }
}
