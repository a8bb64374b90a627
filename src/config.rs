//! TOML configuration parsing and validation.
//!
//! ```toml
//! [filters]
//! inverted_ranges = "pass_through"   # or "swap"
//! default_entity = "scene"
//!
//! [output]
//! pretty = true                      # omit to pretty-print only on a terminal
//! ```
//!
//! Every section is optional. When the config file does not exist the CLI
//! falls back to [`Config::minimal`].

use anyhow::{Context, Result};
use media_companion_core::{CompileOptions, EntityType, InvertedRangePolicy};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub filters: FiltersConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FiltersConfig {
    #[serde(default)]
    pub inverted_ranges: InvertedRangePolicy,
    /// Entity used by `mcx compile` when none is given on the command line.
    #[serde(default = "default_entity")]
    pub default_entity: String,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            inverted_ranges: InvertedRangePolicy::default(),
            default_entity: default_entity(),
        }
    }
}

fn default_entity() -> String {
    "scene".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: Option<bool>,
}

impl Config {
    /// Built-in defaults, used when no config file is present.
    pub fn minimal() -> Self {
        Self::default()
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            inverted_ranges: self.filters.inverted_ranges,
        }
    }

    /// Whether JSON output should be pretty-printed.
    pub fn pretty_output(&self) -> bool {
        self.output
            .pretty
            .unwrap_or_else(|| atty::is(atty::Stream::Stdout))
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate filters
    if EntityType::lookup(&config.filters.default_entity).is_none() {
        anyhow::bail!(
            "filters.default_entity must be one of: {} (got '{}')",
            EntityType::ALL.map(EntityType::as_str).join(", "),
            config.filters.default_entity
        );
    }

    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to [`Config::minimal`].
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        Ok(Config::minimal())
    }
}
