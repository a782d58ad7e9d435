//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every invocation can live in a
//! config file:
//!
//! ```toml
//! # chromasm.toml
//! [conversion]
//! peak_name_config = "/etc/chromasm/peakname-config.json"
//! pretty = true
//! lookup_timeout_secs = 30
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration structure for chromasm.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Conversion-specific settings.
    #[serde(default)]
    pub conversion: ConversionConfig,
}

/// Configuration for the convert and resolve-name commands.
#[derive(Debug, Default, Deserialize)]
pub struct ConversionConfig {
    /// Peak name configuration file (JSON).
    pub peak_name_config: Option<PathBuf>,

    /// Pretty-print output documents.
    pub pretty: Option<bool>,

    /// Overrides the lookup timeout of the peak name configuration.
    pub lookup_timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
