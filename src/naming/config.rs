use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::NamingError;

/// File name probed when no configuration path is given
pub const DEFAULT_CONFIG_FILE: &str = "peakname-config.json";

/// Peak name strategy configuration.
///
/// ```json
/// { "enableExternalLookup": true, "useMemoryCache": true }
/// ```
///
/// `enableWikidata` is accepted as an alias of `enableExternalLookup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeakNameConfig {
    /// Translate names through the external lookup service
    #[serde(alias = "enableWikidata")]
    pub enable_external_lookup: bool,

    /// Memoise lookups for the lifetime of the resolver
    pub use_memory_cache: bool,

    /// Request timeout in seconds
    pub lookup_timeout_secs: u64,

    /// Language of the returned labels
    pub language: String,
}

impl Default for PeakNameConfig {
    fn default() -> Self {
        Self {
            enable_external_lookup: false,
            use_memory_cache: false,
            lookup_timeout_secs: 120,
            language: "fr".to_string(),
        }
    }
}

impl PeakNameConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, NamingError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, NamingError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Request timeout as a [`Duration`]
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }
}
