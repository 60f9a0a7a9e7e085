//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopfront_loader::{DEFAULT_BASE_URL, DEFAULT_LIMIT};

/// Config file names searched from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["shopfront.toml", ".shopfront.toml", "shopfront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Where the catalog is loaded from.
    #[serde(default)]
    pub source: SourceConfig,

    /// How products are rendered.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Catalog source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// Catalog API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page size requested from the API.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Local JSON payload to read instead of the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            limit: default_limit(),
            file: None,
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Symbol printed before prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// `chrono` format string for creation timestamps.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            date_format: default_date_format(),
        }
    }
}

/// Generate the contents of a fresh `shopfront.toml`.
pub fn generate_default_config() -> String {
    format!(
        r#"# Shopfront configuration

[source]
# Catalog API base URL. Products are fetched from {{base_url}}/products.
base_url = "{base_url}"
limit = {limit}
# Read a local JSON payload instead of calling the API.
# file = "catalog.json"

[display]
currency_symbol = "$"
date_format = "%Y-%m-%d %H:%M"
"#,
        base_url = DEFAULT_BASE_URL,
        limit = DEFAULT_LIMIT,
    )
}
