// File: src/config.rs
// Purpose: Configuration parsing from rusty-fields.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use rusty_fields_phone::{CountryTable, MIN_NATIONAL_DIGITS};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "rusty-fields.toml";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub phone: PhoneConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Phone parsing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneConfig {
    /// Alternate country JSON file; the bundled table is used when unset
    #[serde(default)]
    pub country_table: Option<PathBuf>,

    /// Shortest national number accepted after the country code
    #[serde(default = "default_min_national_digits")]
    pub min_national_digits: usize,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_false")]
    pub json: bool,

    /// One of error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default values
fn default_min_national_digits() -> usize {
    MIN_NATIONAL_DIGITS
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_false() -> bool {
    false
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            country_table: None,
            min_national_digits: default_min_national_digits(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            log_level: default_log_level(),
        }
    }
}

impl PhoneConfig {
    /// Load the configured country table, fail-soft
    ///
    /// A relative `country_table` is resolved against `base_dir` (the config
    /// file's directory).
    pub fn load_countries(&self, base_dir: &Path) -> CountryTable {
        match &self.country_table {
            Some(path) if path.is_relative() => CountryTable::load_or_empty(base_dir.join(path)),
            Some(path) => CountryTable::load_or_empty(path),
            None => CountryTable::bundled(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }
}
