// File: src/context.rs
// Purpose: State shared by all commands (country table, output mode)

use std::path::Path;

use rusty_fields_phone::{CountryTable, PhoneParser};

use crate::config::Config;

/// Loaded once in `main` and lent to every command
pub struct Context {
    pub countries: CountryTable,
    pub min_national_digits: usize,
    pub json: bool,
}

impl Context {
    /// Build from config; `json_flag` forces JSON output on top of the config
    pub fn from_config(config: &Config, config_path: &Path, json_flag: bool) -> Self {
        let base_dir = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let countries = config.phone.load_countries(base_dir);
        tracing::info!(countries = countries.len(), "Country table ready");

        Self {
            countries,
            min_national_digits: config.phone.min_national_digits,
            json: json_flag || config.output.json,
        }
    }

    pub fn parser(&self) -> PhoneParser<'_> {
        PhoneParser::new(&self.countries).with_min_national_digits(self.min_national_digits)
    }
}

#[cfg(test)]
impl Context {
    /// Bundled table, default floor, text output
    pub fn for_tests() -> Self {
        Self::from_config(&Config::default(), Path::new("rusty-fields.toml"), false)
    }
}
