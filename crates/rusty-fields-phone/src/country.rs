//! Country calling-code table

use std::cmp::Reverse;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CountryTableError;

/// Dataset compiled into the crate
static BUNDLED_COUNTRIES: &str = include_str!("../data/countries.json");

/// One dialing region
///
/// `min_length` / `max_length` describe the expected national number length.
/// They are carried along for display and are not enforced by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryCode {
    /// Calling code digits, e.g. "1" or "44"
    pub code: String,

    /// Lowercase ISO 3166 alpha-2, e.g. "us"
    pub name_code: String,

    /// Display name, e.g. "United States"
    pub name: String,

    #[serde(default)]
    pub min_length: u32,

    #[serde(default)]
    pub max_length: u32,
}

impl CountryCode {
    pub fn code_length(&self) -> usize {
        self.code.len()
    }

    /// A usable code is a non-empty run of ASCII digits
    fn has_valid_code(&self) -> bool {
        !self.code.is_empty() && self.code.bytes().all(|b| b.is_ascii_digit())
    }
}

/// Read-only list of country codes, ordered longest code first
///
/// Build it once and pass it by reference to whatever needs it.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    entries: Vec<CountryCode>,
}

impl CountryTable {
    /// Build a table from records
    ///
    /// Entries whose code is empty or not all digits are dropped. The rest are
    /// sorted by descending code length; the sort is stable so dataset order
    /// decides between codes of equal length.
    pub fn new(entries: Vec<CountryCode>) -> Self {
        let mut entries: Vec<CountryCode> = entries
            .into_iter()
            .filter(|entry| {
                let keep = entry.has_valid_code();
                if !keep {
                    tracing::warn!(
                        code = %entry.code,
                        name = %entry.name,
                        "Dropping country entry with invalid calling code"
                    );
                }
                keep
            })
            .collect();

        entries.sort_by_key(|entry| Reverse(entry.code_length()));
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON array of country records
    pub fn from_json(json: &str) -> Result<Self, CountryTableError> {
        let entries: Vec<CountryCode> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// Read and parse a JSON country file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CountryTableError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CountryTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_json(&content)?;
        tracing::debug!(path = ?path, countries = table.len(), "Loaded country table");
        Ok(table)
    }

    /// The dataset shipped with the crate
    ///
    /// Never fails: a broken dataset yields an empty table, so phone checks
    /// report "not valid" instead of bringing the caller down.
    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED_COUNTRIES) {
            Ok(table) => {
                tracing::debug!(countries = table.len(), "Loaded bundled country table");
                table
            }
            Err(e) => {
                tracing::warn!("Bundled country table unavailable, using empty table: {}", e);
                Self::empty()
            }
        }
    }

    /// Load an external dataset, falling back to an empty table on any error
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        Self::from_path(path).unwrap_or_else(|e| {
            tracing::warn!("{}, using empty table", e);
            Self::empty()
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in match order (longest code first)
    pub fn iter(&self) -> impl Iterator<Item = &CountryCode> {
        self.entries.iter()
    }

    /// All regions sharing a calling code ("1" gives both US and Canada)
    pub fn find_by_code<'t, 'c>(&'t self, code: &'c str) -> impl Iterator<Item = &'t CountryCode> + 'c
    where
        't: 'c,
    {
        self.entries.iter().filter(move |entry| entry.code == code)
    }

    /// Look up a region by its two letter name code, ignoring case
    pub fn find_by_name_code(&self, name_code: &str) -> Option<&CountryCode> {
        self.entries
            .iter()
            .find(|entry| entry.name_code.eq_ignore_ascii_case(name_code))
    }

    /// First entry, in match order, whose code starts `digits`
    pub fn longest_prefix(&self, digits: &str) -> Option<&CountryCode> {
        self.entries
            .iter()
            .find(|entry| digits.starts_with(entry.code.as_str()))
    }
}

impl FromIterator<CountryCode> for CountryTable {
    fn from_iter<I: IntoIterator<Item = CountryCode>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
