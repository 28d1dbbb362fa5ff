//! Country table loading errors

use std::path::PathBuf;

/// Failure while loading a country-code dataset
///
/// Only surfaced by the fallible constructors (`from_json`, `from_path`).
/// `CountryTable::bundled` and `CountryTable::load_or_empty` log it and fall
/// back to an empty table instead.
#[derive(Debug, thiserror::Error)]
pub enum CountryTableError {
    #[error("failed to read country table {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed country table: {0}")]
    Parse(#[from] serde_json::Error),
}
