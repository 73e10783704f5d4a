//! Loading the upstream dataset from disk.
//!
//! The site loader exports `{ events, artists, venues, cities }` as JSON with the
//! field names the records deserialize from. Localization and joins have
//! already happened by the time the file is written.

use crate::error::LoadError;
use crate::types::{EntityKind, SearchData};
use std::path::Path;

/// Read a JSON dataset file.
pub fn load_dataset(path: &Path) -> Result<SearchData, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        },
    })?;

    let data = parse_dataset(&text).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    tracing::info!(
        "Loaded {} records from {} ({} events, {} artists, {} venues, {} cities)",
        data.total_records(),
        path.display(),
        data.count(EntityKind::Event),
        data.count(EntityKind::Artist),
        data.count(EntityKind::Venue),
        data.count(EntityKind::City)
    );

    Ok(data)
}

/// Parse a JSON dataset document.
pub fn parse_dataset(text: &str) -> serde_json::Result<SearchData> {
    serde_json::from_str(text)
}
