//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `jazz_data`: a small mixed dataset covering all four kinds
//! - `dataset_file`: the same dataset written to a temporary JSON file
//!
//! Records are built with the helper constructors below so each test only
//! spells out the fields it scores against.

use jazznode_search::{Artist, City, Event, SearchData, Venue};
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)] // Used across different integration test crates
pub fn event(id: &str, title: &str, artist: Option<&str>, venue: &str) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        start_at: Some("2025-09-12T20:00:00+08:00".to_string()),
        venue_name: venue.to_string(),
        primary_artist_name: artist.map(String::from),
        description_short: None,
        date_display: "Fri 12 Sep, 2025".to_string(),
        time_display: "20:00".to_string(),
    }
}

#[allow(dead_code)]
pub fn artist(id: &str, name: &str, instrument: Option<&str>, bio: Option<&str>) -> Artist {
    Artist {
        id: id.to_string(),
        display_name: name.to_string(),
        artist_type: Some("person".to_string()),
        primary_instrument: instrument.map(String::from),
        country_code: None,
        bio: bio.map(String::from),
        photo_url: None,
    }
}

#[allow(dead_code)]
pub fn venue(id: &str, name: &str, city: &str) -> Venue {
    Venue {
        id: id.to_string(),
        display_name: name.to_string(),
        city_name: city.to_string(),
        address: None,
        jazz_frequency: None,
    }
}

#[allow(dead_code)]
pub fn city(id: &str, name: &str, slug: &str, venues: u32) -> City {
    City {
        id: id.to_string(),
        city_slug: slug.to_string(),
        name: name.to_string(),
        venue_count: venues,
    }
}

/// A mixed dataset with overlapping vocabulary across kinds.
#[fixture]
pub fn jazz_data() -> SearchData {
    jazznode_search::tracing::init(false);
    SearchData {
        events: vec![
            event("e1", "Blue Note Jam", Some("Lin Trio"), "Blue Note Taipei"),
            event("e2", "Sunday Swing", Some("John Coltrane Tribute"), "Riverside"),
        ],
        artists: vec![
            artist("a1", "John Coltrane", Some("saxophone"), Some("Spiritual jazz pioneer")),
            artist("a2", "Lin Trio", Some("piano"), None),
            artist("a3", "Keiko Sax", Some("alto"), None),
        ],
        venues: vec![
            venue("v1", "Blue Note Taipei", "Taipei"),
            venue("v2", "Riverside", "Taipei"),
        ],
        cities: vec![city("c1", "Taipei", "tw-tpe", 2), city("c2", "Tokyo", "jp-tyo", 0)],
    }
}

/// A dataset serialized to a temporary JSON file.
///
/// Keep the value alive for the duration of the test; the directory is removed on drop.
#[allow(dead_code)]
pub struct DatasetFile {
    _dir: TempDir,
    path: PathBuf,
}

#[allow(dead_code)]
impl DatasetFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[fixture]
#[allow(dead_code)]
pub fn dataset_file(jazz_data: SearchData) -> DatasetFile {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("search.json");
    let json = serde_json::to_string(&jazz_data).expect("Failed to serialize dataset");
    std::fs::write(&path, json).expect("Failed to write dataset");
    DatasetFile { _dir: dir, path }
}
