//! Searchable records, entity kinds, type filters and ranked results.
//!
//! Records arrive from the upstream loader already flattened into the shapes
//! below. The search core only ever borrows them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A scheduled performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start_at: Option<String>,
    pub venue_name: String,
    pub primary_artist_name: Option<String>,
    pub description_short: Option<String>,
    pub date_display: String,
    pub time_display: String,
}

/// A performer or ensemble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: String,
    pub display_name: String,
    /// "person", "group" or "big band" upstream; not interpreted here.
    #[serde(rename = "type")]
    pub artist_type: Option<String>,
    pub primary_instrument: Option<String>,
    pub country_code: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub display_name: String,
    pub city_name: String,
    pub address: Option<String>,
    #[serde(rename = "jazz_frequency")]
    pub jazz_frequency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: String,
    pub city_slug: String,
    pub name: String,
    pub venue_count: u32,
}

/// The four collections a search runs over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub venues: Vec<Venue>,
    #[serde(default)]
    pub cities: Vec<City>,
}

impl SearchData {
    /// Total number of records across all kinds.
    pub fn total_records(&self) -> usize {
        self.events.len() + self.artists.len() + self.venues.len() + self.cities.len()
    }

    /// Number of records of one kind.
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Event => self.events.len(),
            EntityKind::Artist => self.artists.len(),
            EntityKind::Venue => self.venues.len(),
            EntityKind::City => self.cities.len(),
        }
    }
}

/// Record category. Declaration order is the enumeration order used for
/// scanning, grouping and tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Event,
    Artist,
    Venue,
    City,
}

impl EntityKind {
    /// All kinds in enumeration order.
    pub const ALL: [Self; 4] = [Self::Event, Self::Artist, Self::Venue, Self::City];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Artist => "artist",
            Self::Venue => "venue",
            Self::City => "city",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "event" => Ok(Self::Event),
            "artist" => Ok(Self::Artist),
            "venue" => Ok(Self::Venue),
            "city" => Ok(Self::City),
            _ => Err(ParseFilterError {
                value: s.to_string(),
            }),
        }
    }
}

/// Error returned when a filter or kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search filter '{value}' (expected all, event, artist, venue or city)")]
pub struct ParseFilterError {
    pub value: String,
}

/// Which kinds a search includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TypeFilter {
    #[default]
    All,
    Only(EntityKind),
}

impl TypeFilter {
    pub const fn includes(self, kind: EntityKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only as u8 == kind as u8,
        }
    }

    /// Parse a filter, falling back to [`TypeFilter::All`] on unknown input.
    ///
    /// An unknown value means the caller broke its contract, so it is logged
    /// rather than silently accepted.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|e: ParseFilterError| {
            tracing::warn!("{}, defaulting to 'all'", e);
            Self::All
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(kind) => kind.as_str(),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl From<EntityKind> for TypeFilter {
    fn from(kind: EntityKind) -> Self {
        Self::Only(kind)
    }
}

/// Borrowed reference to a matched record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordRef<'a> {
    Event(&'a Event),
    Artist(&'a Artist),
    Venue(&'a Venue),
    City(&'a City),
}

impl<'a> RecordRef<'a> {
    /// The primary display label of the record.
    pub fn title(self) -> &'a str {
        match self {
            Self::Event(e) => &e.title,
            Self::Artist(a) => &a.display_name,
            Self::Venue(v) => &v.display_name,
            Self::City(c) => &c.name,
        }
    }
}

/// One ranked hit. Identity is `(kind, id)`; ids are only unique per kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub id: &'a str,
    pub score: f64,
    /// Name of the weighted field that produced `score`.
    pub field: &'static str,
    pub data: RecordRef<'a>,
}

impl<'a> SearchResult<'a> {
    pub const fn key(&self) -> (EntityKind, &'a str) {
        (self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("all", TypeFilter::All)]
    #[case(" ALL ", TypeFilter::All)]
    #[case("event", TypeFilter::Only(EntityKind::Event))]
    #[case("Artist", TypeFilter::Only(EntityKind::Artist))]
    #[case("venue", TypeFilter::Only(EntityKind::Venue))]
    #[case("city", TypeFilter::Only(EntityKind::City))]
    fn test_parse_filter(#[case] input: &str, #[case] expected: TypeFilter) {
        check!(input.parse::<TypeFilter>() == Ok(expected));
    }

    #[test]
    fn test_parse_filter_rejects_unknown() {
        let err = "concerts".parse::<TypeFilter>().unwrap_err();
        check!(err.value == "concerts");
        check!(TypeFilter::parse_lenient("concerts") == TypeFilter::All);
    }

    #[test]
    fn test_filter_includes() {
        for kind in EntityKind::ALL {
            check!(TypeFilter::All.includes(kind));
        }
        let only = TypeFilter::Only(EntityKind::Venue);
        check!(only.includes(EntityKind::Venue));
        check!(!only.includes(EntityKind::Event));
        check!(!only.includes(EntityKind::City));
    }

    #[test]
    fn test_deserialize_upstream_shapes() {
        let json = r#"{
            "artists": [{
                "id": "a1", "displayName": "John Coltrane", "type": "person",
                "primaryInstrument": "saxophone", "countryCode": "US",
                "bio": null, "photoUrl": null
            }],
            "venues": [{
                "id": "v1", "displayName": "Blue Note", "cityName": "Taipei",
                "address": null, "jazz_frequency": "nightly"
            }],
            "cities": [{ "id": "c1", "citySlug": "tw-tpe", "name": "Taipei", "venueCount": 12 }]
        }"#;
        let data: SearchData = serde_json::from_str(json).unwrap();

        check!(data.events.is_empty());
        check!(data.artists[0].display_name == "John Coltrane");
        check!(data.artists[0].artist_type.as_deref() == Some("person"));
        check!(data.venues[0].jazz_frequency.as_deref() == Some("nightly"));
        check!(data.cities[0].venue_count == 12);
        check!(data.total_records() == 3);
        check!(data.count(EntityKind::City) == 1);
    }
}
