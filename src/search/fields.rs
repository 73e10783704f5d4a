//! Per-kind weighted field tables and the record scanner.
//!
//! A record's score is the best weighted field score, not the sum, so one
//! strong match on a high-signal field beats several weak matches on long
//! free-text fields.

use super::scoring::score_normalized;
use crate::types::{Artist, City, EntityKind, Event, RecordRef, Venue};

/// A matchable field and its importance multiplier.
pub struct FieldWeight<T: 'static> {
    pub name: &'static str,
    pub weight: f64,
    get: fn(&T) -> Option<&str>,
}

impl<T: 'static> FieldWeight<T> {
    const fn new(name: &'static str, weight: f64, get: fn(&T) -> Option<&str>) -> Self {
        Self { name, weight, get }
    }

    pub fn value<'a>(&self, record: &'a T) -> Option<&'a str> {
        (self.get)(record)
    }
}

/// A record kind the scanner knows how to score.
pub trait Searchable: Sized + 'static {
    const KIND: EntityKind;
    /// Weighted fields, in tie-break order.
    const FIELDS: &'static [FieldWeight<Self>];

    fn id(&self) -> &str;
    fn as_record(&self) -> RecordRef<'_>;
}

impl Searchable for Event {
    const KIND: EntityKind = EntityKind::Event;
    const FIELDS: &'static [FieldWeight<Self>] = &[
        FieldWeight::new("title", 1.5, |e| Some(e.title.as_str())),
        FieldWeight::new("primary_artist_name", 1.2, |e| {
            e.primary_artist_name.as_deref()
        }),
        FieldWeight::new("venue_name", 1.0, |e| Some(e.venue_name.as_str())),
        FieldWeight::new("description_short", 0.5, |e| e.description_short.as_deref()),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn as_record(&self) -> RecordRef<'_> {
        RecordRef::Event(self)
    }
}

impl Searchable for Artist {
    const KIND: EntityKind = EntityKind::Artist;
    const FIELDS: &'static [FieldWeight<Self>] = &[
        FieldWeight::new("displayName", 1.5, |a| Some(a.display_name.as_str())),
        FieldWeight::new("primaryInstrument", 0.8, |a| a.primary_instrument.as_deref()),
        FieldWeight::new("bio", 0.4, |a| a.bio.as_deref()),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn as_record(&self) -> RecordRef<'_> {
        RecordRef::Artist(self)
    }
}

impl Searchable for Venue {
    const KIND: EntityKind = EntityKind::Venue;
    const FIELDS: &'static [FieldWeight<Self>] = &[
        FieldWeight::new("displayName", 1.5, |v| Some(v.display_name.as_str())),
        FieldWeight::new("cityName", 1.0, |v| Some(v.city_name.as_str())),
        FieldWeight::new("address", 0.6, |v| v.address.as_deref()),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn as_record(&self) -> RecordRef<'_> {
        RecordRef::Venue(self)
    }
}

impl Searchable for City {
    const KIND: EntityKind = EntityKind::City;
    const FIELDS: &'static [FieldWeight<Self>] = &[
        FieldWeight::new("name", 1.5, |c| Some(c.name.as_str())),
        FieldWeight::new("citySlug", 1.0, |c| Some(c.city_slug.as_str())),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn as_record(&self) -> RecordRef<'_> {
        RecordRef::City(self)
    }
}

/// A record with a positive score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanHit<'a, T> {
    pub record: &'a T,
    pub score: f64,
    /// Field that produced the best score.
    pub field: &'static str,
}

/// Best weighted score for one record, with the field that produced it.
///
/// Earlier fields win ties. Returns `None` when nothing matches.
pub(crate) fn score_record<T: Searchable>(query: &str, record: &T) -> Option<(f64, &'static str)> {
    let mut best: Option<(f64, &'static str)> = None;
    for field in T::FIELDS {
        let score = f64::from(score_normalized(query, field.value(record))) * field.weight;
        if score > best.map_or(0.0, |(s, _)| s) {
            best = Some((score, field.name));
        }
    }
    best
}

/// Score every record against an already-normalized query.
///
/// Zero-score records are dropped; input order is preserved.
pub fn scan<'a, T: Searchable>(query: &str, records: &'a [T]) -> Vec<ScanHit<'a, T>> {
    records
        .iter()
        .filter_map(|record| {
            score_record(query, record).map(|(score, field)| ScanHit {
                record,
                score,
                field,
            })
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[test]
    fn test_event_title_exact() {
        let events = [event("e1", "Blue Note Jam")];
        let hits = scan("blue note jam", &events);
        check!(hits.len() == 1);
        check!(hits[0].score == 150.0);
        check!(hits[0].field == "title");
    }

    #[test]
    fn test_artist_instrument_prefix() {
        let mut a = artist("a1", "John Coltrane");
        a.primary_instrument = Some("saxophone".to_string());
        let hits = scan("sax", std::slice::from_ref(&a));
        check!(hits.len() == 1);
        check!(hits[0].score == 64.0);
        check!(hits[0].field == "primaryInstrument");
    }

    #[test]
    fn test_city_slug_substring() {
        let cities = [city("c1", "Taipei", "tw-tpe")];
        let hits = scan("tpe", &cities);
        check!(hits.len() == 1);
        check!(hits[0].score == 60.0);
        check!(hits[0].field == "citySlug");
    }

    #[test]
    fn test_zero_scores_dropped() {
        let venues = [
            venue("v1", "Blue Note", "Taipei"),
            venue("v2", "Village Vanguard", "New York"),
        ];
        let hits = scan("vanguard", &venues);
        check!(hits.len() == 1);
        check!(hits[0].record.id == "v2");
    }

    #[test]
    fn test_max_not_sum() {
        // Weak subsequence matches on two fields vs one substring match.
        let mut weak = venue("v1", "Xax", "Xbx");
        weak.address = Some("xcx".to_string());
        let strong = venue("v2", "Other", "The Jazz Place");

        let (weak_score, _) = score_record("xx", &weak).unwrap();
        let (strong_score, _) = score_record("jazz", &strong).unwrap();
        check!(weak_score == 45.0);
        check!(strong_score == 60.0);
        check!(strong_score > weak_score);
    }

    #[rstest]
    #[case("displayName", 1.5)]
    #[case("primaryInstrument", 0.8)]
    #[case("bio", 0.4)]
    fn test_artist_weights(#[case] name: &str, #[case] weight: f64) {
        let field = Artist::FIELDS.iter().find(|f| f.name == name).unwrap();
        check!(field.weight == weight);
    }

    #[test]
    fn test_earlier_field_wins_ties() {
        // Title prefix (80 * 1.5) and artist exact (100 * 1.2) tie at 120.
        let mut e = event("e1", "Sunset Session");
        e.primary_artist_name = Some("Sunset".to_string());
        let (score, field) = score_record("sunset", &e).unwrap();
        check!(score == 120.0);
        check!(field == "title");
    }

    #[test]
    fn test_scan_preserves_input_order() {
        let artists = [
            artist("a1", "Bill Evans"),
            artist("a2", "Gil Evans"),
            artist("a3", "Evans Trio"),
        ];
        let ids: Vec<_> = scan("evans", &artists)
            .iter()
            .map(|h| h.record.id.as_str())
            .collect();
        check!(ids == vec!["a1", "a2", "a3"]);
    }
}
