//! Plain-text rendering of search views for the CLI and the MCP tool.

use crate::search::{SearchOutcome, SearchView};
use crate::session::route_for;
use crate::types::{EntityKind, RecordRef, SearchResult};
use std::fmt::Write as _;

/// Localized section heading for a kind. Unknown locales fall back to English.
pub fn section_label(kind: EntityKind, locale: &str) -> &'static str {
    match (kind, locale) {
        (EntityKind::Event, "zh") => "活動",
        (EntityKind::Event, "ja") => "イベント",
        (EntityKind::Event, _) => "EVENTS",
        (EntityKind::Artist, "zh") => "藝人",
        (EntityKind::Artist, "ja") => "アーティスト",
        (EntityKind::Artist, _) => "ARTISTS",
        (EntityKind::Venue, "zh") => "場地",
        (EntityKind::Venue, "ja") => "会場",
        (EntityKind::Venue, _) => "VENUES",
        (EntityKind::City, "zh") => "城市",
        (EntityKind::City, "ja") => "都市",
        (EntityKind::City, _) => "CITIES",
    }
}

/// Secondary line shown under a result's title.
///
/// Events show their date badge, venue, headliner and start time. Artists show
/// their type when they are not a single person (otherwise the instrument) and
/// their country.
pub fn subtitle(record: RecordRef<'_>) -> Option<String> {
    match record {
        RecordRef::Event(e) => join_parts([
            date_badge(&e.date_display),
            e.venue_name.as_str(),
            e.primary_artist_name.as_deref().unwrap_or_default(),
            e.time_display.as_str(),
        ]),
        RecordRef::Artist(a) => {
            let label = match a.artist_type.as_deref() {
                Some(kind) if !kind.is_empty() && kind != "person" => kind,
                _ => a.primary_instrument.as_deref().unwrap_or_default(),
            };
            join_parts([label, a.country_code.as_deref().unwrap_or_default()])
        }
        RecordRef::Venue(v) => Some(v.city_name.clone()),
        RecordRef::City(c) => Some(format!("{} venues", c.venue_count)),
    }
}

/// Short date for an event: the text before the first comma, or the first
/// six characters when that is empty.
fn date_badge(date_display: &str) -> &str {
    match date_display.split(',').next().map(str::trim) {
        Some(head) if !head.is_empty() => head,
        _ => date_display
            .char_indices()
            .nth(6)
            .map_or(date_display, |(end, _)| &date_display[..end])
            .trim(),
    }
}

fn join_parts<const N: usize>(parts: [&str; N]) -> Option<String> {
    let parts: Vec<&str> = parts.into_iter().filter(|p| !p.is_empty()).collect();
    (!parts.is_empty()).then(|| parts.join(" · "))
}

/// Render the view for `query`, with distinct copy for an empty query and a
/// query with no matches.
pub fn render_view(query: &str, view: &SearchView<'_>, locale: &str) -> String {
    match SearchOutcome::classify(query, view) {
        SearchOutcome::NotSearched => {
            return "Type to search events, artists, venues and cities.\n".to_string();
        }
        SearchOutcome::NoMatches => {
            return format!(
                "No results found for '{}'.\n\n\
                 Search tips:\n\
                 • Try a shorter or more general term\n\
                 • Search by artist, venue, city or instrument\n",
                query.trim()
            );
        }
        SearchOutcome::Results => {}
    }

    let mut output = format!("Search results for '{}':\n", query.trim());

    match &view.groups {
        Some(groups) => {
            for group in groups {
                let _ = write!(output, "\n{}\n", section_label(group.kind, locale));
                for (i, result) in group.results.iter().enumerate() {
                    write_result(&mut output, group.offset + i, result, locale);
                }
            }
        }
        None => {
            output.push('\n');
            for (i, result) in view.flat.iter().enumerate() {
                write_result(&mut output, i, result, locale);
            }
        }
    }

    output
}

fn write_result(output: &mut String, index: usize, result: &SearchResult<'_>, locale: &str) {
    let _ = writeln!(
        output,
        "{}. {} [{}] - score: {:.1} ({}) → {}",
        index + 1,
        result.data.title(),
        result.kind,
        result.score,
        result.field,
        route_for(result.kind, result.id, locale)
    );
    if let Some(sub) = subtitle(result.data) {
        let _ = writeln!(output, "   {}", sub);
    }
}
