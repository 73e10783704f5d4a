//! Cross-kind aggregation and ranking.

use super::fields::{Searchable, scan};
use super::scoring::normalize;
use crate::types::{EntityKind, SearchData, SearchResult, TypeFilter};
use std::time::Instant;

/// Search all included kinds and return one list ranked by descending score.
///
/// An empty (or whitespace-only) query returns no results. Ties keep scan
/// order: events, artists, venues, cities, and input order within a kind.
/// The output is never truncated.
pub fn search<'a>(query: &str, data: &'a SearchData, filter: TypeFilter) -> Vec<SearchResult<'a>> {
    let query = normalize(query);
    if query.is_empty() {
        return vec![];
    }

    let start = Instant::now();
    let mut results = Vec::new();

    for kind in EntityKind::ALL {
        if !filter.includes(kind) {
            continue;
        }
        match kind {
            EntityKind::Event => collect(&query, &data.events, &mut results),
            EntityKind::Artist => collect(&query, &data.artists, &mut results),
            EntityKind::Venue => collect(&query, &data.venues, &mut results),
            EntityKind::City => collect(&query, &data.cities, &mut results),
        }
    }

    // Stable sort keeps scan order among equal scores.
    results.sort_by(|a, b| b.score.total_cmp(&a.score));

    tracing::debug!(
        "Search '{}' (filter: {}) matched {} of {} records in {:?}",
        query,
        filter,
        results.len(),
        data.total_records(),
        start.elapsed()
    );

    results
}

fn collect<'a, T: Searchable>(query: &str, records: &'a [T], out: &mut Vec<SearchResult<'a>>) {
    out.extend(scan(query, records).into_iter().map(|hit| SearchResult {
        kind: T::KIND,
        id: hit.record.id(),
        score: hit.score,
        field: hit.field,
        data: hit.record.as_record(),
    }));
}
