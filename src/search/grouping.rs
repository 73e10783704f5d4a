//! Display grouping for ranked results.
//!
//! With no type filter, results are partitioned by kind and each group is
//! capped. The flattened list is the one keyboard navigation indexes into.

use crate::types::{EntityKind, SearchResult, TypeFilter};
use serde::{Deserialize, Serialize};

/// Result caps applied when building a [`SearchView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayLimits {
    /// Maximum results per kind in the grouped view.
    pub per_group: usize,
    /// Maximum results when a single kind is selected.
    pub flat: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            per_group: 4,
            flat: 20,
        }
    }
}

/// The capped results of one kind, in ranked order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultGroup<'a> {
    pub kind: EntityKind,
    pub results: Vec<SearchResult<'a>>,
    /// Flat index of the first result in this group.
    pub offset: usize,
}

/// Derived view over one search, recomputed per query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchView<'a> {
    /// Non-empty groups in kind order, or `None` when a filter is active.
    pub groups: Option<Vec<ResultGroup<'a>>>,
    /// Navigable list: concatenated groups, or the truncated ranked list.
    pub flat: Vec<SearchResult<'a>>,
}

impl<'a> SearchView<'a> {
    pub fn build(results: &[SearchResult<'a>], filter: TypeFilter, limits: DisplayLimits) -> Self {
        match filter {
            TypeFilter::All => Self::grouped(results, limits.per_group),
            TypeFilter::Only(_) => Self {
                groups: None,
                flat: results.iter().take(limits.flat).copied().collect(),
            },
        }
    }

    fn grouped(results: &[SearchResult<'a>], per_group: usize) -> Self {
        let mut groups = Vec::new();
        let mut flat = Vec::new();

        for kind in EntityKind::ALL {
            let capped: Vec<_> = results
                .iter()
                .filter(|r| r.kind == kind)
                .take(per_group)
                .copied()
                .collect();
            if capped.is_empty() {
                continue;
            }
            let offset = flat.len();
            flat.extend_from_slice(&capped);
            groups.push(ResultGroup {
                kind,
                results: capped,
                offset,
            });
        }

        Self {
            groups: Some(groups),
            flat,
        }
    }

    pub fn len(&self) -> usize {
        self.flat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SearchResult<'a>> {
        self.flat.get(index)
    }

    pub fn group(&self, kind: EntityKind) -> Option<&ResultGroup<'a>> {
        self.groups.as_ref()?.iter().find(|g| g.kind == kind)
    }
}

/// What the UI should show for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query is empty; nothing has been searched yet.
    NotSearched,
    /// A real query that produced nothing.
    NoMatches,
    Results,
}

impl SearchOutcome {
    /// Decided from the query text itself, never from the result count alone.
    pub fn classify(query: &str, view: &SearchView<'_>) -> Self {
        if query.trim().is_empty() {
            Self::NotSearched
        } else if view.is_empty() {
            Self::NoMatches
        } else {
            Self::Results
        }
    }
}
