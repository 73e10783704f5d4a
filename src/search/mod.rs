//! In-memory fuzzy search over events, artists, venues and cities.
//!
//! This module provides tiered match scoring, per-kind weighted field
//! scanning, cross-kind ranking, and the grouped view the overlay renders.
//! Everything here is synchronous and side-effect free apart from logging.

// Module declarations
pub(crate) mod fields;
pub(crate) mod grouping;
pub(crate) mod rank;
pub(crate) mod scoring;

// Public re-exports (used via lib.rs)
pub use fields::{FieldWeight, ScanHit, Searchable, scan};
pub use grouping::{DisplayLimits, ResultGroup, SearchOutcome, SearchView};
pub use rank::search;
pub use scoring::{MatchTier, classify, match_score, normalize};
