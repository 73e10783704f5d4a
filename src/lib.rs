pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod search;
pub mod server;
pub mod session;
pub mod tools;
pub mod tracing;
pub mod types;

pub use search::{DisplayLimits, SearchOutcome, SearchView, match_score, search};
pub use session::{SearchSession, route_for};
pub use types::{
    Artist, City, EntityKind, Event, ParseFilterError, RecordRef, SearchData, SearchResult,
    TypeFilter, Venue,
};
