//! Search handler for the MCP `search` tool.

use crate::format::render_view;
use crate::search::{SearchView, search};
use crate::server::SearchState;
use crate::types::TypeFilter;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Free-text query, matched against titles, names, instruments and places
    pub query: String,
    /// Restrict results to one kind: "event", "artist", "venue" or "city" (default: all)
    #[serde(default)]
    pub filter: Option<String>,
    /// Locale for headings and result links, e.g. "en", "zh", "ja"
    #[serde(default)]
    pub locale: Option<String>,
}

/// Run a search and render the grouped or filtered view as text.
pub fn handle_search(state: &SearchState, request: SearchRequest) -> Result<String, String> {
    let filter = request
        .filter
        .as_deref()
        .map_or(TypeFilter::All, TypeFilter::parse_lenient);
    let locale = request
        .locale
        .as_deref()
        .unwrap_or(state.config.locale.as_str());

    let results = search(&request.query, &state.data, filter);
    let view = SearchView::build(&results, filter, state.config.limits);

    tracing::debug!(
        "search tool: '{}' ({}) -> {} ranked, {} shown",
        request.query,
        filter,
        results.len(),
        view.len()
    );

    Ok(render_view(&request.query, &view, locale))
}
