//! Route handler for the MCP `route` tool.

use crate::server::SearchState;
use crate::session::route_for;
use crate::types::EntityKind;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RouteRequest {
    /// Result type: "event", "artist", "venue" or "city"
    #[serde(rename = "type")]
    pub kind: String,
    /// Record id as shown in search results
    pub id: String,
    /// Locale prefix for the path (default from config)
    #[serde(default)]
    pub locale: Option<String>,
}

/// Resolve the site path for a `(type, id)` pair.
///
/// Unknown types are rejected; ids are not checked against the dataset.
pub fn handle_route(state: &SearchState, request: RouteRequest) -> Result<String, String> {
    let kind: EntityKind = request.kind.parse().map_err(|e| format!("{}", e))?;
    let locale = request
        .locale
        .as_deref()
        .unwrap_or(state.config.locale.as_str());
    Ok(route_for(kind, &request.id, locale))
}
