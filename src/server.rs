//! MCP server implementation and shared search state.

use crate::config::Config;
use crate::tools::route::{RouteRequest, handle_route};
use crate::tools::search::{SearchRequest, handle_search};
use crate::types::SearchData;
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// Dataset and settings shared by every tool call.
///
/// The dataset is read-only for the lifetime of the server; each call ranks
/// from scratch.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub data: Arc<SearchData>,
    pub config: Config,
}

impl SearchState {
    pub fn new(data: Arc<SearchData>, config: Config) -> Self {
        Self { data, config }
    }
}

/// MCP Server for jazz search queries
#[derive(Clone)]
pub struct SearchServer {
    /// Shared dataset and configuration
    state: Arc<SearchState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for SearchServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchServer")
            .field("records", &self.state.data.total_records())
            .field("locale", &self.state.config.locale)
            .finish()
    }
}

#[tool_router]
impl SearchServer {
    pub fn new(state: SearchState) -> Self {
        Self {
            state: Arc::new(state),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Fuzzy search across jazz events, artists, venues and cities. Without a filter, results are grouped by type (a few per type); with a filter, returns the top matches of that type. Each result includes its score and site path."
    )]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.state, request)
    }

    #[tool(
        description = "Resolve the site path for a search result given its type and id. City results link to the city index."
    )]
    async fn route(
        &self,
        Parameters(request): Parameters<RouteRequest>,
    ) -> std::result::Result<String, String> {
        handle_route(&self.state, request)
    }
}

#[tool_handler]
impl ServerHandler for SearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "jazznode-search: fuzzy search over jazz events, artists, venues and cities. \
                 Use search with a free-text query, optionally filtered to one type, \
                 and route to turn a result's type and id into a page path."
                    .to_string(),
            )
    }
}
