//!  Itinerant Travel Suggest
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # MCP Server
//!
//! Exposes the suggestion operations as MCP tools and builds the HTTP router
//! used by the streamable-HTTP transport.

use std::sync::Arc;

use axum::response::Html;
use axum::routing::get;
use rmcp::handler::server::{ServerHandler, tool::ToolRouter, wrapper::Parameters};
use rmcp::tool;
use rmcp::tool_router;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};

use crate::suggestion_service::{FlightsRequest, HotelsRequest, SuggestionService};

const HOMEPAGE: &str = "<!DOCTYPE html>
<html>
<head><title>Itinerary planning MCP server</title></head>
<body>
<h1>Itinerary planning MCP server</h1>
<p>MCP endpoint: <code>/mcp</code>. Tools: <code>suggest_hotels</code>, <code>suggest_flights</code>.</p>
</body>
</html>
";

#[derive(Clone)]
pub struct TravelSuggestServer {
    service: SuggestionService,
    tool_router: ToolRouter<Self>,
}

impl TravelSuggestServer {
    pub fn new(service: SuggestionService) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Names of the advertised tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect()
    }
}

#[tool_router]
impl TravelSuggestServer {
    #[tool(
        name = "suggest_hotels",
        description = "Suggest hotels for a stay. Parameters: location (city or area), check_in (YYYY-MM-DD), check_out (YYYY-MM-DD, after check_in). Returns 3-8 hotels sorted by rating, best first."
    )]
    pub async fn suggest_hotels(&self, params: Parameters<HotelsRequest>) -> Result<String, String> {
        let request = params.0;
        tracing::info!(
            "suggest_hotels: {:?} {:?} -> {:?}",
            request.location,
            request.check_in,
            request.check_out
        );
        let hotels = self
            .service
            .suggest_hotels(&request)
            .map_err(|e| e.to_string())?;
        serde_json::to_string(&hotels).map_err(|e| e.to_string())
    }

    #[tool(
        name = "suggest_flights",
        description = "Suggest flights between two cities. Parameters: from_location, to_location (city names), departure_date (YYYY-MM-DD), return_date (YYYY-MM-DD, optional, after departure_date). Returns departure_flights and return_flights; connecting flights carry two segments."
    )]
    pub async fn suggest_flights(
        &self,
        params: Parameters<FlightsRequest>,
    ) -> Result<String, String> {
        let request = params.0;
        tracing::info!(
            "suggest_flights: {:?} -> {:?} on {:?} (return {:?})",
            request.from_location,
            request.to_location,
            request.departure_date,
            request.return_date
        );
        let flights = self
            .service
            .suggest_flights(&request)
            .map_err(|e| e.to_string())?;
        serde_json::to_string(&flights).map_err(|e| e.to_string())
    }
}

impl ServerHandler for TravelSuggestServer {
    fn list_tools(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> impl Future<Output = Result<rmcp::model::ListToolsResult, rmcp::ErrorData>> + Send + '_
    {
        Box::pin(async move {
            let tools = self.tool_router.list_all();
            tracing::debug!("Returning {} tools", tools.len());
            Ok(rmcp::model::ListToolsResult::with_all_items(tools))
        })
    }

    fn call_tool(
        &self,
        request: rmcp::model::CallToolRequestParam,
        context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> impl Future<Output = Result<rmcp::model::CallToolResult, rmcp::ErrorData>> + Send + '_
    {
        let router = self.tool_router.clone();
        let self_clone = self.clone();
        Box::pin(async move {
            let context =
                rmcp::handler::server::tool::ToolCallContext::new(&self_clone, request, context);
            router.call(context).await
        })
    }

    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            protocol_version: rmcp::model::ProtocolVersion::V_2025_03_26,
            capabilities: rmcp::model::ServerCapabilities {
                tools: Some(rmcp::model::ToolsCapability::default()),
                ..Default::default()
            },
            server_info: rmcp::model::Implementation::from_build_env(),
            instructions: Some(
                "Synthetic travel inventory: suggest_hotels and suggest_flights return plausible fake offers."
                    .to_string(),
            ),
        }
    }
}

pub async fn homepage() -> Html<&'static str> {
    Html(HOMEPAGE)
}

/// Homepage at `/` and the streamable-HTTP MCP endpoint at `/mcp`.
pub fn http_router(server: TravelSuggestServer) -> axum::Router {
    let session_manager = Arc::new(LocalSessionManager::default());
    let config = StreamableHttpServerConfig {
        stateful_mode: true,
        ..Default::default()
    };
    let service = StreamableHttpService::new(move || Ok(server.clone()), session_manager, config);
    axum::Router::new()
        .route("/", get(homepage))
        .nest_service("/mcp", service)
}
