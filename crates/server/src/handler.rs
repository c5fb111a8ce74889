//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the gallery service.
use crate::tools::{
    WebsiteGetParams, WebsiteViewParams, WebsitesAdjacentParams, WebsitesListParams, categories, sitemap, websites,
};

use gallery_core::GalleryService;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for the website gallery.
#[derive(Clone)]
pub struct GalleryServer {
    tool_router: ToolRouter<Self>,
    service: GalleryService,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl GalleryServer {
    /// Create a new server handler over `service`.
    pub fn new(service: GalleryService) -> Self {
        Self { tool_router: Self::tool_router(), service }
    }

    #[tool(
        description = "List gallery websites, newest (\"latest\") or most viewed (\"popular\") first. Supports page_size, an opaque cursor from a previous call, and a case-insensitive category filter applied after paging."
    )]
    async fn websites_list(&self, params: Parameters<WebsitesListParams>) -> Result<CallToolResult, McpError> {
        websites::list_impl(&self.service, params.0).await
    }

    #[tool(description = "Get one website with its detail fields (description, tags, tech stack). Records a view.")]
    async fn website_get(&self, params: Parameters<WebsiteGetParams>) -> Result<CallToolResult, McpError> {
        websites::get_impl(&self.service, params.0).await
    }

    /// Previous/next navigation.
    ///
    /// Neighbours are searched only within the first page of the chosen ordering.
    #[tool(description = "Get the previous and next website around an id within a sort order.")]
    async fn website_adjacent(&self, params: Parameters<WebsitesAdjacentParams>) -> Result<CallToolResult, McpError> {
        websites::adjacent_impl(&self.service, params.0).await
    }

    #[tool(description = "Record one view of a website. Fire-and-forget.")]
    async fn website_view(&self, params: Parameters<WebsiteViewParams>) -> Result<CallToolResult, McpError> {
        websites::view_impl(&self.service, params.0).await
    }

    #[tool(description = "Count websites per canonical category. Every category is listed, zero counts included.")]
    async fn category_counts(&self) -> Result<CallToolResult, McpError> {
        categories::counts_impl(&self.service).await
    }

    #[tool(description = "List the canonical gallery categories.")]
    async fn category_list(&self) -> Result<CallToolResult, McpError> {
        categories::list_impl(&self.service)
    }

    #[tool(description = "List every website id with its last modification time, for sitemap generation.")]
    async fn sitemap_entries(&self) -> Result<CallToolResult, McpError> {
        sitemap::sitemap_impl(&self.service).await
    }
}

impl ServerHandler for GalleryServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "gallery-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::service;

    #[test]
    fn test_router_lists_every_tool() {
        let server = GalleryServer::new(service());
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "category_counts",
                "category_list",
                "sitemap_entries",
                "website_adjacent",
                "website_get",
                "website_view",
                "websites_list",
            ]
        );
    }

    #[test]
    fn test_server_info() {
        let info = GalleryServer::new(service()).get_info();
        assert_eq!(info.server_info.name, "gallery-mcp");
        assert!(info.capabilities.tools.is_some());
    }
}
