//! sitemap_entries tool implementation.

use gallery_core::{GalleryService, SitemapEntry};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tools::json_result;

/// Output structure for sitemap_entries tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SitemapOutput {
    /// Every website id with its last modification time, sorted by id.
    pub entries: Vec<SitemapEntry>,
}

/// Implementation of the sitemap_entries tool.
pub async fn sitemap_impl(service: &GalleryService) -> Result<CallToolResult, McpError> {
    let entries = service.sitemap_entries().await;
    tracing::debug!(entries = entries.len(), "sitemap_entries");
    json_result(&SitemapOutput { entries })
}
