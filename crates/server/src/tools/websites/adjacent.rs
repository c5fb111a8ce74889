//! website_adjacent tool implementation.

use gallery_core::GalleryService;
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{default_sort_by, parse_sort_by};
use crate::tools::{json_result, require_id};

/// Input parameters for website_adjacent tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WebsitesAdjacentParams {
    /// Website id.
    pub id: String,

    /// Sort mode the neighbours are taken from: "latest" (default) or "popular".
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
}

/// Implementation of the website_adjacent tool.
pub async fn adjacent_impl(
    service: &GalleryService, params: WebsitesAdjacentParams,
) -> Result<CallToolResult, McpError> {
    let id = require_id(&params.id)?;
    let sort_by = parse_sort_by(&params.sort_by)?;
    let adjacent = service.get_adjacent(id, sort_by).await;
    json_result(&adjacent)
}
