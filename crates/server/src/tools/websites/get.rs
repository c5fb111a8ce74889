//! website_get tool implementation.

use gallery_core::GalleryService;
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tools::{json_result, require_id};

/// Input parameters for website_get tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WebsiteGetParams {
    /// Website id.
    pub id: String,
}

/// Implementation of the website_get tool.
///
/// A detail read that misses the cache also records a view in the background.
pub async fn get_impl(service: &GalleryService, params: WebsiteGetParams) -> Result<CallToolResult, McpError> {
    let id = require_id(&params.id)?;
    let detail = service.get_by_id(id).await?;
    json_result(&detail)
}
