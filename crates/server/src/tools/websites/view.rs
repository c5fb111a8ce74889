//! website_view tool implementation.
//!
//! Records one view of a website. The increment runs on a detached task and
//! never reports failure to the caller.

use gallery_core::GalleryService;
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tools::{json_result, require_id};

/// Input parameters for website_view tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WebsiteViewParams {
    /// Website id.
    pub id: String,
}

/// Output structure for website_view tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WebsiteViewOutput {
    pub id: String,
    /// Always true once the increment has been handed off.
    pub queued: bool,
}

/// Implementation of the website_view tool.
pub async fn view_impl(service: &GalleryService, params: WebsiteViewParams) -> Result<CallToolResult, McpError> {
    let id = require_id(&params.id)?;
    drop(service.spawn_view_increment(id));
    json_result(&WebsiteViewOutput { id: id.to_string(), queued: true })
}
