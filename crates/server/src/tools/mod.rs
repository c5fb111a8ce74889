//! MCP tool implementations.
//!
//! This module contains all tools exposed by the gallery server. Every tool
//! answers with a single pretty-printed JSON text block.

pub mod categories;
pub mod sitemap;
pub mod websites;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use crate::error::ToolError;

pub use websites::{WebsiteGetParams, WebsiteViewParams, WebsitesAdjacentParams, WebsitesListParams};

/// Wrap a serializable output as a successful tool result.
pub(crate) fn json_result<T: Serialize>(output: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(output).map_err(ToolError::from)?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Reject blank ids before they reach the store.
pub(crate) fn require_id(id: &str) -> Result<&str, ToolError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ToolError::InvalidInput("id cannot be empty".into()));
    }
    Ok(id)
}
