//! websites_list tool implementation.
//!
//! Returns one page of websites, optionally filtered by category. Pages are
//! chained with the opaque `next_cursor` token.

use gallery_core::{Cursor, Error, PageRequest, Website};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{default_sort_by, parse_sort_by};
use crate::error::ToolError;
use crate::tools::json_result;

/// Largest page a single call may request.
pub const MAX_PAGE_SIZE: usize = 100;

/// Input parameters for websites_list tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WebsitesListParams {
    /// Sort mode: "latest" (default) or "popular".
    #[serde(default = "default_sort_by")]
    pub sort_by: String,

    /// Number of websites per page (1-100). Omit to list everything.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// `next_cursor` from a previous call with the same sort mode.
    #[serde(default)]
    pub cursor: Option<String>,

    /// Only return websites tagged with this category (case-insensitive).
    #[serde(default)]
    pub category: Option<String>,
}

/// Output structure for websites_list tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WebsitesListOutput {
    pub websites: Vec<Website>,
    /// Token for the following page. Absent once the collection is exhausted.
    pub next_cursor: Option<String>,
}

/// Implementation of the websites_list tool.
pub async fn list_impl(
    service: &gallery_core::GalleryService, params: WebsitesListParams,
) -> Result<CallToolResult, McpError> {
    let request = build_request(params)?;
    tracing::debug!(sort_by = %request.sort_by, page_size = ?request.page_size, "websites_list");

    let page = service.get_page(&request).await;
    let output = WebsitesListOutput {
        websites: page.websites,
        next_cursor: page.last_cursor.as_ref().map(Cursor::encode),
    };

    json_result(&output)
}

fn build_request(params: WebsitesListParams) -> Result<PageRequest, McpError> {
    let sort_by = parse_sort_by(&params.sort_by)?;

    if let Some(size) = params.page_size
        && !(1..=MAX_PAGE_SIZE).contains(&size)
    {
        return Err(ToolError::InvalidInput(format!("page_size must be between 1 and {MAX_PAGE_SIZE}")).into());
    }

    let cursor = match params.cursor.as_deref().map(str::trim) {
        Some(token) if !token.is_empty() => {
            let cursor = Cursor::decode(token)?;
            if cursor.value.field() != sort_by.order_field() {
                return Err(Error::InvalidCursor(format!("cursor does not belong to sort mode {sort_by}")).into());
            }
            Some(cursor)
        }
        _ => None,
    };

    let category = params.category.filter(|c| !c.trim().is_empty());

    Ok(PageRequest { sort_by, page_size: params.page_size, cursor, category })
}
