//! category_counts and category_list tool implementations.

use gallery_core::{CategoryCount, GalleryService};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tools::json_result;

/// Output structure for category_counts tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryCountsOutput {
    /// One entry per canonical category, sorted by name.
    pub categories: Vec<CategoryCount>,
}

/// Output structure for category_list tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryListOutput {
    pub categories: Vec<String>,
}

/// Implementation of the category_counts tool.
pub async fn counts_impl(service: &GalleryService) -> Result<CallToolResult, McpError> {
    let categories = service.get_category_counts().await;
    json_result(&CategoryCountsOutput { categories })
}

/// Implementation of the category_list tool.
pub fn list_impl(service: &GalleryService) -> Result<CallToolResult, McpError> {
    let categories = service.categories().iter().map(|c| (*c).to_string()).collect();
    json_result(&CategoryListOutput { categories })
}
