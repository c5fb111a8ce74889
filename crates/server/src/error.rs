//! Structured errors for the gallery MCP server.
//!
//! Covers failures raised by the tool layer itself; data-layer failures
//! arrive as `gallery_core::Error` and convert on their own.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Tool-layer errors.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Invalid input parameters (e.g., empty id, page size out of range).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Tool output could not be serialized.
    #[error("SERIALIZE_FAILED: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        let (code, message) = match &err {
            ToolError::InvalidInput(msg) => (-32602, msg.clone()),
            ToolError::Serialize(e) => (-32603, e.to_string()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}
