//! Instance information handlers

use rmcp::{model::CallToolResult, ErrorData as McpError};

use super::{json_success, n8n_failure};
use crate::n8n::N8nClient;

/// Health information for the n8n instance
pub async fn instance_info(client: &N8nClient) -> Result<CallToolResult, McpError> {
    match client.get_instance_info().await {
        Ok(info) => json_success(&info),
        Err(e) => Ok(n8n_failure("n8n_get_instance_info", &e)),
    }
}

/// Version and settings of the n8n instance
pub async fn instance_version(client: &N8nClient) -> Result<CallToolResult, McpError> {
    match client.get_instance_version().await {
        Ok(version) => json_success(&version),
        Err(e) => Ok(n8n_failure("n8n_get_instance_version", &e)),
    }
}
