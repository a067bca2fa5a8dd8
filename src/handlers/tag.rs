//! Tag handler implementations

use rmcp::{model::CallToolResult, ErrorData as McpError};

use super::{json_success, n8n_failure};
use crate::n8n::N8nClient;

/// List all tags configured on the instance
pub async fn tag_list(client: &N8nClient) -> Result<CallToolResult, McpError> {
    match client.list_tags().await {
        Ok(tags) => json_success(&tags),
        Err(e) => Ok(n8n_failure("n8n_list_tags", &e)),
    }
}
