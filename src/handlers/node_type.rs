//! Node-type handler implementations

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};

use super::{json_success, n8n_failure};
use crate::n8n::N8nClient;
use crate::params::NodeTypeGetParams;

/// List all node types available on the instance
pub async fn node_type_list(client: &N8nClient) -> Result<CallToolResult, McpError> {
    match client.list_node_types().await {
        Ok(types) => json_success(&types),
        Err(e) => Ok(n8n_failure("n8n_list_node_types", &e)),
    }
}

/// Look up one node type by its internal name
///
/// The instance has no single-item endpoint, so the client fetches the
/// full listing and filters by exact name. A name absent from the listing
/// yields a failed result rather than an empty payload.
pub async fn node_type_get(
    client: &N8nClient,
    params: NodeTypeGetParams,
) -> Result<CallToolResult, McpError> {
    match client.get_node_type(&params.node_type).await {
        Ok(Some(node)) => json_success(&node),
        Ok(None) => Ok(CallToolResult::error(vec![Content::text(format!(
            "error running n8n_get_node_type: node type not found: {}",
            params.node_type
        ))])),
        Err(e) => Ok(n8n_failure("n8n_get_node_type", &e)),
    }
}
