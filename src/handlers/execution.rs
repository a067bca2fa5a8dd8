//! Execution handler implementations

use rmcp::{model::CallToolResult, ErrorData as McpError};

use super::{json_success, n8n_failure};
use crate::n8n::N8nClient;
use crate::params::{ExecutionGetParams, ExecutionListParams, ExecutionStopParams};

/// Listing falls back to the most recent 20 executions.
const DEFAULT_LIST_LIMIT: u32 = 20;

/// List recent executions
pub async fn execution_list(
    client: &N8nClient,
    params: ExecutionListParams,
) -> Result<CallToolResult, McpError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    match client.list_executions(limit, params.last_id.as_deref()).await {
        Ok(executions) => json_success(&executions),
        Err(e) => Ok(n8n_failure("n8n_get_executions", &e)),
    }
}

/// Get details of a single execution
pub async fn execution_get(
    client: &N8nClient,
    params: ExecutionGetParams,
) -> Result<CallToolResult, McpError> {
    match client.get_execution(&params.execution_id).await {
        Ok(execution) => json_success(&execution),
        Err(e) => Ok(n8n_failure("n8n_get_execution", &e)),
    }
}

/// Ask the instance to stop a running execution
pub async fn execution_stop(
    client: &N8nClient,
    params: ExecutionStopParams,
) -> Result<CallToolResult, McpError> {
    match client.stop_execution(&params.execution_id).await {
        Ok(result) => json_success(&result),
        Err(e) => Ok(n8n_failure("n8n_stop_execution", &e)),
    }
}
