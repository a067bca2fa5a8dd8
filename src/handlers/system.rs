//! Diagnostic handlers
//!
//! `self_test` is the one composite tool: two gateway calls aggregated
//! into a single connectivity report. It verifies reachability and
//! permissions, not data - either sub-call failing fails the whole test
//! with that sub-call's message.

use rmcp::{model::CallToolResult, ErrorData as McpError};
use serde::Serialize;
use serde_json::Value;

use super::{json_success, n8n_failure};
use crate::n8n::N8nClient;

#[derive(Debug, Serialize)]
struct SelfTestReport {
    status: &'static str,
    message: &'static str,
    details: SelfTestDetails,
}

#[derive(Debug, Serialize)]
struct SelfTestDetails {
    health: Value,
    workflow_count: usize,
}

/// Check connectivity and permissions against the n8n instance
pub async fn self_test(client: &N8nClient) -> Result<CallToolResult, McpError> {
    let health = match client.get_instance_info().await {
        Ok(health) => health,
        Err(e) => return Ok(n8n_failure("n8n_self_test", &e)),
    };
    let workflows = match client.list_workflows().await {
        Ok(workflows) => workflows,
        Err(e) => return Ok(n8n_failure("n8n_self_test", &e)),
    };

    let report = SelfTestReport {
        status: "ok",
        message: "connection successful",
        details: SelfTestDetails {
            health,
            workflow_count: workflows.as_array().map(|w| w.len()).unwrap_or(0),
        },
    };
    json_success(&report)
}
