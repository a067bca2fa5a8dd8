//! Workflow handler implementations

use rmcp::{model::CallToolResult, ErrorData as McpError};
use serde_json::{json, Map, Value};

use super::{json_success, n8n_failure, text_success};
use crate::n8n::N8nClient;
use crate::params::{
    WorkflowActivateParams, WorkflowCreateParams, WorkflowDeactivateParams, WorkflowDeleteParams,
    WorkflowExecuteParams, WorkflowGetParams, WorkflowUpdateParams,
};

/// List all workflows
pub async fn workflow_list(client: &N8nClient) -> Result<CallToolResult, McpError> {
    match client.list_workflows().await {
        Ok(workflows) => json_success(&workflows),
        Err(e) => Ok(n8n_failure("n8n_list_workflows", &e)),
    }
}

/// Get a single workflow by id
pub async fn workflow_get(
    client: &N8nClient,
    params: WorkflowGetParams,
) -> Result<CallToolResult, McpError> {
    match client.get_workflow(&params.workflow_id).await {
        Ok(workflow) => json_success(&workflow),
        Err(e) => Ok(n8n_failure("n8n_get_workflow", &e)),
    }
}

/// Create a new workflow, filling in the documented defaults
pub async fn workflow_create(
    client: &N8nClient,
    params: WorkflowCreateParams,
) -> Result<CallToolResult, McpError> {
    match client.create_workflow(&create_body(&params)).await {
        Ok(created) => json_success(&created),
        Err(e) => Ok(n8n_failure("n8n_create_workflow", &e)),
    }
}

/// Update a workflow; only supplied fields are sent
pub async fn workflow_update(
    client: &N8nClient,
    params: WorkflowUpdateParams,
) -> Result<CallToolResult, McpError> {
    let body = update_body(&params);
    match client.update_workflow(&params.workflow_id, &body).await {
        Ok(updated) => json_success(&updated),
        Err(e) => Ok(n8n_failure("n8n_update_workflow", &e)),
    }
}

/// Delete a workflow
pub async fn workflow_delete(
    client: &N8nClient,
    params: WorkflowDeleteParams,
) -> Result<CallToolResult, McpError> {
    match client.delete_workflow(&params.workflow_id).await {
        Ok(_) => Ok(text_success(format!(
            "workflow {} deleted",
            params.workflow_id
        ))),
        Err(e) => Ok(n8n_failure("n8n_delete_workflow", &e)),
    }
}

/// Execute a workflow with optional input data
pub async fn workflow_execute(
    client: &N8nClient,
    params: WorkflowExecuteParams,
) -> Result<CallToolResult, McpError> {
    let payload = params.payload.unwrap_or_else(|| json!({}));
    match client.execute_workflow(&params.workflow_id, &payload).await {
        Ok(execution) => json_success(&execution),
        Err(e) => Ok(n8n_failure("n8n_execute_workflow", &e)),
    }
}

/// Activate a workflow via a partial update
pub async fn workflow_activate(
    client: &N8nClient,
    params: WorkflowActivateParams,
) -> Result<CallToolResult, McpError> {
    match client.activate_workflow(&params.workflow_id).await {
        Ok(updated) => confirmation("activated", &params.workflow_id, &updated),
        Err(e) => Ok(n8n_failure("n8n_activate_workflow", &e)),
    }
}

/// Deactivate a workflow via a partial update
pub async fn workflow_deactivate(
    client: &N8nClient,
    params: WorkflowDeactivateParams,
) -> Result<CallToolResult, McpError> {
    match client.deactivate_workflow(&params.workflow_id).await {
        Ok(updated) => confirmation("deactivated", &params.workflow_id, &updated),
        Err(e) => Ok(n8n_failure("n8n_deactivate_workflow", &e)),
    }
}

fn confirmation(action: &str, id: &str, updated: &Value) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(updated)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(text_success(format!("workflow {id} {action}\n{json}")))
}

fn create_body(params: &WorkflowCreateParams) -> Value {
    json!({
        "name": params.name,
        "nodes": params.nodes,
        "connections": params.connections.clone().unwrap_or_else(|| json!({})),
        "active": params.active.unwrap_or(false),
        "settings": params.settings.clone().unwrap_or_else(|| json!({})),
    })
}

fn update_body(params: &WorkflowUpdateParams) -> Value {
    let mut update = Map::new();
    if let Some(ref name) = params.name {
        update.insert("name".to_string(), json!(name));
    }
    if let Some(ref nodes) = params.nodes {
        update.insert("nodes".to_string(), json!(nodes));
    }
    if let Some(ref connections) = params.connections {
        update.insert("connections".to_string(), connections.clone());
    }
    if let Some(active) = params.active {
        update.insert("active".to_string(), json!(active));
    }
    if let Some(ref settings) = params.settings {
        update.insert("settings".to_string(), settings.clone());
    }
    Value::Object(update)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_applies_defaults() {
        let params = WorkflowCreateParams {
            name: "X".to_string(),
            nodes: vec![],
            connections: None,
            active: None,
            settings: None,
        };
        let body = create_body(&params);
        assert_eq!(body["name"], json!("X"));
        assert_eq!(body["nodes"], json!([]));
        assert_eq!(body["connections"], json!({}));
        assert_eq!(body["active"], json!(false));
        assert_eq!(body["settings"], json!({}));
    }

    #[test]
    fn create_body_keeps_explicit_values() {
        let params = WorkflowCreateParams {
            name: "X".to_string(),
            nodes: vec![json!({ "type": "n8n-nodes-base.start" })],
            connections: Some(json!({ "Start": [] })),
            active: Some(true),
            settings: Some(json!({ "timezone": "UTC" })),
        };
        let body = create_body(&params);
        assert_eq!(body["active"], json!(true));
        assert_eq!(body["connections"], json!({ "Start": [] }));
        assert_eq!(body["settings"], json!({ "timezone": "UTC" }));
    }

    #[test]
    fn update_body_contains_only_supplied_fields() {
        let params = WorkflowUpdateParams {
            workflow_id: "76".to_string(),
            name: Some("renamed".to_string()),
            nodes: None,
            connections: None,
            active: Some(true),
            settings: None,
        };
        let body = update_body(&params);
        let fields = body.as_object().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["name"], json!("renamed"));
        assert_eq!(fields["active"], json!(true));
    }

    #[test]
    fn update_body_is_empty_when_nothing_supplied() {
        let params = WorkflowUpdateParams {
            workflow_id: "76".to_string(),
            name: None,
            nodes: None,
            connections: None,
            active: None,
            settings: None,
        };
        assert_eq!(update_body(&params), json!({}));
    }
}
