//! Variable handler implementations

use rmcp::{model::CallToolResult, ErrorData as McpError};
use serde_json::{json, Map, Value};

use super::{json_success, n8n_failure, text_success};
use crate::n8n::N8nClient;
use crate::params::{
    VariableCreateParams, VariableDeleteParams, VariableGetParams, VariableUpdateParams,
};

/// List all variables configured on the instance
pub async fn variable_list(client: &N8nClient) -> Result<CallToolResult, McpError> {
    match client.list_variables().await {
        Ok(variables) => json_success(&variables),
        Err(e) => Ok(n8n_failure("n8n_list_variables", &e)),
    }
}

/// Get a single variable by id
pub async fn variable_get(
    client: &N8nClient,
    params: VariableGetParams,
) -> Result<CallToolResult, McpError> {
    match client.get_variable(&params.variable_id).await {
        Ok(variable) => json_success(&variable),
        Err(e) => Ok(n8n_failure("n8n_get_variable", &e)),
    }
}

/// Create a new variable
pub async fn variable_create(
    client: &N8nClient,
    params: VariableCreateParams,
) -> Result<CallToolResult, McpError> {
    let body = create_body(&params);
    match client.create_variable(&body).await {
        Ok(created) => json_success(&created),
        Err(e) => Ok(n8n_failure("n8n_create_variable", &e)),
    }
}

/// Update a variable; only supplied fields are sent
pub async fn variable_update(
    client: &N8nClient,
    params: VariableUpdateParams,
) -> Result<CallToolResult, McpError> {
    let body = update_body(&params);
    match client.update_variable(&params.variable_id, &body).await {
        Ok(updated) => json_success(&updated),
        Err(e) => Ok(n8n_failure("n8n_update_variable", &e)),
    }
}

/// Delete a variable
pub async fn variable_delete(
    client: &N8nClient,
    params: VariableDeleteParams,
) -> Result<CallToolResult, McpError> {
    match client.delete_variable(&params.variable_id).await {
        Ok(_) => Ok(text_success(format!(
            "variable {} deleted",
            params.variable_id
        ))),
        Err(e) => Ok(n8n_failure("n8n_delete_variable", &e)),
    }
}

fn create_body(params: &VariableCreateParams) -> Value {
    let mut body = Map::new();
    body.insert("key".to_string(), json!(params.key));
    body.insert("value".to_string(), json!(params.value));
    if let Some(ref variable_type) = params.variable_type {
        body.insert("type".to_string(), json!(variable_type));
    }
    Value::Object(body)
}

fn update_body(params: &VariableUpdateParams) -> Value {
    let mut update = Map::new();
    if let Some(ref key) = params.key {
        update.insert("key".to_string(), json!(key));
    }
    if let Some(ref value) = params.value {
        update.insert("value".to_string(), json!(value));
    }
    if let Some(ref variable_type) = params.variable_type {
        update.insert("type".to_string(), json!(variable_type));
    }
    Value::Object(update)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_omits_absent_type() {
        let params = VariableCreateParams {
            key: "ENV".to_string(),
            value: "prod".to_string(),
            variable_type: None,
        };
        let body = create_body(&params);
        assert_eq!(body, json!({ "key": "ENV", "value": "prod" }));
    }

    #[test]
    fn create_body_includes_supplied_type() {
        let params = VariableCreateParams {
            key: "RETRIES".to_string(),
            value: "3".to_string(),
            variable_type: Some("number".to_string()),
        };
        let body = create_body(&params);
        assert_eq!(body["type"], json!("number"));
    }

    #[test]
    fn update_body_contains_only_supplied_fields() {
        let params = VariableUpdateParams {
            variable_id: "5".to_string(),
            key: None,
            value: Some("staging".to_string()),
            variable_type: None,
        };
        assert_eq!(update_body(&params), json!({ "value": "staging" }));
    }
}
