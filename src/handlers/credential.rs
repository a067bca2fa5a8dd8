//! Credential handler implementations
//!
//! The listing endpoint only ever returns credential metadata; secret
//! values stay on the instance.

use rmcp::{model::CallToolResult, ErrorData as McpError};
use serde_json::{json, Map, Value};

use super::{json_success, n8n_failure, text_success};
use crate::n8n::N8nClient;
use crate::params::{
    CredentialCreateParams, CredentialDeleteParams, CredentialGetParams, CredentialUpdateParams,
};

/// List all credentials (metadata only)
pub async fn credential_list(client: &N8nClient) -> Result<CallToolResult, McpError> {
    match client.list_credentials().await {
        Ok(credentials) => json_success(&credentials),
        Err(e) => Ok(n8n_failure("n8n_list_credentials", &e)),
    }
}

/// Get a single credential by id
pub async fn credential_get(
    client: &N8nClient,
    params: CredentialGetParams,
) -> Result<CallToolResult, McpError> {
    match client.get_credential(&params.credential_id).await {
        Ok(credential) => json_success(&credential),
        Err(e) => Ok(n8n_failure("n8n_get_credential", &e)),
    }
}

/// Create a new credential
pub async fn credential_create(
    client: &N8nClient,
    params: CredentialCreateParams,
) -> Result<CallToolResult, McpError> {
    let body = json!({
        "name": params.name,
        "type": params.credential_type,
        "data": params.data,
    });
    match client.create_credential(&body).await {
        Ok(created) => json_success(&created),
        Err(e) => Ok(n8n_failure("n8n_create_credential", &e)),
    }
}

/// Update a credential; only supplied fields are sent
pub async fn credential_update(
    client: &N8nClient,
    params: CredentialUpdateParams,
) -> Result<CallToolResult, McpError> {
    let body = update_body(&params);
    match client.update_credential(&params.credential_id, &body).await {
        Ok(updated) => json_success(&updated),
        Err(e) => Ok(n8n_failure("n8n_update_credential", &e)),
    }
}

/// Delete a credential
pub async fn credential_delete(
    client: &N8nClient,
    params: CredentialDeleteParams,
) -> Result<CallToolResult, McpError> {
    match client.delete_credential(&params.credential_id).await {
        Ok(_) => Ok(text_success(format!(
            "credential {} deleted",
            params.credential_id
        ))),
        Err(e) => Ok(n8n_failure("n8n_delete_credential", &e)),
    }
}

fn update_body(params: &CredentialUpdateParams) -> Value {
    let mut update = Map::new();
    if let Some(ref name) = params.name {
        update.insert("name".to_string(), json!(name));
    }
    if let Some(ref data) = params.data {
        update.insert("data".to_string(), data.clone());
    }
    Value::Object(update)
}
