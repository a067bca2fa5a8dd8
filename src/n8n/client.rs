//! HTTP client for the n8n REST API
//!
//! One authenticated round trip per call: the path is appended to the
//! configured base URL, the API key rides along as a header, and the
//! response comes back as parsed JSON (or raw text for the few endpoints
//! that answer without a JSON body). A single attempt per call - errors
//! are reported, never retried.

use std::time::Duration;

use reqwest::{header, Client, Method};
use serde_json::{json, Value};
use tracing::{debug, error, instrument};

use super::error::{excerpt, N8nError, N8nResult};
use crate::config::Config;

/// Per-request timeout. A call that outlives this is reported as a
/// distinct timeout error rather than hanging the invocation.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Lightweight client for the n8n REST API
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct N8nClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl N8nClient {
    pub fn new(config: &Config) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Perform one authenticated call against the n8n REST API.
    ///
    /// Success with a JSON content type parses the body; success with any
    /// other content type returns the raw text as a JSON string value
    /// (deletion confirmations answer with empty or plain-text bodies).
    /// A non-success status fails with the numeric status, its text, and
    /// a body excerpt.
    #[instrument(skip(self, body), fields(method = %method, path = %path))]
    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> N8nResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!("calling n8n API");

        let mut request = self
            .http
            .request(method, &url)
            .header("X-N8N-API-KEY", &self.api_key)
            .header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                N8nError::Timeout(e)
            } else {
                N8nError::Transport(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "n8n API call failed");
            return Err(N8nError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
                body: excerpt(&error_body),
            });
        }

        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);

        let text = response.text().await.map_err(N8nError::Transport)?;
        if is_json {
            Ok(serde_json::from_str(&text)?)
        } else {
            Ok(Value::String(text))
        }
    }

    // ========================================================================
    // Instance
    // ========================================================================

    pub async fn get_instance_info(&self) -> N8nResult<Value> {
        self.request(Method::GET, "/rest/health", None).await
    }

    pub async fn get_instance_version(&self) -> N8nResult<Value> {
        self.request(Method::GET, "/rest/settings", None).await
    }

    // ========================================================================
    // Workflows
    // ========================================================================

    pub async fn list_workflows(&self) -> N8nResult<Value> {
        self.request(Method::GET, "/rest/workflows", None).await
    }

    pub async fn get_workflow(&self, id: &str) -> N8nResult<Value> {
        self.request(Method::GET, &format!("/rest/workflows/{}", encode(id)), None)
            .await
    }

    pub async fn create_workflow(&self, data: &Value) -> N8nResult<Value> {
        self.request(Method::POST, "/rest/workflows", Some(data)).await
    }

    pub async fn update_workflow(&self, id: &str, data: &Value) -> N8nResult<Value> {
        self.request(
            Method::PATCH,
            &format!("/rest/workflows/{}", encode(id)),
            Some(data),
        )
        .await
    }

    pub async fn delete_workflow(&self, id: &str) -> N8nResult<Value> {
        self.request(Method::DELETE, &format!("/rest/workflows/{}", encode(id)), None)
            .await
    }

    pub async fn execute_workflow(&self, id: &str, payload: &Value) -> N8nResult<Value> {
        self.request(
            Method::POST,
            &format!("/rest/workflows/run/{}", encode(id)),
            Some(payload),
        )
        .await
    }

    /// Activation state is one field of the workflow resource, so
    /// activation is a partial update rather than a separate endpoint.
    pub async fn activate_workflow(&self, id: &str) -> N8nResult<Value> {
        self.update_workflow(id, &json!({ "active": true })).await
    }

    pub async fn deactivate_workflow(&self, id: &str) -> N8nResult<Value> {
        self.update_workflow(id, &json!({ "active": false })).await
    }

    // ========================================================================
    // Executions
    // ========================================================================

    pub async fn list_executions(&self, limit: u32, last_id: Option<&str>) -> N8nResult<Value> {
        self.request(Method::GET, &executions_path(limit, last_id), None)
            .await
    }

    pub async fn get_execution(&self, id: &str) -> N8nResult<Value> {
        self.request(Method::GET, &format!("/rest/executions/{}", encode(id)), None)
            .await
    }

    pub async fn stop_execution(&self, id: &str) -> N8nResult<Value> {
        self.request(
            Method::POST,
            &format!("/rest/executions/{}", encode(id)),
            Some(&json!({ "stop": true })),
        )
        .await
    }

    // ========================================================================
    // Tags
    // ========================================================================

    pub async fn list_tags(&self) -> N8nResult<Value> {
        self.request(Method::GET, "/rest/tags", None).await
    }

    // ========================================================================
    // Credentials
    // ========================================================================

    pub async fn list_credentials(&self) -> N8nResult<Value> {
        self.request(Method::GET, "/rest/credentials", None).await
    }

    pub async fn get_credential(&self, id: &str) -> N8nResult<Value> {
        self.request(Method::GET, &format!("/rest/credentials/{}", encode(id)), None)
            .await
    }

    pub async fn create_credential(&self, data: &Value) -> N8nResult<Value> {
        self.request(Method::POST, "/rest/credentials", Some(data)).await
    }

    pub async fn update_credential(&self, id: &str, data: &Value) -> N8nResult<Value> {
        self.request(
            Method::PATCH,
            &format!("/rest/credentials/{}", encode(id)),
            Some(data),
        )
        .await
    }

    pub async fn delete_credential(&self, id: &str) -> N8nResult<Value> {
        self.request(
            Method::DELETE,
            &format!("/rest/credentials/{}", encode(id)),
            None,
        )
        .await
    }

    // ========================================================================
    // Node types
    // ========================================================================

    pub async fn list_node_types(&self) -> N8nResult<Value> {
        self.request(Method::GET, "/rest/node-types", None).await
    }

    /// The instance exposes no single-item endpoint for node types; fetch
    /// the full listing and filter by exact name match.
    pub async fn get_node_type(&self, name: &str) -> N8nResult<Option<Value>> {
        let types = self.list_node_types().await?;
        Ok(find_node_type(&types, name))
    }

    // ========================================================================
    // Variables
    // ========================================================================

    pub async fn list_variables(&self) -> N8nResult<Value> {
        self.request(Method::GET, "/rest/variables", None).await
    }

    pub async fn get_variable(&self, id: &str) -> N8nResult<Value> {
        self.request(Method::GET, &format!("/rest/variables/{}", encode(id)), None)
            .await
    }

    pub async fn create_variable(&self, data: &Value) -> N8nResult<Value> {
        self.request(Method::POST, "/rest/variables", Some(data)).await
    }

    pub async fn update_variable(&self, id: &str, data: &Value) -> N8nResult<Value> {
        self.request(
            Method::PATCH,
            &format!("/rest/variables/{}", encode(id)),
            Some(data),
        )
        .await
    }

    pub async fn delete_variable(&self, id: &str) -> N8nResult<Value> {
        self.request(Method::DELETE, &format!("/rest/variables/{}", encode(id)), None)
            .await
    }
}

/// Percent-encode an identifier for use as a single path segment.
fn encode(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}

fn executions_path(limit: u32, last_id: Option<&str>) -> String {
    let mut path = format!("/rest/executions?limit={limit}");
    if let Some(last_id) = last_id {
        path.push_str("&lastId=");
        path.push_str(&urlencoding::encode(last_id));
    }
    path
}

/// Exact-name lookup over the node-type listing.
fn find_node_type(types: &Value, name: &str) -> Option<Value> {
    types.as_array().and_then(|list| {
        list.iter()
            .find(|t| t.get("name").and_then(Value::as_str) == Some(name))
            .cloned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn executions_path_renders_limit() {
        assert_eq!(executions_path(20, None), "/rest/executions?limit=20");
    }

    #[test]
    fn executions_path_appends_encoded_cursor() {
        assert_eq!(
            executions_path(5, Some("abc/1")),
            "/rest/executions?limit=5&lastId=abc%2F1"
        );
    }

    #[test]
    fn path_ids_round_trip_reserved_characters() {
        for id in ["a/b", "a?b", "a#b", "a b", "100%", "wf?x=1#frag"] {
            let encoded = encode(id);
            assert!(
                !encoded.contains('/') && !encoded.contains('?') && !encoded.contains('#'),
                "reserved character survived encoding: {encoded}"
            );
            assert_eq!(urlencoding::decode(&encoded).unwrap(), id);
        }
    }

    #[test]
    fn find_node_type_matches_exact_name_only() {
        let types = json!([
            { "name": "n8n-nodes-base.httpRequest", "displayName": "HTTP Request" },
            { "name": "n8n-nodes-base.set", "displayName": "Set" }
        ]);
        let found = find_node_type(&types, "n8n-nodes-base.set").unwrap();
        assert_eq!(found["displayName"], "Set");
        // Prefix is not a match
        assert!(find_node_type(&types, "n8n-nodes-base").is_none());
    }

    #[test]
    fn find_node_type_tolerates_non_array_listing() {
        assert!(find_node_type(&json!({ "data": [] }), "anything").is_none());
    }
}
