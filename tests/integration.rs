//! Integration tests for the n8n MCP server
//!
//! Catalog tests run offline against the tool router. Live tests run
//! against a real n8n instance and require:
//! - `N8N_API_URL` and `N8N_API_KEY` set in the environment
//! - Network access to that instance
//!
//! # Running tests
//!
//! ```bash
//! # Offline catalog tests only (default)
//! cargo test --test integration
//!
//! # Live read-only tests (safe, no side effects)
//! cargo test --test integration -- --ignored read_
//!
//! # All live tests (includes a create/delete round trip)
//! cargo test --test integration -- --ignored
//! ```

use n8n_api_mcp::{Config, N8nClient, N8nError, N8nMcpServer};

/// All tools the server is expected to expose
const EXPECTED_TOOLS: &[&str] = &[
    "n8n_get_instance_info",
    "n8n_get_instance_version",
    "n8n_list_workflows",
    "n8n_get_workflow",
    "n8n_create_workflow",
    "n8n_update_workflow",
    "n8n_delete_workflow",
    "n8n_execute_workflow",
    "n8n_activate_workflow",
    "n8n_deactivate_workflow",
    "n8n_get_executions",
    "n8n_get_execution",
    "n8n_stop_execution",
    "n8n_list_tags",
    "n8n_list_credentials",
    "n8n_get_credential",
    "n8n_create_credential",
    "n8n_update_credential",
    "n8n_delete_credential",
    "n8n_list_node_types",
    "n8n_get_node_type",
    "n8n_list_variables",
    "n8n_get_variable",
    "n8n_create_variable",
    "n8n_update_variable",
    "n8n_delete_variable",
    "n8n_self_test",
];

fn offline_server() -> N8nMcpServer {
    let config = Config::new("http://localhost:5678", "test-key");
    N8nMcpServer::new(N8nClient::new(&config))
}

/// Required properties of a tool's input schema, as declared to MCP clients
fn required_args(server: &N8nMcpServer, tool_name: &str) -> Vec<String> {
    let tools = server.list_tools();
    let tool = tools
        .iter()
        .find(|t| t.name.as_ref() == tool_name)
        .unwrap_or_else(|| panic!("tool {tool_name} not in catalog"));
    let mut required: Vec<String> = tool
        .input_schema
        .get("required")
        .and_then(|r| r.as_array())
        .map(|list| {
            list.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default();
    required.sort();
    required
}

// ============================================================================
// CATALOG TESTS (offline)
// ============================================================================

#[test]
fn catalog_exposes_every_tool() {
    let server = offline_server();
    let tools = server.list_tools();
    let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();

    for expected in EXPECTED_TOOLS {
        assert!(names.contains(expected), "missing tool: {expected}");
    }
    assert_eq!(
        tools.len(),
        EXPECTED_TOOLS.len(),
        "unexpected tools in catalog: {names:?}"
    );
}

#[test]
fn every_tool_has_a_description() {
    let server = offline_server();
    for tool in server.list_tools() {
        let description = tool.description.as_deref().unwrap_or_default();
        assert!(!description.is_empty(), "tool {} has no description", tool.name);
    }
}

#[test]
fn workflow_tools_require_their_identifiers() {
    let server = offline_server();
    assert_eq!(required_args(&server, "n8n_get_workflow"), ["workflow_id"]);
    assert_eq!(required_args(&server, "n8n_delete_workflow"), ["workflow_id"]);
    assert_eq!(required_args(&server, "n8n_update_workflow"), ["workflow_id"]);
    assert_eq!(required_args(&server, "n8n_execute_workflow"), ["workflow_id"]);
    assert_eq!(required_args(&server, "n8n_activate_workflow"), ["workflow_id"]);
    assert_eq!(required_args(&server, "n8n_get_execution"), ["execution_id"]);
    assert_eq!(required_args(&server, "n8n_stop_execution"), ["execution_id"]);
    assert_eq!(required_args(&server, "n8n_get_credential"), ["credential_id"]);
    assert_eq!(required_args(&server, "n8n_get_variable"), ["variable_id"]);
    assert_eq!(required_args(&server, "n8n_get_node_type"), ["node_type"]);
}

#[test]
fn create_tools_require_their_payload_fields() {
    let server = offline_server();
    assert_eq!(
        required_args(&server, "n8n_create_workflow"),
        ["name", "nodes"]
    );
    assert_eq!(
        required_args(&server, "n8n_create_credential"),
        ["data", "name", "type"]
    );
    assert_eq!(required_args(&server, "n8n_create_variable"), ["key", "value"]);
}

#[test]
fn list_tools_require_nothing() {
    let server = offline_server();
    for tool_name in [
        "n8n_list_workflows",
        "n8n_get_executions",
        "n8n_list_tags",
        "n8n_list_credentials",
        "n8n_list_node_types",
        "n8n_list_variables",
        "n8n_self_test",
    ] {
        assert!(
            required_args(&server, tool_name).is_empty(),
            "{tool_name} should not require arguments"
        );
    }
}

// ============================================================================
// LIVE TESTS (require a reachable n8n instance)
// ============================================================================

fn live_client() -> Option<N8nClient> {
    match Config::from_env() {
        Ok(config) => Some(N8nClient::new(&config)),
        Err(_) => {
            eprintln!("Skipping: N8N_API_URL/N8N_API_KEY not set");
            None
        }
    }
}

#[tokio::test]
#[ignore = "integration test - requires a reachable n8n instance"]
async fn read_instance_health() {
    let Some(client) = live_client() else { return };
    let health = client.get_instance_info().await;
    assert!(health.is_ok(), "health check failed: {:?}", health.err());
}

#[tokio::test]
#[ignore = "integration test - requires a reachable n8n instance"]
async fn read_workflow_listing() {
    let Some(client) = live_client() else { return };
    let workflows = client.list_workflows().await;
    assert!(workflows.is_ok(), "listing failed: {:?}", workflows.err());
}

#[tokio::test]
#[ignore = "integration test - requires a reachable n8n instance"]
async fn read_workflow_get_is_idempotent() {
    let Some(client) = live_client() else { return };

    let workflows = client.list_workflows().await.expect("listing failed");
    let Some(id) = first_workflow_id(&workflows) else {
        eprintln!("Skipping: instance has no workflows");
        return;
    };

    let first = client.get_workflow(&id).await.expect("first get failed");
    let second = client.get_workflow(&id).await.expect("second get failed");
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap(),
        "repeated gets of an unchanged workflow differ"
    );
}

#[tokio::test]
#[ignore = "integration test - requires a reachable n8n instance"]
async fn read_delete_of_missing_workflow_reports_status() {
    let Some(client) = live_client() else { return };
    match client.delete_workflow("n8n-api-mcp-does-not-exist").await {
        Err(N8nError::Api { status, .. }) => {
            assert!(
                (400..500).contains(&status),
                "expected a client-error status, got {status}"
            );
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
#[ignore = "integration test - creates and deletes a workflow"]
async fn write_workflow_create_delete_round_trip() {
    let Some(client) = live_client() else { return };

    let body = serde_json::json!({
        "name": "n8n-api-mcp smoke test",
        "nodes": [],
        "connections": {},
        "active": false,
        "settings": {},
    });
    let created = client.create_workflow(&body).await.expect("create failed");
    let id = created
        .get("id")
        .or_else(|| created.get("data").and_then(|d| d.get("id")))
        .map(id_to_string)
        .expect("created workflow has no id");

    let deleted = client.delete_workflow(&id).await;
    assert!(deleted.is_ok(), "cleanup delete failed: {:?}", deleted.err());
}

/// Pull the first workflow id out of a listing, tolerating both the bare
/// array and the `{"data": [...]}` envelope n8n versions differ on.
fn first_workflow_id(listing: &serde_json::Value) -> Option<String> {
    let list = listing
        .as_array()
        .or_else(|| listing.get("data").and_then(|d| d.as_array()))?;
    list.first()?.get("id").map(id_to_string)
}

fn id_to_string(id: &serde_json::Value) -> String {
    match id {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
