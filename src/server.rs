//! MCP Server implementation
//!
//! This module defines the main MCP server that exposes the n8n REST API
//! as tools. Handler implementations are in the handlers/ module; the
//! `#[tool_router]` table below is the single source of truth for the
//! catalog - both `tools/list` and `tools/call` are served from it, and
//! an unknown tool name is rejected by the router before any handler
//! (and therefore any network call) runs.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router, ErrorData as McpError,
};

use crate::handlers;
use crate::n8n::N8nClient;
use crate::params::*;

/// The main n8n MCP Server
///
/// Holds the API client (immutable configuration captured at construction)
/// and the tool routing table. Invocations share no mutable state, so
/// concurrent calls are safe without coordination.
#[derive(Clone)]
pub struct N8nMcpServer {
    client: N8nClient,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl N8nMcpServer {
    pub fn new(client: N8nClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    /// All declared tools, in catalog order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    // ========================================================================
    // Instance Tools
    // ========================================================================

    #[tool(description = "Get health information for the n8n instance")]
    async fn n8n_get_instance_info(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::instance::instance_info(&self.client).await
    }

    #[tool(description = "Get version and settings of the n8n instance")]
    async fn n8n_get_instance_version(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::instance::instance_version(&self.client).await
    }

    // ========================================================================
    // Workflow Tools
    // ========================================================================

    #[tool(description = "List all workflows on the n8n instance")]
    async fn n8n_list_workflows(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::workflow::workflow_list(&self.client).await
    }

    #[tool(description = "Get a single workflow by id")]
    async fn n8n_get_workflow(
        &self,
        Parameters(params): Parameters<WorkflowGetParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::workflow::workflow_get(&self.client, params).await
    }

    #[tool(
        description = "Create a new workflow. Omitted fields default to an inactive workflow with no connections"
    )]
    async fn n8n_create_workflow(
        &self,
        Parameters(params): Parameters<WorkflowCreateParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::workflow::workflow_create(&self.client, params).await
    }

    #[tool(description = "Update an existing workflow; only supplied fields are changed")]
    async fn n8n_update_workflow(
        &self,
        Parameters(params): Parameters<WorkflowUpdateParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::workflow::workflow_update(&self.client, params).await
    }

    #[tool(description = "Delete a workflow")]
    async fn n8n_delete_workflow(
        &self,
        Parameters(params): Parameters<WorkflowDeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::workflow::workflow_delete(&self.client, params).await
    }

    #[tool(description = "Execute a workflow with optional input data")]
    async fn n8n_execute_workflow(
        &self,
        Parameters(params): Parameters<WorkflowExecuteParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::workflow::workflow_execute(&self.client, params).await
    }

    #[tool(description = "Activate a specific workflow")]
    async fn n8n_activate_workflow(
        &self,
        Parameters(params): Parameters<WorkflowActivateParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::workflow::workflow_activate(&self.client, params).await
    }

    #[tool(description = "Deactivate a specific workflow")]
    async fn n8n_deactivate_workflow(
        &self,
        Parameters(params): Parameters<WorkflowDeactivateParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::workflow::workflow_deactivate(&self.client, params).await
    }

    // ========================================================================
    // Execution Tools
    // ========================================================================

    #[tool(description = "List recent workflow executions, newest first")]
    async fn n8n_get_executions(
        &self,
        Parameters(params): Parameters<ExecutionListParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::execution::execution_list(&self.client, params).await
    }

    #[tool(description = "Get details of a single execution")]
    async fn n8n_get_execution(
        &self,
        Parameters(params): Parameters<ExecutionGetParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::execution::execution_get(&self.client, params).await
    }

    #[tool(description = "Try to stop a running execution, if the instance allows it")]
    async fn n8n_stop_execution(
        &self,
        Parameters(params): Parameters<ExecutionStopParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::execution::execution_stop(&self.client, params).await
    }

    // ========================================================================
    // Tag Tools
    // ========================================================================

    #[tool(description = "List all tags configured on the n8n instance")]
    async fn n8n_list_tags(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::tag::tag_list(&self.client).await
    }

    // ========================================================================
    // Credential Tools
    // ========================================================================

    #[tool(description = "List all credentials (metadata only, never secret values)")]
    async fn n8n_list_credentials(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::credential::credential_list(&self.client).await
    }

    #[tool(description = "Get a single credential by id")]
    async fn n8n_get_credential(
        &self,
        Parameters(params): Parameters<CredentialGetParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::credential::credential_get(&self.client, params).await
    }

    #[tool(description = "Create a new credential")]
    async fn n8n_create_credential(
        &self,
        Parameters(params): Parameters<CredentialCreateParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::credential::credential_create(&self.client, params).await
    }

    #[tool(description = "Update an existing credential; only supplied fields are changed")]
    async fn n8n_update_credential(
        &self,
        Parameters(params): Parameters<CredentialUpdateParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::credential::credential_update(&self.client, params).await
    }

    #[tool(description = "Delete a credential")]
    async fn n8n_delete_credential(
        &self,
        Parameters(params): Parameters<CredentialDeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::credential::credential_delete(&self.client, params).await
    }

    // ========================================================================
    // Node Type Tools
    // ========================================================================

    #[tool(description = "List all node types available on the instance")]
    async fn n8n_list_node_types(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::node_type::node_type_list(&self.client).await
    }

    #[tool(
        description = "Get information about one node type by its internal name (e.g. n8n-nodes-base.httpRequest)"
    )]
    async fn n8n_get_node_type(
        &self,
        Parameters(params): Parameters<NodeTypeGetParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::node_type::node_type_get(&self.client, params).await
    }

    // ========================================================================
    // Variable Tools
    // ========================================================================

    #[tool(description = "List all variables configured on the n8n instance")]
    async fn n8n_list_variables(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::variable::variable_list(&self.client).await
    }

    #[tool(description = "Get a specific variable by id")]
    async fn n8n_get_variable(
        &self,
        Parameters(params): Parameters<VariableGetParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::variable::variable_get(&self.client, params).await
    }

    #[tool(description = "Create a new variable")]
    async fn n8n_create_variable(
        &self,
        Parameters(params): Parameters<VariableCreateParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::variable::variable_create(&self.client, params).await
    }

    #[tool(description = "Update an existing variable; only supplied fields are changed")]
    async fn n8n_update_variable(
        &self,
        Parameters(params): Parameters<VariableUpdateParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::variable::variable_update(&self.client, params).await
    }

    #[tool(description = "Delete a variable")]
    async fn n8n_delete_variable(
        &self,
        Parameters(params): Parameters<VariableDeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::variable::variable_delete(&self.client, params).await
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    #[tool(description = "Verify connectivity and permissions against the n8n instance")]
    async fn n8n_self_test(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::system::self_test(&self.client).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for N8nMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "n8n MCP Server - provides tools for managing workflows, executions, \
                 tags, credentials, node types, and variables on an n8n instance \
                 through its REST API. Requires N8N_API_URL and N8N_API_KEY to be \
                 set in the environment."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
