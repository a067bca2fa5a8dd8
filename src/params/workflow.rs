//! Workflow-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowGetParams {
    #[schemars(description = "ID of the workflow")]
    pub workflow_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowCreateParams {
    #[schemars(description = "Name of the workflow")]
    pub name: String,
    #[schemars(description = "Array of workflow nodes")]
    pub nodes: Vec<Value>,
    #[schemars(description = "Connections between nodes (default: {})")]
    pub connections: Option<Value>,
    #[schemars(description = "Whether the workflow starts active (default: false)")]
    pub active: Option<bool>,
    #[schemars(description = "Optional workflow settings (default: {})")]
    pub settings: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowUpdateParams {
    #[schemars(description = "ID of the workflow")]
    pub workflow_id: String,
    #[schemars(description = "New workflow name")]
    pub name: Option<String>,
    #[schemars(description = "Updated workflow nodes")]
    pub nodes: Option<Vec<Value>>,
    #[schemars(description = "Updated connections between nodes")]
    pub connections: Option<Value>,
    #[schemars(description = "Activate or deactivate the workflow")]
    pub active: Option<bool>,
    #[schemars(description = "Updated workflow settings")]
    pub settings: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowDeleteParams {
    #[schemars(description = "ID of the workflow")]
    pub workflow_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowExecuteParams {
    #[schemars(description = "ID of the workflow to execute")]
    pub workflow_id: String,
    #[schemars(description = "Input data for the execution, readable inside the workflow (default: {})")]
    pub payload: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowActivateParams {
    #[schemars(description = "ID of the workflow to activate")]
    pub workflow_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowDeactivateParams {
    #[schemars(description = "ID of the workflow to deactivate")]
    pub workflow_id: String,
}
