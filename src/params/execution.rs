//! Execution-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExecutionListParams {
    #[schemars(description = "Maximum number of executions to return (default: 20)")]
    pub limit: Option<u32>,
    #[schemars(description = "Cursor: only return executions older than this execution ID")]
    pub last_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExecutionGetParams {
    #[schemars(description = "ID of the execution")]
    pub execution_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExecutionStopParams {
    #[schemars(description = "ID of the execution to stop")]
    pub execution_id: String,
}
