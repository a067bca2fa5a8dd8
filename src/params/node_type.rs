//! Node-type parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct NodeTypeGetParams {
    #[schemars(description = "Internal node type name (e.g. n8n-nodes-base.httpRequest)")]
    pub node_type: String,
}
