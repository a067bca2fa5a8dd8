//! Variable-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct VariableGetParams {
    #[schemars(description = "ID of the variable")]
    pub variable_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct VariableCreateParams {
    #[schemars(description = "Key of the variable")]
    pub key: String,
    #[schemars(description = "Value of the variable")]
    pub value: String,
    #[serde(rename = "type")]
    #[schemars(description = "Variable type (e.g. string, number)")]
    pub variable_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct VariableUpdateParams {
    #[schemars(description = "ID of the variable")]
    pub variable_id: String,
    #[schemars(description = "New key")]
    pub key: Option<String>,
    #[schemars(description = "New value")]
    pub value: Option<String>,
    #[serde(rename = "type")]
    #[schemars(description = "New type")]
    pub variable_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct VariableDeleteParams {
    #[schemars(description = "ID of the variable")]
    pub variable_id: String,
}
