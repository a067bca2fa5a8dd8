//! Credential-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CredentialGetParams {
    #[schemars(description = "ID of the credential")]
    pub credential_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CredentialCreateParams {
    #[schemars(description = "Name of the credential")]
    pub name: String,
    #[serde(rename = "type")]
    #[schemars(description = "Credential type (e.g. httpBasicAuth, apiKey)")]
    pub credential_type: String,
    #[schemars(description = "Object carrying the credential data")]
    pub data: Value,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CredentialUpdateParams {
    #[schemars(description = "ID of the credential")]
    pub credential_id: String,
    #[schemars(description = "New credential name")]
    pub name: Option<String>,
    #[schemars(description = "Updated credential data")]
    pub data: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CredentialDeleteParams {
    #[schemars(description = "ID of the credential")]
    pub credential_id: String,
}
