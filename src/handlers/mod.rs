//! Tool handler implementations
//!
//! Each submodule implements the handlers for one tool group. The server
//! (`crate::server`) owns the tool declarations and delegates here.
//!
//! API failures never cross the MCP boundary as protocol errors: every
//! handler converts them into a failed tool result whose message names the
//! tool that was running, so callers always see a structured result.

pub mod credential;
pub mod execution;
pub mod instance;
pub mod node_type;
pub mod system;
pub mod tag;
pub mod variable;
pub mod workflow;

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;

use crate::n8n::N8nError;

/// Wrap an n8n API failure as a failed tool result.
pub(crate) fn n8n_failure(tool: &str, err: &N8nError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("error running {tool}: {err}"))])
}

/// Create a successful JSON response from any serializable data.
pub(crate) fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Create a successful plain text response.
pub(crate) fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result_text(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).unwrap();
        value["content"][0]["text"].as_str().unwrap().to_string()
    }

    #[test]
    fn failure_results_carry_the_tool_name() {
        let err = N8nError::Api {
            status: 404,
            status_text: "Not Found".to_string(),
            body: "no such workflow".to_string(),
        };
        let result = n8n_failure("n8n_get_workflow", &err);
        assert_eq!(result.is_error, Some(true));
        let text = result_text(&result);
        assert!(text.contains("n8n_get_workflow"), "missing tool name: {text}");
        assert!(text.contains("404"), "missing status: {text}");
    }

    #[test]
    fn json_success_pretty_prints() {
        let result = json_success(&json!({ "id": "42" })).unwrap();
        assert_ne!(result.is_error, Some(true));
        assert!(result_text(&result).contains("\"id\": \"42\""));
    }

    #[test]
    fn text_success_is_not_an_error() {
        let result = text_success("done");
        assert_ne!(result.is_error, Some(true));
        assert_eq!(result_text(&result), "done");
    }
}
