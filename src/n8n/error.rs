//! Error types for n8n REST API calls
//!
//! This module defines the errors that can occur when talking to an n8n
//! instance: API-level failures, transport failures, timeouts, and
//! response parsing errors.

use thiserror::Error;

/// Longest error-body excerpt carried inside an error message.
const BODY_EXCERPT_MAX: usize = 1024;

/// Errors that can occur when calling the n8n REST API
#[derive(Error, Debug)]
pub enum N8nError {
    /// The API answered with a non-success HTTP status
    #[error("n8n API error {status} {status_text}: {body}")]
    Api {
        /// Numeric HTTP status code
        status: u16,
        /// Canonical status text (e.g. "Not Found")
        status_text: String,
        /// Excerpt of the response body, may be empty
        body: String,
    },

    /// The request did not complete within the client timeout
    #[error("n8n API request timed out: {0}")]
    Timeout(reqwest::Error),

    /// The request could not be sent or the response could not be read
    #[error("failed to reach n8n API: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response declared JSON but the body did not parse as JSON
    #[error("failed to parse n8n response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for n8n API operations
pub type N8nResult<T> = Result<T, N8nError>;

/// Cap an error body so a large HTML error page cannot flood the result.
pub(crate) fn excerpt(body: &str) -> String {
    if body.len() <= BODY_EXCERPT_MAX {
        return body.to_string();
    }
    let mut cut = BODY_EXCERPT_MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status() {
        let err = N8nError::Api {
            status: 404,
            status_text: "Not Found".to_string(),
            body: "workflow not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"), "missing status code: {msg}");
        assert!(msg.contains("Not Found"), "missing status text: {msg}");
        assert!(msg.contains("workflow not found"), "missing body: {msg}");
    }

    #[test]
    fn excerpt_passes_short_bodies_through() {
        assert_eq!(excerpt("short"), "short");
        assert_eq!(excerpt(""), "");
    }

    #[test]
    fn excerpt_caps_long_bodies() {
        let long = "x".repeat(BODY_EXCERPT_MAX * 2);
        let capped = excerpt(&long);
        assert_eq!(capped.len(), BODY_EXCERPT_MAX + 3);
        assert!(capped.ends_with("..."));
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        // Multi-byte characters must not be split mid-codepoint
        let long = "é".repeat(BODY_EXCERPT_MAX);
        let capped = excerpt(&long);
        assert!(capped.len() <= BODY_EXCERPT_MAX + 3);
        assert!(capped.ends_with("..."));
    }
}
