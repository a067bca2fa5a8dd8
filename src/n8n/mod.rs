//! n8n REST API wrapper module
//!
//! Provides the HTTP client used by the tool handlers and the error
//! types for calls against an n8n instance.

pub mod client;
pub mod error;

pub use client::N8nClient;
pub use error::{N8nError, N8nResult};
