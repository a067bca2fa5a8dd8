//! n8n MCP Library
//!
//! MCP-compatible tools for the n8n workflow automation platform, backed
//! by its REST API.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use n8n_api_mcp::{Config, N8nClient, N8nMcpServer};
//!
//! let config = Config::from_env()?;
//! let server = N8nMcpServer::new(N8nClient::new(&config));
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! # Tool Groups
//! - Instance: health, version/settings
//! - Workflows: list, get, create, update, delete, execute, activate, deactivate
//! - Executions: list, get, stop
//! - Tags: list
//! - Credentials: list, get, create, update, delete
//! - Node types: list, get by internal name
//! - Variables: list, get, create, update, delete
//! - Diagnostics: self-test
//!
//! # Requirements
//! - A reachable n8n instance and an API key for it
//!   (`N8N_API_URL`, `N8N_API_KEY`)

pub mod config;
pub mod handlers;
pub mod n8n;
pub mod params;
pub mod server;

// Re-export main types
pub use config::Config;
pub use n8n::{N8nClient, N8nError};
pub use server::N8nMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
