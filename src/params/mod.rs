//! Parameter types for n8n MCP tools
//!
//! One struct per tool; rmcp derives each tool's input schema from these,
//! so required/optional markers and field descriptions live in exactly one
//! place. Workflow payload internals (nodes, connections, settings) are
//! deliberately untyped - they pass through to the n8n API unexamined.

mod credential;
mod execution;
mod node_type;
mod variable;
mod workflow;

pub use credential::*;
pub use execution::*;
pub use node_type::*;
pub use variable::*;
pub use workflow::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Empty parameters for tools that take no arguments
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EmptyParams {}
