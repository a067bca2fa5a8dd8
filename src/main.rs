//! n8n MCP Server
//!
//! This server wraps the REST API of an n8n instance to provide
//! MCP-compatible tools for workflow automation.
//!
//! # Features
//!
//! - **Workflows**: List, get, create, update, delete, execute, activate/deactivate
//! - **Executions**: List recent runs, inspect, stop
//! - **Credentials**: List, get, create, update, delete (metadata only on list)
//! - **Node types & variables**: List and lookup
//! - **Diagnostics**: Self-test for connectivity and permissions
//!
//! # Requirements
//!
//! - `N8N_API_URL` - base address of the instance (e.g. https://your-instance.n8n.cloud)
//! - `N8N_API_KEY` - personal n8n API key
//!
//! Both must be set; the server refuses to start half-configured.
//!
//! # Usage
//!
//! Run directly:
//! ```bash
//! N8N_API_URL=... N8N_API_KEY=... n8n-api-mcp
//! ```
//!
//! Or configure in `.mcp.json`:
//! ```json
//! {
//!   "mcpServers": {
//!     "n8n": {
//!       "command": "./target/release/n8n-api-mcp",
//!       "env": { "N8N_API_URL": "...", "N8N_API_KEY": "..." }
//!     }
//!   }
//! }
//! ```

use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod handlers;
mod n8n;
mod params;
mod server;

use config::Config;
use n8n::N8nClient;
use server::N8nMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to stderr (stdout is used for MCP protocol)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive("n8n_api_mcp=info".parse()?))
        .init();

    tracing::info!("Starting n8n MCP Server");

    // Missing configuration is fatal before any request is served
    let config = Config::from_env()?;
    tracing::info!("n8n base URL: {}", config.base_url);

    let server = N8nMcpServer::new(N8nClient::new(&config));
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
