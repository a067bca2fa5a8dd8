//! Configuration loading for the n8n MCP server
//!
//! Configuration comes from the process environment only:
//! - `N8N_API_URL` - base address of the n8n instance
//! - `N8N_API_KEY` - personal API key for that instance
//!
//! Both are required. A server pointed at nothing is worse than no server,
//! so missing or empty values are startup-fatal.

use anyhow::{bail, Result};

/// Immutable client configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the n8n instance, without a trailing slash
    pub base_url: String,
    /// API key sent as `X-N8N-API-KEY` on every request
    pub api_key: String,
}

impl Config {
    /// Build a config from explicit values.
    ///
    /// Trailing slashes on the base URL are stripped here, once, so that
    /// per-call path concatenation never produces `//`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Load configuration from `N8N_API_URL` and `N8N_API_KEY`.
    pub fn from_env() -> Result<Self> {
        match (env_nonempty("N8N_API_URL"), env_nonempty("N8N_API_KEY")) {
            (Some(base_url), Some(api_key)) => Ok(Self::new(base_url, api_key)),
            _ => bail!("N8N_API_URL and N8N_API_KEY must be set in the environment"),
        }
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_trailing_slash() {
        let config = Config::new("https://n8n.example.com/", "key");
        assert_eq!(config.base_url, "https://n8n.example.com");
    }

    #[test]
    fn strips_repeated_trailing_slashes() {
        let config = Config::new("https://n8n.example.com///", "key");
        assert_eq!(config.base_url, "https://n8n.example.com");
    }

    #[test]
    fn keeps_path_components() {
        let config = Config::new("https://example.com/n8n/", "key");
        assert_eq!(config.base_url, "https://example.com/n8n");
    }

    #[test]
    fn keeps_url_without_trailing_slash() {
        let config = Config::new("http://localhost:5678", "key");
        assert_eq!(config.base_url, "http://localhost:5678");
    }
}
