use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Default SerpAPI search endpoint.
pub const DEFAULT_SERPAPI_ENDPOINT: &str = "https://serpapi.com/search.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the bundled search page. Looked up at startup when unset.
    pub static_dir: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct SearchConfig {
    /// SerpAPI key. `None` puts the gateway into its fail-open mode.
    pub serpapi_key: Option<String>,
    pub endpoint: String,
}

// Hand-written so the key never ends up in logs.
impl std::fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConfig")
            .field("serpapi_key", &self.serpapi_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            serpapi_key: None,
            endpoint: DEFAULT_SERPAPI_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .context("PORT must be a valid port number")?,
                static_dir: env::var("STATIC_DIR").ok().map(PathBuf::from),
            },
            search: SearchConfig {
                serpapi_key: non_empty(env::var("SERPAPI_API_KEY").ok()),
                endpoint: env::var("SERPAPI_ENDPOINT")
                    .unwrap_or_else(|_| DEFAULT_SERPAPI_ENDPOINT.to_string()),
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
