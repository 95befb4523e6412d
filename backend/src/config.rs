//! Server configuration and environment variable handling.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default port the server binds to.
pub const DEFAULT_PORT: u16 = 3000;

/// HTTP server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (default: 0.0.0.0)
    pub host: String,
    /// Port to bind (default: 3000)
    pub port: u16,
    /// Directory served for paths no API route matches
    pub static_dir: Option<PathBuf>,
    /// Whether `/docs` and `/docs/openapi.json` are mounted
    pub docs_enabled: bool,
    /// Externally reachable base URL, listed first in the API document
    pub public_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            static_dir: Some(PathBuf::from("static")),
            docs_enabled: true,
            public_url: None,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0)
    /// - `PORT` (optional, default: 3000)
    /// - `STATIC_DIR` (optional, default: `static`; empty disables static files)
    /// - `API_DOCS` (optional, default: true): serve the API documentation
    /// - `PUBLIC_URL` (optional): base URL advertised in the API document
    ///
    /// # Errors
    /// Returns an error if `PORT` or `API_DOCS` cannot be parsed.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .map_err(|_| format!("PORT must be a valid port number, got '{}'", v))?,
            Err(_) => defaults.port,
        };
        let static_dir = match env::var("STATIC_DIR") {
            Ok(v) if v.is_empty() => None,
            Ok(v) => Some(PathBuf::from(v)),
            Err(_) => defaults.static_dir,
        };
        let docs_enabled = match env::var("API_DOCS") {
            Ok(v) => parse_flag(&v)
                .ok_or_else(|| format!("API_DOCS must be true or false, got '{}'", v))?,
            Err(_) => defaults.docs_enabled,
        };
        let public_url = env::var("PUBLIC_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .map(|v| v.trim_end_matches('/').to_string());

        Ok(Self {
            host,
            port,
            static_dir,
            docs_enabled,
            public_url,
        })
    }

    /// Resolve the bind address.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid bind address {}:{}: {}", self.host, self.port, e))
    }

    /// Base URLs advertised in the API document's `servers` list.
    pub fn server_urls(&self) -> Vec<String> {
        let mut urls = Vec::new();
        if let Some(url) = &self.public_url {
            urls.push(url.clone());
        }
        let local = format!("http://localhost:{}", self.port);
        if !urls.contains(&local) {
            urls.push(local);
        }
        urls
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
