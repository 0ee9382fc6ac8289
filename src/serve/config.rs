//! Listen configuration for the demo service.

use std::net::SocketAddr;

use serde::Serialize;

use crate::serve::error::ServeError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Bind address for the demo service.
#[derive(Debug, Clone, Serialize)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServeConfig {
    /// Read `HOST` and `PORT` from the environment, falling back to
    /// `127.0.0.1:8080`. Unparseable values fall back too.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { host, port }
    }

    /// The socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServeError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|source| ServeError::InvalidAddress {
                addr: format!("{}:{}", self.host, self.port),
                source,
            })
    }
}
