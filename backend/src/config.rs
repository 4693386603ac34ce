//! Server configuration and environment variable handling.

use std::env;

use tracing::warn;

/// Interface the server binds to when `HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the server listens on when `PORT` is unset or unusable.
pub const DEFAULT_PORT: u16 = 8081;

/// Listener configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host name or address to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Create a server configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: `0.0.0.0`)
    /// - `PORT` (optional, default: `8081`); a value that is not a port
    ///   number is logged and replaced by the default
    pub fn from_env() -> Self {
        let host = env::var("HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) if !raw.trim().is_empty() => raw.trim().parse().unwrap_or_else(|_| {
                warn!(port = %raw, default = DEFAULT_PORT, "PORT is not a valid port number");
                DEFAULT_PORT
            }),
            _ => DEFAULT_PORT,
        };
        Self { host, port }
    }

    /// `host:port`, as accepted by `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!("0.0.0.0", config.host);
        assert_eq!(8081, config.port);
        assert_eq!("0.0.0.0:8081", config.bind_address());
    }
}
