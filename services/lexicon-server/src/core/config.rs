//! Configuration management for the Lexicon service.
//!
//! The only external setting is the listening port, resolved with
//! priority: explicit startup argument > `PORT` env var > default.

use crate::core::error::{LexiconError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};

/// Environment variable consulted for the listening port
pub const PORT_ENV: &str = "PORT";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Listening port (0 picks an ephemeral port)
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load config with priority: explicit port > env var > defaults
    pub fn load(explicit_port: Option<u16>) -> Result<Self> {
        let mut config = Self::default();

        // Override with environment variables
        config.merge_env();

        // Startup argument wins over everything else
        if let Some(port) = explicit_port {
            config.server.port = port;
        }

        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    ///
    /// Unparsable values are ignored with a warning.
    pub fn merge_env(&mut self) {
        if let Ok(port) = env::var(PORT_ENV) {
            match port.trim().parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!(
                    value = %port,
                    "Ignoring invalid {} value, using port {}",
                    PORT_ENV,
                    self.server.port
                ),
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        Ok(())
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|e| LexiconError::Config(format!("Invalid host '{}': {e}", self.server.host)))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Host: {}", self.server.host);
        tracing::info!("  Port: {}", self.server.port);
    }
}
