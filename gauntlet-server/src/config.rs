//! Server configuration from the environment

use std::net::SocketAddr;
use thiserror::Error;

/// Default listen address
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default log filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Bind address is not a socket address
    #[error("invalid BIND_ADDRESS {value:?}: {source}")]
    InvalidBindAddress {
        /// Raw value
        value: String,
        /// Parse failure
        source: std::net::AddrParseError,
    },
}

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the listener binds to (`BIND_ADDRESS`)
    pub bind_address: SocketAddr,

    /// `tracing` filter directive (`RUST_LOG`)
    pub log_filter: String,
}

impl ServerConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = raw
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddress {
                value: raw.clone(),
                source,
            })?;

        let log_filter = lookup("RUST_LOG")
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            bind_address,
            log_filter,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
