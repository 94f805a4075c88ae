//! HTTP server configuration from the environment.

use std::env;
use std::net::SocketAddr;

use tracing::warn;

const BIND_ADDR_VAR: &str = "QUADRA_BIND_ADDR";
const SEED_VAR: &str = "QUADRA_SEED_EXAMPLE_DATA";

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the listener binds to.
    pub bind_addr: SocketAddr,
    /// Load the example catalogue on startup.
    pub seed_example_data: bool,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// `QUADRA_BIND_ADDR` sets the listen address (default `0.0.0.0:8080`;
    /// invalid values warn and fall back). `QUADRA_SEED_EXAMPLE_DATA` set to
    /// `1` or `true` loads the example catalogue at startup.
    pub fn from_env() -> Self {
        Self {
            bind_addr: bind_addr_from_env(),
            seed_example_data: seed_flag_from_env(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            seed_example_data: false,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn bind_addr_from_env() -> SocketAddr {
    match env::var(BIND_ADDR_VAR) {
        Ok(raw) => raw.parse().unwrap_or_else(|error| {
            warn!(var = BIND_ADDR_VAR, value = %raw, %error, "invalid bind address, using default");
            default_bind_addr()
        }),
        Err(_) => default_bind_addr(),
    }
}

fn seed_flag_from_env() -> bool {
    env::var(SEED_VAR)
        .map(|raw| matches!(raw.as_str(), "1" | "true" | "TRUE" | "True"))
        .unwrap_or(false)
}
