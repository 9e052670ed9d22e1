//! Server configuration.
//!
//! The externally visible configuration surface is two environment
//! variables: `MEETUP_TOKEN` (required bearer token) and `PORT` (listening
//! port, default 3000).

use std::time::Duration;

use crate::error::{ServerError, ServerResult};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the listener to.
    pub bind_address: String,

    /// Listening port.
    pub port: u16,

    /// Bearer token for the remote event source.
    pub token: String,

    /// Idle timeout between requests on one connection.
    pub connection_timeout: Duration,

    /// Maximum concurrent connections.
    pub max_connections: usize,
}

impl ServerConfig {
    /// Creates a configuration with the given token and defaults elsewhere.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            token: token.into(),
            connection_timeout: Duration::from_secs(30),
            max_connections: 100,
        }
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when `MEETUP_TOKEN` is unset or `PORT` is not a valid port
    /// number.
    pub fn from_env() -> ServerResult<Self> {
        let token = std::env::var("MEETUP_TOKEN")
            .map_err(|_| ServerError::config("MEETUP_TOKEN is not set"))?;
        let mut config = Self::new(token);

        if let Ok(raw) = std::env::var("PORT") {
            let port = raw
                .parse::<u16>()
                .map_err(|_| ServerError::config(format!("invalid PORT value: {raw}")))?;
            config.port = port;
        }

        Ok(config)
    }

    /// Builder: set the bind address.
    #[must_use]
    pub fn with_bind_address(mut self, address: impl Into<String>) -> Self {
        self.bind_address = address.into();
        self
    }

    /// Builder: set the listening port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Builder: set the connection idle timeout.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Builder: set the maximum concurrent connections.
    #[must_use]
    pub fn with_max_connections(mut self, max: usize) -> Self {
        self.max_connections = max;
        self
    }

    /// Returns the socket address string to bind to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
