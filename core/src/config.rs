//! Client configuration.
//!
//! The server port is supplied once per session. `ClientConfig` is an
//! immutable value handed to the client at construction.

use std::time::Duration;

use crate::error::ValidationError;

pub const DEFAULT_HOST: &str = "localhost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    host: String,
    port: u16,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Build a config for `http://localhost:{port}`.
    ///
    /// The port is trimmed; an empty value is `EmptyPort`, anything that is not
    /// a TCP port number is `InvalidPort`.
    pub fn new(port: &str) -> Result<Self, ValidationError> {
        let port = port.trim();
        if port.is_empty() {
            return Err(ValidationError::EmptyPort);
        }
        let port = port
            .parse::<u16>()
            .ok()
            .filter(|p| *p != 0)
            .ok_or_else(|| ValidationError::InvalidPort(port.to_string()))?;
        Ok(Self {
            host: DEFAULT_HOST.to_string(),
            port,
            timeout: None,
        })
    }

    /// Point the client at `host` instead of `localhost`. A blank host is
    /// `EmptyHost`.
    pub fn with_host(mut self, host: &str) -> Result<Self, ValidationError> {
        let host = host.trim();
        if host.is_empty() {
            return Err(ValidationError::EmptyHost);
        }
        self.host = host.to_string();
        Ok(self)
    }

    /// Bound each request to `timeout`. Without it a request blocks until the
    /// transport returns.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
