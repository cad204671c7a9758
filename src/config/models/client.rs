//! Fetch client configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outbound client configuration, fixed once the client is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base service URL; the started stub's address is used when absent
    #[serde(default)]
    pub base_url: Option<String>,
    /// Time allowed to establish a connection
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Time allowed for the whole exchange, including the wait for a lease
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Maximum simultaneous connections
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
    /// Total connection attempts before a connect failure is final
    #[serde(default = "default_connect_attempts")]
    pub connect_attempts: u32,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            connect_timeout_ms: default_connect_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            max_connections: default_max_connections(),
            connect_attempts: default_connect_attempts(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Client config aimed at a specific base URL
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Default::default()
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout_ms = millis(timeout);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = millis(timeout);
        self
    }

    pub fn with_max_connections(mut self, max_connections: usize) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_connect_attempts(mut self, attempts: u32) -> Self {
        self.connect_attempts = attempts;
        self
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Whole milliseconds, saturating at `u64::MAX`
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
