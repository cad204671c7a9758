//! Stub responder configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Where and how the stub responder listens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StubConfig {
    /// Start the stub before dispatching
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Bind host
    #[serde(default = "default_stub_host")]
    pub host: String,
    /// Bind port; 0 picks an ephemeral port
    #[serde(default = "default_stub_port")]
    pub port: u16,
    /// Listen backlog; 0 keeps the server default
    #[serde(default)]
    pub backlog: u32,
    /// Worker threads (defaults to CPU count)
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: default_stub_host(),
            port: default_stub_port(),
            backlog: 0,
            workers: None,
        }
    }
}

impl StubConfig {
    /// Loopback stub on an ephemeral port
    pub fn ephemeral() -> Self {
        Self {
            port: 0,
            ..Default::default()
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }
}
