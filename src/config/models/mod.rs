//! Configuration data models
//!
//! This module defines the configuration structures of the harness.

pub mod batch;
pub mod client;
pub mod logging;
pub mod stub;

pub use batch::*;
pub use client::*;
pub use logging::*;
pub use stub::*;

/// Default connect timeout in milliseconds
pub fn default_connect_timeout_ms() -> u64 {
    500
}

/// Default request timeout in milliseconds, lease wait included
pub fn default_request_timeout_ms() -> u64 {
    2_000
}

/// Default number of simultaneous connections
pub fn default_max_connections() -> usize {
    100
}

/// Default number of connection attempts per request
pub fn default_connect_attempts() -> u32 {
    1
}

/// Default User-Agent header
pub fn default_user_agent() -> String {
    "Foo".to_string()
}

/// Default stub host
pub fn default_stub_host() -> String {
    "127.0.0.1".to_string()
}

/// Default stub port
pub fn default_stub_port() -> u16 {
    9090
}

/// Default batch size
pub fn default_batch_size() -> usize {
    100
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
