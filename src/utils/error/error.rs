//! Error types used across the harness surface
//!
//! Everything here aborts the run before or around a batch (bad configuration,
//! a stub that cannot bind, a client that cannot be built). Nothing here is
//! produced by an individual fetch.

use thiserror::Error;

/// Result type alias for the harness
pub type Result<T> = std::result::Result<T, FanoutError>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum FanoutError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Stub server errors
    #[error("Server error: {0}")]
    Server(String),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Logging(String),
}

impl FanoutError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::Logging(message.into())
    }
}
