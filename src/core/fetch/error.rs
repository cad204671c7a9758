//! Per-call fetch failures

use crate::core::models::FailureKind;
use thiserror::Error;

/// Why a single fetch call failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection not established within the connect timeout
    #[error("Connect timeout: {0}")]
    ConnectTimeout(String),

    /// Exchange not finished within the request timeout
    #[error("Request timeout: {0}")]
    RequestTimeout(String),

    /// Connection refused, reset or otherwise not established
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Non-success status from the responder
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// Body was not a JSON array of records
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Request rejected before it was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Any other I/O level fault
    #[error("Transport error: {0}")]
    Transport(String),
}

impl FetchError {
    /// The outcome kind this failure is reported as
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::ConnectTimeout(_) => FailureKind::ConnectTimeout,
            FetchError::RequestTimeout(_) => FailureKind::RequestTimeout,
            FetchError::Connect(_)
            | FetchError::Status(_)
            | FetchError::Decode(_)
            | FetchError::InvalidRequest(_)
            | FetchError::Transport(_) => FailureKind::TransportError,
        }
    }

    /// Failed while establishing the connection; another attempt may help
    pub fn is_connect_failure(&self) -> bool {
        matches!(self, FetchError::ConnectTimeout(_) | FetchError::Connect(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() && err.is_connect() {
            Self::ConnectTimeout(err.to_string())
        } else if err.is_timeout() {
            Self::RequestTimeout(err.to_string())
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_decode() || err.is_body() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
