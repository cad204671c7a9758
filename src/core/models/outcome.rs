//! Terminal result of one fetch invocation

use super::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a fetch did not produce records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The connection was not established within the connect timeout
    ConnectTimeout,
    /// The exchange, lease wait included, did not finish within the request timeout
    RequestTimeout,
    /// Any other I/O or protocol fault
    TransportError,
}

impl FailureKind {
    /// Diagnostic notice logged when an element ends with this kind
    pub fn notice(&self) -> &'static str {
        match self {
            FailureKind::ConnectTimeout => "connect timeout",
            FailureKind::RequestTimeout => "lease timeout",
            FailureKind::TransportError => "transport error",
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            FailureKind::ConnectTimeout | FailureKind::RequestTimeout
        )
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::ConnectTimeout => "ConnectTimeout",
            FailureKind::RequestTimeout => "RequestTimeout",
            FailureKind::TransportError => "TransportError",
        };
        f.write_str(name)
    }
}

/// Success with the decoded records, or the kind of failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    Success(Vec<Record>),
    Failure(FailureKind),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(kind) => Some(*kind),
        }
    }

    pub fn records(&self) -> Option<&[Record]> {
        match self {
            Outcome::Success(records) => Some(records),
            Outcome::Failure(_) => None,
        }
    }

    /// The records of a success, or a single placeholder record for a failure
    pub fn records_or_placeholder(&self) -> Vec<Record> {
        match self {
            Outcome::Success(records) => records.clone(),
            Outcome::Failure(_) => vec![Record::placeholder()],
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(records) => write!(f, "Success({} records)", records.len()),
            Outcome::Failure(kind) => write!(f, "Failure({})", kind),
        }
    }
}
