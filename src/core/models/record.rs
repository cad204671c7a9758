//! Record returned by the stub responder

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier carried by the placeholder record of a failed fetch
pub const PLACEHOLDER_ID: &str = "timeout";

/// A single entity returned by the `/foo` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Stand-in handed to consumers when a fetch failed
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_ID)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_ID
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record({})", self.id)
    }
}

/// Accepts `"1"` as well as a bare `1`
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Integer(n) => n.to_string(),
        Id::Float(n) => n.to_string(),
    })
}
