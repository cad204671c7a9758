//! Batch configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Shape of the request batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Number of identifiers, submitted as "1" through "size"
    #[serde(default = "default_batch_size")]
    pub size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            size: default_batch_size(),
        }
    }
}

impl BatchConfig {
    /// The identifiers of this batch, in submission order
    pub fn ids(&self) -> Vec<String> {
        (1..=self.size).map(|n| n.to_string()).collect()
    }
}
