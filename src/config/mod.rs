//! Configuration management for the harness
//!
//! This module handles loading, layering, and validation of the harness configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{FanoutError, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Main configuration struct for the harness
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Outbound fetch client
    #[serde(default)]
    pub client: ClientConfig,
    /// Stub responder
    #[serde(default)]
    pub stub: StubConfig,
    /// Request batch
    #[serde(default)]
    pub batch: BatchConfig,
    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Canned timeout profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// 1 ms connect and request timeouts; timeouts are the expected outcome
    Strict,
    /// Generous loopback timeouts; every request is expected to succeed
    Relaxed,
}

impl FromStr for Preset {
    type Err = FanoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Preset::Strict),
            "relaxed" => Ok(Preset::Relaxed),
            other => Err(FanoutError::config(format!("Unknown preset: {}", other))),
        }
    }
}

impl Config {
    /// Configuration for one of the canned profiles
    pub fn preset(preset: Preset) -> Self {
        let client = match preset {
            Preset::Strict => ClientConfig {
                connect_timeout_ms: 1,
                request_timeout_ms: 1,
                ..Default::default()
            },
            Preset::Relaxed => ClientConfig {
                connect_timeout_ms: 500,
                request_timeout_ms: 2_000,
                ..Default::default()
            },
        };

        Self {
            client,
            ..Default::default()
        }
    }

    /// Load configuration from file
    ///
    /// The result is not validated; layer flags first, then call [`Config::validate`].
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = Self::read_file(path.as_ref()).await?;
        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| FanoutError::config(format!("Failed to parse config: {}", e)))
    }

    /// Apply the keys present in a YAML file on top of this configuration
    pub async fn overlay_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let content = Self::read_file(path.as_ref()).await?;
        self.overlay_yaml(&content)
    }

    /// Apply the keys present in a YAML document on top of this configuration
    ///
    /// Keys missing from the document keep their current value, even when
    /// that value differs from the built-in default.
    pub fn overlay_yaml(self, content: &str) -> Result<Self> {
        let overlay: Value = serde_yaml::from_str(content)
            .map_err(|e| FanoutError::config(format!("Failed to parse config: {}", e)))?;
        if overlay.is_null() {
            return Ok(self);
        }

        let mut layered = serde_yaml::to_value(&self)?;
        overlay_value(&mut layered, overlay);

        serde_yaml::from_value(layered)
            .map_err(|e| FanoutError::config(format!("Failed to parse config: {}", e)))
    }

    async fn read_file(path: &Path) -> Result<String> {
        info!("Loading configuration from: {:?}", path);

        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FanoutError::config(format!("Failed to read config file: {}", e)))
    }

    pub fn client(&self) -> &ClientConfig {
        &self.client
    }

    pub fn stub(&self) -> &StubConfig {
        &self.stub
    }

    pub fn batch(&self) -> &BatchConfig {
        &self.batch
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.client
            .validate()
            .map_err(|e| FanoutError::config(format!("Client config error: {}", e)))?;

        self.stub
            .validate()
            .map_err(|e| FanoutError::config(format!("Stub config error: {}", e)))?;

        self.batch
            .validate()
            .map_err(|e| FanoutError::config(format!("Batch config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| FanoutError::config(format!("Logging config error: {}", e)))?;

        if !self.stub.enabled && self.client.base_url.is_none() {
            return Err(FanoutError::config(
                "A base URL is required when the stub is disabled",
            ));
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FanoutError::config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| FanoutError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

/// Recursively replace `base` entries with those present in `overlay`
fn overlay_value(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => overlay_value(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
