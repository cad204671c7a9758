//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::*;
use crate::utils::logging::LogLevel;
use crate::utils::net::ClientUtils;
use reqwest::header::HeaderValue;
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating client configuration");

        if self.connect_timeout_ms == 0 {
            return Err("Connect timeout must be greater than 0".to_string());
        }

        if self.request_timeout_ms == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }

        if self.max_connections == 0 {
            return Err("Max connections must be at least 1".to_string());
        }

        if self.connect_attempts == 0 {
            return Err("Connect attempts must be at least 1".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("User agent cannot be empty".to_string());
        }

        if HeaderValue::from_str(&self.user_agent).is_err() {
            return Err(format!(
                "User agent '{}' is not a valid header value",
                self.user_agent
            ));
        }

        if let Some(base_url) = &self.base_url {
            ClientUtils::validate_url(base_url)
                .map_err(|e| format!("Invalid base URL: {}", e))?;
        }

        Ok(())
    }
}

impl Validate for StubConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating stub configuration");

        if self.host.trim().is_empty() {
            return Err("Stub host cannot be empty".to_string());
        }

        if self.workers == Some(0) {
            return Err("Stub workers must be at least 1".to_string());
        }

        Ok(())
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err("Batch size must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        self.level
            .parse::<LogLevel>()
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
