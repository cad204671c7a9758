use crate::config::ClientConfig;
use crate::utils::error::{FanoutError, Result};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Utility functions for HTTP client operations
pub struct ClientUtils;

impl ClientUtils {
    /// Creates the pooled HTTP client for a fetch client configuration
    ///
    /// The connect timeout is enforced by the connector. The request timeout is
    /// set here as well so a stalled body read cannot outlive it, although the
    /// fetch client also bounds the lease wait with the same budget.
    pub fn create_http_client(config: &ClientConfig) -> Result<Client> {
        debug!(
            connect_timeout_ms = config.connect_timeout_ms,
            request_timeout_ms = config.request_timeout_ms,
            max_connections = config.max_connections,
            "Building HTTP client"
        );

        let client = ClientBuilder::new()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .pool_max_idle_per_host(config.max_connections)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| FanoutError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(client)
    }

    /// Appends a path to an API base URL
    pub fn add_path_to_api_base(api_base: &str, ending_path: &str) -> String {
        let base = api_base.trim_end_matches('/');
        let path = ending_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Validates a URL for correctness
    pub fn validate_url(url: &str) -> Result<Url> {
        let parsed = Url::parse(url)
            .map_err(|e| FanoutError::validation(format!("Invalid URL '{}': {}", url, e)))?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(FanoutError::validation(format!(
                    "Unsupported URL scheme '{}'. Only http and https are supported",
                    scheme
                )));
            }
        }

        if parsed.host_str().is_none() {
            return Err(FanoutError::validation(format!(
                "URL '{}' must have a host",
                url
            )));
        }

        Ok(parsed)
    }

    /// Resolves the endpoint URL for a path below a base URL
    pub fn endpoint(api_base: &str, path: &str) -> Result<Url> {
        Self::validate_url(&Self::add_path_to_api_base(api_base, path))
    }

    /// Joins identifiers into the comma separated `input` query value
    pub fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
        ids.iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Checks whether anything answers at a URL within the timeout
    pub async fn probe(url: &str, timeout: Duration) -> bool {
        let client = match ClientBuilder::new().timeout(timeout).build() {
            Ok(client) => client,
            Err(_) => return false,
        };

        match client.get(url).send().await {
            Ok(response) => {
                debug!(url, status = %response.status(), "Probe answered");
                true
            }
            Err(e) => {
                debug!(url, error = %e, "Probe failed");
                false
            }
        }
    }
}
