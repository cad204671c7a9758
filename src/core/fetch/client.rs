//! Pooled fetch client

use super::error::FetchError;
use super::lenient::parse_records;
use crate::config::{ClientConfig, Validate};
use crate::core::models::Record;
use crate::utils::error::{FanoutError, Result};
use crate::utils::net::ClientUtils;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::USER_AGENT;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::debug;
use url::Url;

/// Path of the endpoint below the base URL
pub const FOO_PATH: &str = "/foo";

/// Anything that can turn a list of identifiers into records
///
/// The dispatcher only depends on this trait, so tests and alternate
/// transports can stand in for [`FetchClient`].
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, ids: &[String]) -> std::result::Result<Vec<Record>, FetchError>;
}

/// HTTP client for `GET {base_url}/foo?input=...`
///
/// Cheap to share behind an `Arc`: the connection pool and the lease
/// semaphore are both safe for concurrent use, and the configuration never
/// changes after construction.
#[derive(Debug)]
pub struct FetchClient {
    http: Client,
    endpoint: Url,
    config: ClientConfig,
    leases: Arc<Semaphore>,
}

impl FetchClient {
    /// Build a client; the configuration must carry a base URL
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate().map_err(FanoutError::config)?;

        let base_url = config
            .base_url
            .as_deref()
            .ok_or_else(|| FanoutError::config("Fetch client requires a base URL"))?;
        let endpoint = ClientUtils::endpoint(base_url, FOO_PATH)?;
        let http = ClientUtils::create_http_client(&config)?;
        let leases = Arc::new(Semaphore::new(config.max_connections));

        debug!(endpoint = %endpoint, "Fetch client ready");

        Ok(Self {
            http,
            endpoint,
            config,
            leases,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Connection leases not currently held by a request
    pub fn available_leases(&self) -> usize {
        self.leases.available_permits()
    }

    /// Fetch the records for `ids`
    pub async fn fetch<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> std::result::Result<Vec<Record>, FetchError> {
        if ids.is_empty() {
            return Err(FetchError::InvalidRequest(
                "at least one identifier is required".to_string(),
            ));
        }

        let input = ClientUtils::join_ids(ids);
        let budget = self.config.request_timeout();

        match tokio::time::timeout(budget, self.exchange(&input)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::RequestTimeout(format!(
                "no response within {}ms",
                budget.as_millis()
            ))),
        }
    }

    /// Lease a connection slot, then send, retrying connect failures
    async fn exchange(&self, input: &str) -> std::result::Result<Vec<Record>, FetchError> {
        let _lease = self
            .leases
            .acquire()
            .await
            .map_err(|_| FetchError::Transport("connection leases closed".to_string()))?;

        let mut attempt = 1;
        loop {
            match self.send(input).await {
                Err(e) if e.is_connect_failure() && attempt < self.config.connect_attempts => {
                    debug!(attempt, error = %e, "Connect attempt failed, retrying");
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn send(&self, input: &str) -> std::result::Result<Vec<Record>, FetchError> {
        debug!(input, "Sending request");

        let response = self
            .http
            .get(self.endpoint.clone())
            .header(USER_AGENT, self.config.user_agent.as_str())
            .query(&[("input", input)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_records(&body)
    }
}

#[async_trait]
impl Fetch for FetchClient {
    async fn fetch(&self, ids: &[String]) -> std::result::Result<Vec<Record>, FetchError> {
        FetchClient::fetch(self, ids).await
    }
}
