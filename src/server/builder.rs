//! Scenario runner
//!
//! Starts the stub (when enabled), fires the configured batch at it and
//! shuts everything down again.

use crate::config::{ClientConfig, Config};
use crate::core::batch::{BatchDispatcher, BatchReport};
use crate::core::fetch::FetchClient;
use crate::server::server::{RunningStub, StubServer};
use crate::utils::error::{FanoutError, Result};
use crate::utils::format_duration;
use crate::utils::net::ClientUtils;
use std::time::Duration;
use tracing::{info, warn};

const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Client configuration with the base URL filled in from the stub if needed
pub fn resolve_client_config(config: &Config, stub: Option<&RunningStub>) -> Result<ClientConfig> {
    let mut client = config.client().clone();

    if client.base_url.is_none() {
        let stub = stub.ok_or_else(|| {
            FanoutError::config("A base URL is required when the stub is disabled")
        })?;
        client.base_url = Some(stub.base_url());
    }

    Ok(client)
}

/// Run one batch as described by `config`
pub async fn run_scenario(config: Config) -> Result<BatchReport> {
    config.validate()?;

    let stub = if config.stub().enabled {
        Some(StubServer::new(config.stub()).start().await?)
    } else {
        None
    };

    let result = dispatch_batch(&config, stub.as_ref()).await;

    if let Some(stub) = stub {
        stub.stop().await?;
    }

    result
}

async fn dispatch_batch(config: &Config, stub: Option<&RunningStub>) -> Result<BatchReport> {
    let client_config = resolve_client_config(config, stub)?;

    if stub.is_none() {
        if let Some(base_url) = client_config.base_url.as_deref() {
            if !ClientUtils::probe(base_url, PROBE_TIMEOUT).await {
                warn!("Nothing answered at {}; expect every request to fail", base_url);
            }
        }
    }

    info!(
        connect_timeout_ms = client_config.connect_timeout_ms,
        request_timeout_ms = client_config.request_timeout_ms,
        max_connections = client_config.max_connections,
        "Fetch client configuration"
    );

    let client = FetchClient::new(client_config)?;
    let dispatcher = BatchDispatcher::from_client(client);
    let report = dispatcher.dispatch(config.batch().ids()).await;

    let summary = &report.summary;
    info!(
        "Batch {}: {} total, {} succeeded, {} connect timeouts, {} request timeouts, {} transport errors in {} (slowest {})",
        report.batch_id,
        summary.total,
        summary.succeeded,
        summary.connect_timeouts,
        summary.request_timeouts,
        summary.transport_errors,
        format_duration(summary.total_duration),
        format_duration(summary.max_item_duration),
    );

    Ok(report)
}
