//! Common test utilities for fetch-fanout

use async_trait::async_trait;
use fetch_fanout::{ClientConfig, Fetch, FetchClient, FetchError, Record, RunningStub, StubConfig, StubServer};
use std::collections::HashSet;
use std::time::Duration;
use tokio::net::{TcpListener, TcpSocket, TcpStream};

/// Start the real stub on an ephemeral loopback port
pub async fn start_stub() -> RunningStub {
    StubServer::new(&StubConfig {
        workers: Some(2),
        ..StubConfig::ephemeral()
    })
    .start()
    .await
    .expect("stub should bind an ephemeral port")
}

/// A loopback listener that never accepts, with its accept queue already full
///
/// Keep both values alive for as long as connects should go unanswered.
pub async fn saturated_listener() -> (TcpListener, Vec<TcpStream>) {
    let socket = TcpSocket::new_v4().expect("socket");
    socket
        .bind("127.0.0.1:0".parse().expect("loopback address"))
        .expect("bind loopback");
    let listener = socket.listen(1).expect("listen");
    let addr = listener.local_addr().expect("local address");

    let mut held = Vec::new();
    for _ in 0..256 {
        match tokio::time::timeout(Duration::from_millis(100), TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => held.push(stream),
            _ => break,
        }
    }
    (listener, held)
}

/// Generous loopback timeouts
pub fn relaxed_config(base_url: impl Into<String>) -> ClientConfig {
    ClientConfig::for_base_url(base_url)
        .with_connect_timeout(Duration::from_millis(500))
        .with_request_timeout(Duration::from_millis(2_000))
}

/// Identifiers "1" through "n"
pub fn ids(n: usize) -> Vec<String> {
    (1..=n).map(|i| i.to_string()).collect()
}

/// Sends the listed identifiers to `detour`, everything else to `primary`
pub struct RoutingFetcher {
    pub primary: FetchClient,
    pub detour: FetchClient,
    pub detoured: HashSet<String>,
}

#[async_trait]
impl Fetch for RoutingFetcher {
    async fn fetch(&self, ids: &[String]) -> Result<Vec<Record>, FetchError> {
        if ids.iter().any(|id| self.detoured.contains(id)) {
            self.detour.fetch(ids).await
        } else {
            self.primary.fetch(ids).await
        }
    }
}
