//! Stub HTTP server
//!
//! This module provides the StubServer struct and the handle of a running stub.

use crate::config::StubConfig;
use crate::server::routes;
use crate::utils::error::{FanoutError, Result};
use actix_web::dev::ServerHandle;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Fixed-response HTTP server used as the fetch target
pub struct StubServer {
    config: StubConfig,
}

impl StubServer {
    pub fn new(config: &StubConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Create the Actix-web application
    fn create_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "fetch-fanout-stub")))
            .configure(routes::configure_routes)
    }

    /// Bind and start serving in the background
    ///
    /// Must be called from inside a tokio runtime. The returned handle owns the
    /// server; drop it only after calling [`RunningStub::stop`].
    pub async fn start(self) -> Result<RunningStub> {
        let bind_addr = self.config.address();
        info!("Starting stub server on {}", bind_addr);

        let mut server =
            ActixHttpServer::new(Self::create_app).workers(self.config.worker_count());
        if self.config.backlog > 0 {
            server = server.backlog(self.config.backlog);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| FanoutError::server(format!("Failed to bind {}: {}", bind_addr, e)))?;

        let local_addr = server
            .addrs()
            .first()
            .copied()
            .ok_or_else(|| FanoutError::server(format!("No address bound for {}", bind_addr)))?;

        let server = server.disable_signals().run();
        let handle = server.handle();
        let task = tokio::spawn(server);

        info!("Stub server listening on {}", local_addr);

        Ok(RunningStub {
            local_addr,
            handle,
            task,
        })
    }
}

/// A stub serving in the background
pub struct RunningStub {
    local_addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<std::io::Result<()>>,
}

impl RunningStub {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// URL clients should use; wildcard binds are reached over loopback
    pub fn base_url(&self) -> String {
        let mut addr = self.local_addr;
        if addr.ip().is_unspecified() {
            addr.set_ip(IpAddr::V4(Ipv4Addr::LOCALHOST));
        }
        format!("http://{}", addr)
    }

    /// Gracefully stop the server and wait for it to exit
    pub async fn stop(self) -> Result<()> {
        debug!("Stopping stub server on {}", self.local_addr);
        self.handle.stop(true).await;

        match self.task.await {
            Ok(result) => result.map_err(FanoutError::from),
            Err(e) => Err(FanoutError::server(format!("Stub server task failed: {}", e))),
        }
    }
}
