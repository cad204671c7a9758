//! Stub responder and scenario runner
//!
//! This module provides the fixed-response HTTP server and the driver that
//! points a batch at it.

pub mod builder;
pub mod routes;
pub mod server;

pub use builder::run_scenario;
pub use server::{RunningStub, StubServer};
