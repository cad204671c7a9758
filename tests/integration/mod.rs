//! Integration tests for fetch-fanout
//!
//! These tests run batches over real sockets.

pub mod batch_tests;
pub mod config_tests;
pub mod fetch_client_tests;
