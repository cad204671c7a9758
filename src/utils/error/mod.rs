//! Error handling for the harness
//!
//! Crate-level failures live here. Per-request fetch failures have their own
//! closed taxonomy in `core::fetch::error` because they never escape a batch.

pub mod error;

pub use error::*;
