//! HTTP Client utilities
//!
//! This module builds the pooled `reqwest` client used by the fetch client and
//! holds the URL and query helpers around it.

pub mod utils;

pub use utils::ClientUtils;

#[cfg(test)]
mod tests;
