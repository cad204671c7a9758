//! Core of the harness: records, the fetch client and batch dispatch

pub mod batch;
pub mod fetch;
pub mod models;
