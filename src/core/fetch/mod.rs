//! Fetch client for the `/foo` endpoint
//!
//! One call is one GET carrying the comma joined identifiers, bounded by a
//! connect timeout and by a request timeout that also covers the wait for a
//! connection lease. Every call ends in records or exactly one [`FetchError`].

mod client;
mod error;
mod lenient;


pub use client::{FOO_PATH, Fetch, FetchClient};
pub use error::FetchError;
pub use lenient::parse_records;
