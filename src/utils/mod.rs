//! Utility modules for the harness
//!
//! - **error**: crate-level error type and result alias
//! - **logging**: subscriber installation
//! - **net**: HTTP client construction and URL helpers

pub mod error;
pub mod logging;
pub mod net;

pub use error::{FanoutError, Result};
pub use logging::{LogLevel, init_logging};
pub use net::ClientUtils;

/// Format a duration as a short human readable string
pub fn format_duration(duration: std::time::Duration) -> String {
    let duration_ms = duration.as_millis();
    if duration_ms < 1000 {
        format!("{}ms", duration_ms)
    } else if duration_ms < 60_000 {
        format!("{:.1}s", duration_ms as f64 / 1000.0)
    } else {
        format!("{:.1}m", duration_ms as f64 / 60_000.0)
    }
}
