//! Data models exchanged with the stub responder and produced by a batch

pub mod outcome;
pub mod record;

pub use outcome::{FailureKind, Outcome};
pub use record::{PLACEHOLDER_ID, Record};
