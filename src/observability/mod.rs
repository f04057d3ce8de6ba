//! Observability for shardroute
//!
//! Structured JSON event logging:
//! - One log line = one event
//! - Deterministic key ordering
//! - Synchronous, no buffering

mod logger;

pub use logger::{Logger, Severity};
