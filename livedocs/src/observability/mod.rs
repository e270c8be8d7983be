//! Observability module
//!
//! Logging and metrics infrastructure for monitoring `livedocs` while it
//! serves documentation.

pub mod logging;
pub mod metrics;

pub use logging::{LogFormat, init_logging};
pub use metrics::init_metrics;
